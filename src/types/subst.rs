use std::collections::BTreeMap;
use std::fmt;

use super::ty::{Type, TypeScheme, TypeVar};

/// A finite mapping from type variables to types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution(pub BTreeMap<TypeVar, Type>);

impl Substitution {
    pub fn empty() -> Self {
        Substitution(BTreeMap::new())
    }

    pub fn singleton(var: TypeVar, ty: Type) -> Self {
        Substitution(BTreeMap::from([(var, ty)]))
    }

    pub fn get(&self, var: &TypeVar) -> Option<&Type> {
        self.0.get(var)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn apply(&self, ty: &Type) -> Type {
        match ty {
            Type::Int | Type::Bool => ty.clone(),
            Type::Var(v) => self.0.get(v).cloned().unwrap_or_else(|| ty.clone()),
            Type::Func(t1, t2) => Type::func(self.apply(t1), self.apply(t2)),
        }
    }

    /// Apply to the body of a scheme, leaving its quantified variables alone.
    pub fn apply_scheme(&self, scheme: &TypeScheme) -> TypeScheme {
        let mut narrowed = self.0.clone();
        for var in &scheme.vars {
            narrowed.remove(var);
        }
        TypeScheme {
            vars: scheme.vars.clone(),
            ty: Substitution(narrowed).apply(&scheme.ty),
        }
    }

    /// `self.compose(other)` behaves like applying `other` first and then `self`.
    ///
    /// Every type in `other` is rewritten through `self`; on a key present in
    /// both, the binding from `self` is kept.
    pub fn compose(&self, other: &Substitution) -> Substitution {
        let mut result: BTreeMap<_, _> = other
            .0
            .iter()
            .map(|(var, ty)| (var.clone(), self.apply(ty)))
            .collect();

        for (var, ty) in &self.0 {
            result.insert(var.clone(), ty.clone());
        }

        Substitution(result)
    }
}

impl FromIterator<(TypeVar, Type)> for Substitution {
    fn from_iter<I: IntoIterator<Item = (TypeVar, Type)>>(iter: I) -> Self {
        Substitution(iter.into_iter().collect())
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let bindings: Vec<_> = self
            .0
            .iter()
            .map(|(var, ty)| format!("{} := {}", var, ty))
            .collect();
        write!(f, "{{{}}}", bindings.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str) -> TypeVar {
        TypeVar::new(name)
    }

    #[test]
    fn test_empty_substitution() {
        let subst = Substitution::empty();
        let ty = Type::func(Type::var("a"), Type::Int);
        assert_eq!(subst.apply(&ty), ty);
    }

    #[test]
    fn test_singleton_substitution() {
        let subst = Substitution::singleton(var("a"), Type::Int);
        assert_eq!(subst.apply(&Type::var("a")), Type::Int);
    }

    #[test]
    fn test_apply_to_function() {
        let subst = Substitution::singleton(var("a"), Type::Int);
        let ty = Type::func(Type::var("a"), Type::Bool);
        assert_eq!(subst.apply(&ty), Type::func(Type::Int, Type::Bool));
    }

    #[test]
    fn test_apply_preserves_unbound_vars() {
        let subst = Substitution::singleton(var("a"), Type::Int);
        assert_eq!(subst.apply(&Type::var("b")), Type::var("b"));
    }

    #[test]
    fn test_apply_scheme_skips_bound_vars() {
        let subst: Substitution = [(var("a"), Type::Int), (var("b"), Type::Bool)]
            .into_iter()
            .collect();
        let scheme =
            TypeScheme::polymorphic(vec![var("a")], Type::func(Type::var("a"), Type::var("b")));

        let applied = subst.apply_scheme(&scheme);
        assert_eq!(applied.vars, vec![var("a")]);
        assert_eq!(applied.ty, Type::func(Type::var("a"), Type::Bool));
    }

    #[test]
    fn test_compose_applies_right_then_left() {
        // {a := b} applied first, then {b := Int}
        let s1 = Substitution::singleton(var("b"), Type::Int);
        let s2 = Substitution::singleton(var("a"), Type::var("b"));

        let composed = s1.compose(&s2);
        assert_eq!(composed.apply(&Type::var("a")), Type::Int);
        assert_eq!(composed.apply(&Type::var("b")), Type::Int);
    }

    #[test]
    fn test_compose_left_wins_on_conflict() {
        let s1 = Substitution::singleton(var("a"), Type::Int);
        let s2 = Substitution::singleton(var("a"), Type::Bool);

        let result = s1.compose(&s2);
        assert_eq!(result.apply(&Type::var("a")), Type::Int);
    }

    #[test]
    fn test_compose_associative_under_application() {
        let s1 = Substitution::singleton(var("c"), Type::Bool);
        let s2 = Substitution::singleton(var("b"), Type::func(Type::var("c"), Type::Int));
        let s3 = Substitution::singleton(var("a"), Type::func(Type::var("b"), Type::var("d")));
        let ty = Type::func(Type::var("a"), Type::var("c"));

        let left = s1.compose(&s2.compose(&s3));
        let right = s1.compose(&s2).compose(&s3);
        assert_eq!(left.apply(&ty), right.apply(&ty));
        assert_eq!(
            left.apply(&ty),
            Type::func(
                Type::func(Type::func(Type::Bool, Type::Int), Type::var("d")),
                Type::Bool
            )
        );
    }

    #[test]
    fn test_substitution_idempotent() {
        let subst = Substitution::singleton(var("a"), Type::Int);
        let once = subst.apply(&Type::var("a"));
        let twice = subst.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_display_in_key_order() {
        let subst: Substitution = [
            (var("b"), Type::func(Type::Bool, Type::var("c"))),
            (var("a"), Type::Int),
        ]
        .into_iter()
        .collect();
        assert_eq!(subst.to_string(), "{a := Int, b := Bool -> c}");
    }
}
