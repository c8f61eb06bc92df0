use thiserror::Error;
use tracing::trace;

use super::subst::Substitution;
use super::ty::{Type, TypeVar};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnifyError {
    #[error("types do not unify: {left} vs. {right}")]
    Mismatch { left: Type, right: Type },
    #[error("occurs check fails: {var} vs. {ty}")]
    OccursCheck { var: TypeVar, ty: Type },
}

/// Check if a type variable occurs within a type (occurs check).
///
/// Binding `'a := 'a -> Int` would describe an infinite type, so `bind_var`
/// refuses any binding whose right-hand side mentions the variable itself.
///
/// ```text
/// occurs_in(a, Int)      = false
/// occurs_in(a, a)        = true
/// occurs_in(a, a -> Int) = true
/// occurs_in(a, b -> c)   = false
/// ```
fn occurs_in(var: &TypeVar, ty: &Type) -> bool {
    match ty {
        Type::Int | Type::Bool => false,
        Type::Var(v) => v == var,
        Type::Func(t1, t2) => occurs_in(var, t1) || occurs_in(var, t2),
    }
}

/// Bind a type variable to a type.
///
/// Binding a variable to itself is a no-op; binding it to a type that
/// contains it fails the occurs check.
pub fn bind_var(var: &TypeVar, ty: &Type) -> Result<Substitution, UnifyError> {
    if matches!(ty, Type::Var(v) if v == var) {
        return Ok(Substitution::empty());
    }
    if occurs_in(var, ty) {
        return Err(UnifyError::OccursCheck {
            var: var.clone(),
            ty: ty.clone(),
        });
    }
    trace!(%var, %ty, "bind");
    Ok(Substitution::singleton(var.clone(), ty.clone()))
}

/// Compute the most general unifier of two types.
///
/// # Algorithm
///
/// ```text
/// unify(Int, Int)   = {}
/// unify(Bool, Bool) = {}
/// unify(a, t)       = bind_var(a, t)
/// unify(t, a)       = bind_var(a, t)
///
/// unify(l -> r, l' -> r'):
///   s1 = unify(l, l')
///   s2 = unify(s1(r), s1(r'))
///   result = s2 . s1
/// ```
///
/// The codomains must be unified after applying `s1`, otherwise a choice
/// made for the domains could be contradicted:
///
/// ```text
/// unify(a -> a, Int -> b):
///   s1 = {a := Int}
///   s2 = unify(Int, b) = {b := Int}
///   result = {a := Int, b := Int}
/// ```
///
/// Any other pairing is a mismatch.
pub fn unify(t1: &Type, t2: &Type) -> Result<Substitution, UnifyError> {
    match (t1, t2) {
        (Type::Func(l1, r1), Type::Func(l2, r2)) => {
            let s1 = unify(l1, l2)?;
            let s2 = unify(&s1.apply(r1), &s1.apply(r2))?;
            Ok(s2.compose(&s1))
        }

        (Type::Var(v), t) | (t, Type::Var(v)) => bind_var(v, t),

        (Type::Int, Type::Int) | (Type::Bool, Type::Bool) => Ok(Substitution::empty()),

        _ => Err(UnifyError::Mismatch {
            left: t1.clone(),
            right: t2.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str) -> TypeVar {
        TypeVar::new(name)
    }

    /// Applying the unifier to both sides must yield the same type.
    fn assert_unifies(t1: &Type, t2: &Type) -> Substitution {
        let subst = unify(t1, t2).expect("types should unify");
        assert_eq!(subst.apply(t1), subst.apply(t2));
        subst
    }

    #[test]
    fn test_unify_identical_base_types() {
        assert_eq!(unify(&Type::Int, &Type::Int), Ok(Substitution::empty()));
        assert_eq!(unify(&Type::Bool, &Type::Bool), Ok(Substitution::empty()));
    }

    #[test]
    fn test_unify_var_with_concrete() {
        let result = unify(&Type::var("a"), &Type::Int);
        assert_eq!(result, Ok(Substitution::singleton(var("a"), Type::Int)));
    }

    #[test]
    fn test_unify_concrete_with_var() {
        let result = unify(&Type::Int, &Type::var("a"));
        assert_eq!(result, Ok(Substitution::singleton(var("a"), Type::Int)));
    }

    #[test]
    fn test_unify_two_vars() {
        let result = unify(&Type::var("a"), &Type::var("b"));
        assert_eq!(result, Ok(Substitution::singleton(var("a"), Type::var("b"))));
    }

    #[test]
    fn test_unify_same_var() {
        assert_eq!(
            unify(&Type::var("a"), &Type::var("a")),
            Ok(Substitution::empty())
        );
    }

    #[test]
    fn test_bind_var_to_itself() {
        assert_eq!(
            bind_var(&var("a"), &Type::var("a")),
            Ok(Substitution::empty())
        );
    }

    #[test]
    fn test_unify_occurs_check_direct() {
        let ty = Type::func(Type::var("a"), Type::Int);
        let result = unify(&Type::var("a"), &ty);
        assert_eq!(
            result,
            Err(UnifyError::OccursCheck {
                var: var("a"),
                ty: ty.clone()
            })
        );
    }

    #[test]
    fn test_unify_occurs_check_nested() {
        let ty = Type::func(Type::Int, Type::func(Type::Bool, Type::var("a")));
        let result = unify(&ty, &Type::var("a"));
        assert!(matches!(result, Err(UnifyError::OccursCheck { .. })));
    }

    #[test]
    fn test_unify_function_types_with_vars() {
        let t1 = Type::func(Type::var("a"), Type::Int);
        let t2 = Type::func(Type::Bool, Type::var("b"));

        let subst = assert_unifies(&t1, &t2);
        assert_eq!(subst.apply(&Type::var("a")), Type::Bool);
        assert_eq!(subst.apply(&Type::var("b")), Type::Int);
    }

    #[test]
    fn test_unify_threads_domain_substitution() {
        // (a -> a) ~ (Int -> b)
        let t1 = Type::func(Type::var("a"), Type::var("a"));
        let t2 = Type::func(Type::Int, Type::var("b"));

        let subst = assert_unifies(&t1, &t2);
        assert_eq!(subst.apply(&Type::var("a")), Type::Int);
        assert_eq!(subst.apply(&Type::var("b")), Type::Int);
    }

    #[test]
    fn test_unify_nested_functions() {
        let t1 = Type::func(Type::func(Type::Int, Type::var("a")), Type::var("b"));
        let t2 = Type::func(Type::var("c"), Type::func(Type::var("a"), Type::Bool));

        let subst = assert_unifies(&t1, &t2);
        assert_eq!(
            subst.apply(&t1),
            Type::func(
                Type::func(Type::Int, Type::var("a")),
                Type::func(Type::var("a"), Type::Bool)
            )
        );
    }

    #[test]
    fn test_unify_mismatch_concrete() {
        let result = unify(&Type::Int, &Type::Bool);
        assert_eq!(
            result,
            Err(UnifyError::Mismatch {
                left: Type::Int,
                right: Type::Bool
            })
        );
    }

    #[test]
    fn test_unify_mismatch_shape() {
        let ty_func = Type::func(Type::Int, Type::Int);
        let result = unify(&Type::Int, &ty_func);
        assert!(matches!(result, Err(UnifyError::Mismatch { .. })));
    }

    #[test]
    fn test_unify_mismatch_in_codomain() {
        let t1 = Type::func(Type::var("a"), Type::Int);
        let t2 = Type::func(Type::Bool, Type::Bool);
        let result = unify(&t1, &t2);
        assert_eq!(
            result,
            Err(UnifyError::Mismatch {
                left: Type::Int,
                right: Type::Bool
            })
        );
    }

    #[test]
    fn test_error_messages() {
        let mismatch = UnifyError::Mismatch {
            left: Type::Int,
            right: Type::func(Type::var("a"), Type::var("b")),
        };
        assert_eq!(mismatch.to_string(), "types do not unify: Int vs. a -> b");

        let occurs = UnifyError::OccursCheck {
            var: var("a"),
            ty: Type::func(Type::var("a"), Type::var("b")),
        };
        assert_eq!(occurs.to_string(), "occurs check fails: a vs. a -> b");
    }

    #[test]
    fn test_occurs_check_helper() {
        let a = var("a");
        assert!(occurs_in(&a, &Type::var("a")));
        assert!(!occurs_in(&a, &Type::var("b")));
        assert!(!occurs_in(&a, &Type::Int));
        assert!(occurs_in(&a, &Type::func(Type::Int, Type::var("a"))));
        assert!(occurs_in(
            &a,
            &Type::func(Type::func(Type::var("a"), Type::Int), Type::Bool)
        ));
    }
}
