use std::collections::{BTreeSet, HashMap};

use super::subst::Substitution;
use super::ty::{TypeScheme, TypeVar};

/// Maps term variables to their type schemes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeEnv {
    bindings: HashMap<String, TypeScheme>,
}

impl TypeEnv {
    pub fn empty() -> Self {
        TypeEnv {
            bindings: HashMap::new(),
        }
    }

    pub fn with_bindings(bindings: Vec<(String, TypeScheme)>) -> Self {
        TypeEnv {
            bindings: bindings.into_iter().collect(),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&TypeScheme> {
        self.bindings.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn extend(&self, name: String, scheme: TypeScheme) -> TypeEnv {
        let mut bindings = self.bindings.clone();
        bindings.insert(name, scheme);
        TypeEnv { bindings }
    }

    /// A copy of this environment without `name`. Absent names are ignored.
    pub fn remove(&self, name: &str) -> TypeEnv {
        let mut bindings = self.bindings.clone();
        bindings.remove(name);
        TypeEnv { bindings }
    }

    pub fn free_type_vars(&self) -> BTreeSet<TypeVar> {
        self.bindings
            .values()
            .flat_map(TypeScheme::free_type_vars)
            .collect()
    }

    pub fn apply_subst(&self, subst: &Substitution) -> TypeEnv {
        let bindings = self
            .bindings
            .iter()
            .map(|(name, scheme)| (name.clone(), subst.apply_scheme(scheme)))
            .collect();

        TypeEnv { bindings }
    }
}
