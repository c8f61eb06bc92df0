//! # Type Error Definitions
//!
//! Errors produced while inferring the type of an expression:
//!
//! - A variable is used but not bound in the environment (`UnboundVariable`)
//! - Two types cannot be unified (`TypeMismatch`)
//! - A type would be infinite (`OccursCheck`)
//!
//! Every error is terminal: the first one aborts the whole inference call
//! and no partial substitution or type is returned.
//!
//! ## Related Modules
//!
//! - [`crate::types::infer`] - Type inference that produces these errors
//! - [`crate::types::unify`] - Unification errors converted to `TypeError`

use thiserror::Error;

use super::ty::{Type, TypeVar};
use super::unify::UnifyError;

/// Type error encountered during type inference.
///
/// # Example Error Messages
///
/// ```text
/// unbound variable: x
/// types do not unify: Bool vs. Int -> a
/// occurs check fails: a vs. a -> b
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// Reference to a name with no binding in the current environment.
    #[error("unbound variable: {name}")]
    UnboundVariable { name: String },

    /// Two types that must be equal have different shapes.
    #[error("types do not unify: {expected} vs. {found}")]
    TypeMismatch { expected: Type, found: Type },

    /// A type variable would have to contain itself, e.g. `a = a -> Int`.
    #[error("occurs check fails: {var} vs. {ty}")]
    OccursCheck { var: TypeVar, ty: Type },
}

impl TypeError {
    pub fn unbound_variable(name: impl Into<String>) -> Self {
        TypeError::UnboundVariable { name: name.into() }
    }
}

impl From<UnifyError> for TypeError {
    fn from(err: UnifyError) -> Self {
        match err {
            UnifyError::Mismatch { left, right } => TypeError::TypeMismatch {
                expected: left,
                found: right,
            },
            UnifyError::OccursCheck { var, ty } => TypeError::OccursCheck { var, ty },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbound_variable_message() {
        let err = TypeError::unbound_variable("x");
        assert_eq!(err.to_string(), "unbound variable: x");
    }

    #[test]
    fn test_from_unify_mismatch() {
        let err = TypeError::from(UnifyError::Mismatch {
            left: Type::Bool,
            right: Type::Int,
        });
        assert_eq!(
            err,
            TypeError::TypeMismatch {
                expected: Type::Bool,
                found: Type::Int
            }
        );
        assert_eq!(err.to_string(), "types do not unify: Bool vs. Int");
    }

    #[test]
    fn test_from_unify_occurs_check() {
        let ty = Type::func(Type::var("a"), Type::Int);
        let err = TypeError::from(UnifyError::OccursCheck {
            var: TypeVar::new("a"),
            ty,
        });
        assert_eq!(err.to_string(), "occurs check fails: a vs. a -> Int");
    }
}
