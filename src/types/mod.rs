//! # Type Inference
//!
//! Hindley-Milner type inference (Algorithm W) for [`Expr`].
//!
//! ```text
//! type_inference(env, expr)
//!     ↓
//! Infer::run ── infer_expr (recursive) ──┬── unify / bind_var
//!                                        ├── instantiate (variable lookups)
//!                                        └── generalize  (let bindings)
//! ```
//!
//! - [`ty`] - types, type variables and schemes
//! - [`subst`] - substitutions and their composition
//! - [`env`] - the typing environment
//! - [`fresh`] - fresh type variable names
//! - [`unify`] - most general unifier with occurs check
//! - [`infer`] - the inference engine
//! - [`error`] - errors reported to callers

pub mod env;
pub mod error;
pub mod fresh;
pub mod infer;
pub mod subst;
pub mod ty;
pub mod unify;

use tracing::debug;

use crate::ast::Expr;

pub use env::TypeEnv;
pub use error::TypeError;
pub use fresh::NameSupply;
pub use infer::Infer;
pub use subst::Substitution;
pub use ty::{Type, TypeScheme, TypeVar};
pub use unify::{UnifyError, unify};

/// Infer the most general type of `expr` under `env`.
///
/// The accumulated substitution is applied to the result once more, since
/// intermediate steps never rewrite types they already returned.
pub fn type_inference(env: &TypeEnv, expr: &Expr) -> Result<Type, TypeError> {
    infer_with_subst(env, expr).map(|(_, ty)| ty)
}

/// Like [`type_inference`], but also hands back the final substitution.
pub fn infer_with_subst(env: &TypeEnv, expr: &Expr) -> Result<(Substitution, Type), TypeError> {
    debug!(%expr, "inferring");
    let result = Infer::new().run(env, expr);
    match &result {
        Ok((_, ty)) => debug!(%ty, "inferred"),
        Err(err) => debug!(%err, "inference failed"),
    }
    result
}
