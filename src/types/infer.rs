use tracing::trace;

use super::env::TypeEnv;
use super::error::TypeError;
use super::fresh::NameSupply;
use super::subst::Substitution;
use super::ty::{Type, TypeScheme};
use super::unify::unify;
use crate::ast::{Expr, Lit};

/// Algorithm W over [`Expr`].
///
/// Owns the fresh-name supply for one inference run. Every step returns a
/// `Result` and the first error aborts the run.
pub struct Infer {
    supply: NameSupply,
}

impl Infer {
    pub fn new() -> Self {
        Infer {
            supply: NameSupply::new(),
        }
    }

    /// Infer `expr` from a clean name supply and apply the final
    /// substitution to the resulting type.
    ///
    /// Fresh names avoid the type variables free in `env`.
    pub fn run(&mut self, env: &TypeEnv, expr: &Expr) -> Result<(Substitution, Type), TypeError> {
        self.supply.reset(env.free_type_vars());
        let (subst, ty) = self.infer_expr(env, expr)?;
        let ty = subst.apply(&ty);
        Ok((subst, ty))
    }

    pub fn fresh_var(&mut self) -> Type {
        Type::Var(self.supply.fresh())
    }

    /// Replace every quantified variable of `scheme` with a fresh one.
    pub fn instantiate(&mut self, scheme: &TypeScheme) -> Type {
        let subst: Substitution = scheme
            .vars
            .iter()
            .map(|v| (v.clone(), self.fresh_var()))
            .collect();
        let ty = subst.apply(&scheme.ty);
        trace!(%scheme, %ty, "instantiate");
        ty
    }

    /// Quantify over the variables of `ty` that are not free in `env`.
    pub fn generalize(env: &TypeEnv, ty: &Type) -> TypeScheme {
        let free_in_env = env.free_type_vars();
        let free_in_ty = ty.free_type_vars();
        let vars: Vec<_> = free_in_ty.difference(&free_in_env).cloned().collect();
        let scheme = TypeScheme::polymorphic(vars, ty.clone());
        trace!(%scheme, "generalize");
        scheme
    }

    pub fn infer_expr(
        &mut self,
        env: &TypeEnv,
        expr: &Expr,
    ) -> Result<(Substitution, Type), TypeError> {
        match expr {
            Expr::Var(name) => match env.lookup(name) {
                Some(scheme) => {
                    let ty = self.instantiate(scheme);
                    Ok((Substitution::empty(), ty))
                }
                None => Err(TypeError::unbound_variable(name.clone())),
            },

            Expr::Lit(lit) => Ok((Substitution::empty(), Self::infer_lit(lit))),

            Expr::Abs(param, body) => self.infer_abs(env, param, body),

            Expr::App(func, arg) => self.infer_app(env, func, arg),

            Expr::Let(name, bound, body) => self.infer_let(env, name, bound, body),
        }
    }

    fn infer_lit(lit: &Lit) -> Type {
        match lit {
            Lit::Int(_) => Type::Int,
            Lit::Bool(_) => Type::Bool,
        }
    }

    fn infer_abs(
        &mut self,
        env: &TypeEnv,
        param: &str,
        body: &Expr,
    ) -> Result<(Substitution, Type), TypeError> {
        let param_ty = self.fresh_var();
        let env1 = env
            .remove(param)
            .extend(param.to_string(), TypeScheme::monomorphic(param_ty.clone()));
        let (s1, body_ty) = self.infer_expr(&env1, body)?;
        let param_ty_subst = s1.apply(&param_ty);
        Ok((s1, Type::func(param_ty_subst, body_ty)))
    }

    fn infer_app(
        &mut self,
        env: &TypeEnv,
        func: &Expr,
        arg: &Expr,
    ) -> Result<(Substitution, Type), TypeError> {
        let result_ty = self.fresh_var();

        let (s1, func_ty) = self.infer_expr(env, func)?;
        let env1 = env.apply_subst(&s1);
        let (s2, arg_ty) = self.infer_expr(&env1, arg)?;

        let func_ty_subst = s2.apply(&func_ty);
        let s3 = unify(&func_ty_subst, &Type::func(arg_ty, result_ty.clone()))?;

        let final_ty = s3.apply(&result_ty);
        let final_subst = s3.compose(&s2.compose(&s1));
        Ok((final_subst, final_ty))
    }

    fn infer_let(
        &mut self,
        env: &TypeEnv,
        name: &str,
        bound: &Expr,
        body: &Expr,
    ) -> Result<(Substitution, Type), TypeError> {
        let (s1, bound_ty) = self.infer_expr(env, bound)?;

        let env1 = env.remove(name);
        let scheme = Self::generalize(&env1.apply_subst(&s1), &bound_ty);
        let env2 = env1.extend(name.to_string(), scheme);

        let (s2, body_ty) = self.infer_expr(&env2.apply_subst(&s1), body)?;
        Ok((s1.compose(&s2), body_ty))
    }
}

impl Default for Infer {
    fn default() -> Self {
        Self::new()
    }
}
