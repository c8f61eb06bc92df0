//! The fixed battery of sample expressions shown by `algow --demo`.

use crate::ast::Expr;
use crate::types::{TypeEnv, type_inference};

fn identity() -> Expr {
    Expr::abs("x", Expr::var("x"))
}

/// `\x -> let y = x in y`
fn identity_via_let() -> Expr {
    Expr::abs("x", Expr::let_in("y", Expr::var("x"), Expr::var("y")))
}

fn id_id() -> Expr {
    Expr::app(Expr::var("id"), Expr::var("id"))
}

pub fn samples() -> Vec<Expr> {
    vec![
        Expr::let_in("id", identity(), Expr::var("id")),
        Expr::let_in("id", identity(), id_id()),
        Expr::let_in("id", identity_via_let(), id_id()),
        Expr::let_in("id", identity_via_let(), Expr::app(id_id(), Expr::int(2))),
        Expr::let_in(
            "id",
            Expr::abs("x", Expr::app(Expr::var("x"), Expr::var("x"))),
            Expr::var("id"),
        ),
        Expr::abs(
            "m",
            Expr::let_in(
                "y",
                Expr::var("m"),
                Expr::let_in(
                    "x",
                    Expr::app(Expr::var("y"), Expr::bool(true)),
                    Expr::var("x"),
                ),
            ),
        ),
    ]
}

/// `<expr> :: <type>` on success, `<expr>` and `error: <message>` on two
/// lines otherwise.
pub fn report(env: &TypeEnv, expr: &Expr) -> String {
    match type_inference(env, expr) {
        Ok(ty) => format!("{} :: {}", expr, ty),
        Err(err) => format!("{}\nerror: {}", expr, err),
    }
}

/// Reports for every sample against an empty environment.
pub fn run() -> Vec<String> {
    let env = TypeEnv::empty();
    samples().iter().map(|expr| report(&env, expr)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_samples() {
        assert_eq!(samples().len(), 6);
    }

    #[test]
    fn test_report_success() {
        let line = report(&TypeEnv::empty(), &Expr::int(1));
        assert_eq!(line, "1 :: Int");
    }

    #[test]
    fn test_report_error() {
        let line = report(&TypeEnv::empty(), &Expr::var("x"));
        assert_eq!(line, "x\nerror: unbound variable: x");
    }
}
