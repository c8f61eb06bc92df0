//! Display for [`Expr`], in the same concrete syntax the parser accepts.
//!
//! ```text
//! x                   variable
//! 42, True            literals
//! f a                 application, left-associative
//! \x -> e             abstraction, body extends as far right as possible
//! let x = e1 in e2    non-recursive let
//! ```

use std::fmt::{self, Display};

use crate::ast::{Expr, Lit};

impl Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lit::Int(value) => write!(f, "{}", value),
            Lit::Bool(true) => f.write_str("True"),
            Lit::Bool(false) => f.write_str("False"),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Var(name) => f.write_str(name),
            Expr::Lit(lit) => write!(f, "{}", lit),
            Expr::App(func, arg) => {
                write_operand(f, func, |e| matches!(e, Expr::Abs(..) | Expr::Let(..)))?;
                f.write_str(" ")?;
                write_operand(f, arg, |e| {
                    matches!(e, Expr::App(..) | Expr::Abs(..) | Expr::Let(..))
                })
            }
            Expr::Abs(param, body) => write!(f, "\\{} -> {}", param, body),
            Expr::Let(name, bound, body) => write!(f, "let {} = {} in {}", name, bound, body),
        }
    }
}

fn write_operand(
    f: &mut fmt::Formatter<'_>,
    expr: &Expr,
    needs_parens: impl Fn(&Expr) -> bool,
) -> fmt::Result {
    if needs_parens(expr) {
        write!(f, "({})", expr)
    } else {
        write!(f, "{}", expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Expr {
        Expr::abs("x", Expr::var("x"))
    }

    #[test]
    fn test_literals() {
        assert_eq!(Expr::int(2).to_string(), "2");
        assert_eq!(Expr::bool(true).to_string(), "True");
        assert_eq!(Expr::bool(false).to_string(), "False");
    }

    #[test]
    fn test_abstraction_and_let() {
        let expr = Expr::let_in("id", identity(), Expr::var("id"));
        assert_eq!(expr.to_string(), "let id = \\x -> x in id");
    }

    #[test]
    fn test_application_is_left_associative() {
        let expr = Expr::app(
            Expr::app(Expr::var("id"), Expr::var("id")),
            Expr::int(2),
        );
        assert_eq!(expr.to_string(), "id id 2");
    }

    #[test]
    fn test_nested_argument_is_parenthesized() {
        let expr = Expr::app(Expr::var("f"), Expr::app(Expr::var("g"), Expr::var("x")));
        assert_eq!(expr.to_string(), "f (g x)");
    }

    #[test]
    fn test_lambda_in_function_position_is_parenthesized() {
        let expr = Expr::app(identity(), Expr::int(1));
        assert_eq!(expr.to_string(), "(\\x -> x) 1");

        let expr = Expr::app(Expr::var("f"), identity());
        assert_eq!(expr.to_string(), "f (\\x -> x)");
    }

    #[test]
    fn test_lambda_body_extends_right() {
        let expr = Expr::abs("x", Expr::app(Expr::var("x"), Expr::var("x")));
        assert_eq!(expr.to_string(), "\\x -> x x");
    }
}
