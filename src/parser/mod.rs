//! Surface syntax for [`Expr`].
//!
//! ```text
//! expression  := "\" ident "->" expression
//!              | "let" ident "=" expression "in" expression
//!              | application
//! application := atom atom*
//! atom        := ident | integer | "True" | "False" | "(" expression ")"
//! ```
//!
//! The parser is built from boxed closures (see [`combinators`]) over the
//! token stream produced by [`crate::lexer::Token::lex`].

mod combinators;
mod grammar;
mod state;

pub use combinators::*;
pub use grammar::*;
pub use state::*;

use crate::ast::Expr;
use crate::lexer::Token;

/// Lex and parse `source` into an expression.
pub fn parse_expr(source: &str) -> ParseResult<Expr> {
    let tokens =
        Token::lex(source).map_err(|err| ParseError::new(format!("lexing failed: {}", err)))?;
    if tokens.is_empty() {
        return Err(ParseError::new("empty input").expected("expression"));
    }
    let mut state = ParseState::new(tokens);
    parse(&mut state)
}
