use crate::ast::Expr;
use crate::lexer::Token;

use super::{
    BoxedParser, ParseError, ParseResult, ParseState, Parser, expect_arrow, expect_backslash,
    expect_equals, expect_false, expect_in, expect_let, expect_lparen, expect_rparen, expect_true,
    ident, integer, lazy, many,
};

/// parenthesized := "(" expression ")"
fn parenthesized() -> BoxedParser<Expr> {
    expect_lparen() * lazy(expression) - expect_rparen()
}

/// atom := ident | integer | "True" | "False" | parenthesized
pub fn atom() -> BoxedParser<Expr> {
    let var = ident() >> Expr::Var;
    let int = integer() >> Expr::int;
    let true_lit = expect_true() >> |_| Expr::bool(true);
    let false_lit = expect_false() >> |_| Expr::bool(false);

    (var | int | true_lit | false_lit | parenthesized()).label("expression")
}

/// application := atom atom*
pub fn application() -> BoxedParser<Expr> {
    (atom() + many(atom())) >> |(head, args)| args.into_iter().fold(head, Expr::app)
}

/// lambda := "\" ident "->" expression
pub fn lambda() -> BoxedParser<Expr> {
    ((expect_backslash() * ident() - expect_arrow()) + lazy(expression))
        >> |(param, body)| Expr::abs(param, body)
}

/// let_binding := "let" ident "=" expression "in" expression
pub fn let_binding() -> BoxedParser<Expr> {
    ((expect_let() * ident() - expect_equals())
        + (lazy(expression) - expect_in())
        + lazy(expression))
        >> |((name, bound), body)| Expr::let_in(name, bound, body)
}

/// expression := lambda | let_binding | application
pub fn expression() -> BoxedParser<Expr> {
    BoxedParser::new(|state: &mut ParseState| match state.peek() {
        Some(Token::Backslash(_)) => lambda().parse(state),
        Some(Token::Let(_)) => let_binding().parse(state),
        _ => application().parse(state),
    })
}

/// Parse a complete expression; leftover tokens are an error.
pub fn parse(state: &mut ParseState) -> ParseResult<Expr> {
    let expr = expression().parse(state)?;
    match state.peek() {
        Some(tok) => Err(ParseError::new("unexpected token")
            .expected("end of input")
            .found(tok.describe())),
        None => Ok(expr),
    }
}
