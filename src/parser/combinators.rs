use std::ops::{Add, BitOr, Mul, Shr, Sub};
use std::rc::Rc;

use crate::lexer::Token;

use super::state::{ParseError, ParseResult, ParseState, Parser};

type ParserFn<T> = Rc<dyn Fn(&mut ParseState) -> ParseResult<T>>;

// === Boxed Parser for type erasure ===

pub struct BoxedParser<T> {
    parser: ParserFn<T>,
}

impl<T> Clone for BoxedParser<T> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Rc::clone(&self.parser),
        }
    }
}

impl<T: 'static> BoxedParser<T> {
    pub fn new<P: Parser<T> + 'static>(parser: P) -> Self {
        BoxedParser {
            parser: Rc::new(move |state| parser.parse(state)),
        }
    }
}

impl<T> Parser<T> for BoxedParser<T> {
    fn parse(&self, state: &mut ParseState) -> ParseResult<T> {
        (self.parser)(state)
    }
}

// === Combinators as methods ===

impl<T: 'static> BoxedParser<T> {
    /// Sequence: parse self then other, return (T, U)
    pub fn seq<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<(T, U)> {
        BoxedParser::new(move |state: &mut ParseState| {
            let a = self.parse(state)?;
            let b = other.parse(state)?;
            Ok((a, b))
        })
    }

    /// Keep left: parse self then other, discard other's result
    pub fn skip<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<T> {
        BoxedParser::new(move |state: &mut ParseState| {
            let a = self.parse(state)?;
            other.parse(state)?;
            Ok(a)
        })
    }

    /// Keep right: parse self then other, discard self's result
    pub fn skip_left<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<U> {
        BoxedParser::new(move |state: &mut ParseState| {
            self.parse(state)?;
            other.parse(state)
        })
    }

    /// Map: transform the parsed value with `f`
    pub fn map<U: 'static, F: Fn(T) -> U + 'static>(self, f: F) -> BoxedParser<U> {
        BoxedParser::new(move |state: &mut ParseState| {
            let a = self.parse(state)?;
            Ok(f(a))
        })
    }

    /// Choice: try self, if fails rewind and try other
    pub fn or(self, other: BoxedParser<T>) -> BoxedParser<T> {
        BoxedParser::new(move |state: &mut ParseState| {
            let pos = state.position();
            match self.parse(state) {
                Ok(a) => Ok(a),
                Err(_) => {
                    state.restore(pos);
                    other.parse(state)
                }
            }
        })
    }

    /// Replace the `expected` part of an error with `name`, as long as the
    /// failure happened before any token was consumed
    pub fn label(self, name: &'static str) -> BoxedParser<T> {
        BoxedParser::new(move |state: &mut ParseState| {
            let pos = state.position();
            self.parse(state).map_err(|err| {
                if state.position() == pos {
                    err.expected(name)
                } else {
                    err
                }
            })
        })
    }
}

// === Operator Overloading ===

/// `+` for sequence: A + B -> (A, B)
impl<T: 'static, U: 'static> Add<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<(T, U)>;

    fn add(self, rhs: BoxedParser<U>) -> Self::Output {
        self.seq(rhs)
    }
}

/// `-` for keep left: A - B -> A (parse B, discard result)
impl<T: 'static, U: 'static> Sub<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn sub(self, rhs: BoxedParser<U>) -> Self::Output {
        self.skip(rhs)
    }
}

/// `*` for keep right: A * B -> B (parse A, discard result)
impl<T: 'static, U: 'static> Mul<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn mul(self, rhs: BoxedParser<U>) -> Self::Output {
        self.skip_left(rhs)
    }
}

/// `|` for choice: A | B -> A or B
impl<T: 'static> BitOr<BoxedParser<T>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn bitor(self, rhs: BoxedParser<T>) -> Self::Output {
        self.or(rhs)
    }
}

/// `>>` for map: A >> fn -> B
impl<T: 'static, U: 'static, F: Fn(T) -> U + 'static> Shr<F> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn shr(self, f: F) -> Self::Output {
        self.map(f)
    }
}

// === Primitive Parsers ===

/// Consume the next token if `select` accepts it.
fn token_with_error<T: 'static, F: Fn(&Token) -> Option<T> + 'static>(
    select: F,
    expected: &'static str,
) -> BoxedParser<T> {
    BoxedParser::new(move |state: &mut ParseState| match state.peek() {
        Some(tok) => match select(tok) {
            Some(value) => {
                state.advance();
                Ok(value)
            }
            None => Err(ParseError::new("unexpected token")
                .expected(expected)
                .found(tok.describe())),
        },
        None => Err(ParseError::new("unexpected end of input").expected(expected)),
    })
}

fn expect_token<F: Fn(&Token) -> bool + 'static>(
    predicate: F,
    expected: &'static str,
) -> BoxedParser<Token> {
    token_with_error(
        move |t| if predicate(t) { Some(t.clone()) } else { None },
        expected,
    )
}

pub fn ident() -> BoxedParser<String> {
    token_with_error(
        |t| match t {
            Token::Ident(inner) => Some(inner.value.clone()),
            _ => None,
        },
        "identifier",
    )
}

pub fn integer() -> BoxedParser<i64> {
    let digits = token_with_error(
        |t| match t {
            Token::Integer(inner) => Some(inner.value.clone()),
            _ => None,
        },
        "integer",
    );
    BoxedParser::new(move |state: &mut ParseState| {
        let value = digits.parse(state)?;
        value.parse::<i64>().map_err(|_| {
            ParseError::new("integer literal out of range").found(format!("'{}'", value))
        })
    })
}

pub fn expect_let() -> BoxedParser<Token> {
    expect_token(|t| matches!(t, Token::Let(_)), "'let'")
}

pub fn expect_in() -> BoxedParser<Token> {
    expect_token(|t| matches!(t, Token::In(_)), "'in'")
}

pub fn expect_true() -> BoxedParser<Token> {
    expect_token(|t| matches!(t, Token::True(_)), "'True'")
}

pub fn expect_false() -> BoxedParser<Token> {
    expect_token(|t| matches!(t, Token::False(_)), "'False'")
}

pub fn expect_equals() -> BoxedParser<Token> {
    expect_token(|t| matches!(t, Token::Equals(_)), "'='")
}

pub fn expect_backslash() -> BoxedParser<Token> {
    expect_token(|t| matches!(t, Token::Backslash(_)), "'\\'")
}

pub fn expect_arrow() -> BoxedParser<Token> {
    expect_token(|t| matches!(t, Token::Arrow(_)), "'->'")
}

pub fn expect_lparen() -> BoxedParser<Token> {
    expect_token(|t| matches!(t, Token::LParen(_)), "'('")
}

pub fn expect_rparen() -> BoxedParser<Token> {
    expect_token(|t| matches!(t, Token::RParen(_)), "')'")
}

/// Parse zero or more occurrences
pub fn many<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Vec<T>> {
    BoxedParser::new(move |state: &mut ParseState| {
        let mut results = Vec::new();
        loop {
            let pos = state.position();
            match parser.parse(state) {
                Ok(item) => results.push(item),
                Err(_) => {
                    state.restore(pos);
                    break;
                }
            }
        }
        Ok(results)
    })
}

/// Defer construction of a recursive parser until parse time
pub fn lazy<T: 'static>(make: fn() -> BoxedParser<T>) -> BoxedParser<T> {
    BoxedParser::new(move |state: &mut ParseState| make().parse(state))
}
