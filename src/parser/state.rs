use thiserror::Error;

use crate::lexer::Token;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}{}", .message, detail(.expected.as_deref(), .found.as_deref()))]
pub struct ParseError {
    pub message: String,
    pub expected: Option<String>,
    pub found: Option<String>,
}

fn detail(expected: Option<&str>, found: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(expected) = expected {
        out.push_str(&format!(", expected {}", expected));
    }
    if let Some(found) = found {
        out.push_str(&format!(", found {}", found));
    }
    out
}

impl ParseError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            expected: None,
            found: None,
        }
    }

    pub fn expected(mut self, what: impl Into<String>) -> Self {
        self.expected = Some(what.into());
        self
    }

    pub fn found(mut self, what: impl Into<String>) -> Self {
        self.found = Some(what.into());
        self
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

pub struct ParseState {
    tokens: Vec<Token>,
    index: usize,
}

impl ParseState {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, index: 0 }
    }

    pub fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.index).cloned();
        if token.is_some() {
            self.index += 1;
        }
        token
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn restore(&mut self, position: usize) {
        self.index = position;
    }
}

pub trait Parser<T>: Sized {
    fn parse(&self, state: &mut ParseState) -> ParseResult<T>;
}

impl<T, F: Fn(&mut ParseState) -> ParseResult<T>> Parser<T> for F {
    fn parse(&self, state: &mut ParseState) -> ParseResult<T> {
        self(state)
    }
}
