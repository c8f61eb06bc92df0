//! # Term Syntax
//!
//! The expression language the inference engine works on: variables,
//! integer and boolean literals, application, single-parameter lambda
//! abstraction and non-recursive `let`.
//!
//! ```text
//! pub enum Expr {
//!     Var(String),                  // x
//!     Lit(Lit),                     // 42, True
//!     App(Box<Expr>, Box<Expr>),    // f x
//!     Abs(String, Box<Expr>),       // \x -> e
//!     Let(String, Box<Expr>, Box<Expr>), // let x = e1 in e2
//! }
//! ```
//!
//! Expressions are built once and never mutated. The `Display`
//! implementation lives in [`crate::fmt`].

/// A literal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lit {
    Int(i64),
    Bool(bool),
}

/// An expression of the term language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Var(String),
    Lit(Lit),
    App(Box<Expr>, Box<Expr>),
    Abs(String, Box<Expr>),
    Let(String, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(name.into())
    }

    pub fn int(value: i64) -> Self {
        Expr::Lit(Lit::Int(value))
    }

    pub fn bool(value: bool) -> Self {
        Expr::Lit(Lit::Bool(value))
    }

    pub fn app(func: Expr, arg: Expr) -> Self {
        Expr::App(Box::new(func), Box::new(arg))
    }

    pub fn abs(param: impl Into<String>, body: Expr) -> Self {
        Expr::Abs(param.into(), Box::new(body))
    }

    pub fn let_in(name: impl Into<String>, bound: Expr, body: Expr) -> Self {
        Expr::Let(name.into(), Box::new(bound), Box::new(body))
    }
}
