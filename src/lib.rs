//! # Algorithm W - Hindley-Milner Type Inference
//!
//! `algow` infers the most general type of expressions in a small lambda
//! calculus with integers, booleans and let-polymorphism, or reports why no
//! consistent typing exists.
//!
//! ## Pipeline
//!
//! ```text
//! Source Code (String)
//!     ↓
//! [Lexer] → Token Stream
//!     ↓
//! [Parser] → Expr
//!     ↓
//! [Type Inference] → (Substitution, Type) or TypeError
//! ```
//!
//! The lexer and parser are only a convenience for the command line; the
//! engine itself takes an [`ast::Expr`] and an initial [`types::TypeEnv`].
//!
//! ## Example
//!
//! ```
//! use algow::ast::Expr;
//! use algow::types::{TypeEnv, type_inference};
//!
//! // let id = \x -> x in id id
//! let expr = Expr::let_in(
//!     "id",
//!     Expr::abs("x", Expr::var("x")),
//!     Expr::app(Expr::var("id"), Expr::var("id")),
//! );
//! let ty = type_inference(&TypeEnv::empty(), &expr).unwrap();
//! assert_eq!(ty.to_string(), "d -> d");
//! ```
//!
//! ## Module Structure
//!
//! - [`ast`] - expression syntax tree
//! - [`types`] - types, substitutions, unification and inference
//! - [`fmt`] - pretty-printing of expressions
//! - [`lexer`] - tokenization using lachs
//! - [`parser`] - combinator-based parser for the surface syntax
//! - [`demo`] - the built-in sample expressions

pub mod ast;
pub mod demo;
pub mod fmt;
pub mod lexer;
pub mod parser;
pub mod types;
