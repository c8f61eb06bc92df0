//! Pretty-printing for expressions.
//!
//! Types, schemes and substitutions implement `Display` next to their
//! definitions in [`crate::types`].

pub mod expr;
