//! Lexical analysis module for the front end.
//!
//! This module contains the scanner that turns source text into the
//! classified token stream the parser pulls from. It handles:
//!
//! - Recognition of keywords, identifiers and numeric literals
//! - Operator classification (relational, additive, multiplicative, inc/dec)
//! - Line and block comments, whitespace
//! - Lexical-error sentinels for illegal characters and over-long identifiers
//! - Token position tracking for diagnostics

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
