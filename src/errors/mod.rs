//! Error types, diagnostics and error recovery for the front end.
//!
//! This module defines:
//!
//! - Fatal error conditions (unreadable source, broken token stream)
//! - Diagnostics for syntax and lexical errors with source positions
//! - The error handler that detects errors and performs panic-mode recovery
//! - Reporters that render diagnostics against the source file

pub mod errors;
pub mod handler;
pub mod reporter;
