//! Recursive-descent parser with panic-mode error recovery.
//!
//! Every non-terminal of the grammar has one `parse_*` function that
//! announces itself to the error handler on entry and exit. Alternatives
//! are chosen by one token of lookahead against the FIRST sets in
//! `lookups`; on an error the handler skips input up to a FOLLOW token of
//! the failing production and parsing resumes from its caller.
//!
//! - `decl`: program, variable and method declarations, parameters
//! - `types`: type names and method return types
//! - `stmt`: statements and blocks
//! - `expr`: expressions, terms and factors

pub mod decl;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
