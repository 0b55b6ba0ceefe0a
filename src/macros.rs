//! Utility macros for the front end.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed tokens
//!
//! These macros reduce boilerplate in the lexer's pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$code` - The TokenCode
/// * `$data_type` - The operand sub-kind
/// * `$op_type` - The operator kind
/// * `$value` - The token's lexeme
/// * `$position` - The 0-based source position
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenCode::Number, DataType::Int, OpType::None, "42", position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($code:expr, $data_type:expr, $op_type:expr, $value:expr, $position:expr) => {
        Token {
            code: $code,
            data_type: $data_type,
            op_type: $op_type,
            value: String::from($value),
            position: $position,
        }
    };
}

/// Creates a default lexer handler for patterns that always yield the
/// same token class.
///
/// The two-argument form derives the operator kind from the lexeme with
/// the given classifier (one of the `OpType` constructors).
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^;").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenCode::Semicolon),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($code:expr) => {
        |lexeme: &str, position: Position| {
            Some(MK_TOKEN!($code, DataType::None, OpType::None, lexeme, position))
        }
    };
    ($code:expr, $classify:path) => {
        |lexeme: &str, position: Position| {
            Some(MK_TOKEN!($code, DataType::Op, $classify(lexeme), lexeme, position))
        }
    };
}
