#![allow(clippy::module_inception)]

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::errors::errors::{Diagnostic, Error};

pub mod codegen;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// 0-based line and column of a token's first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(pub u32, pub u32);

/// Returns the text of a 1-based line without its line terminator. A line
/// past the end of the file comes back empty.
pub fn get_line_at_number(file: &Path, line: usize) -> Result<String, Error> {
    let unreadable = |source| Error::SourceUnreadable {
        path: file.to_path_buf(),
        source,
    };

    let reader = BufReader::new(File::open(file).map_err(unreadable)?);

    for (index, text) in reader.lines().enumerate() {
        let text = text.map_err(unreadable)?;
        if index + 1 == line {
            return Ok(text);
        }
    }

    Ok(String::new())
}

pub fn display_diagnostic(diagnostic: &Diagnostic, line_text: &str) -> String {
    /*
         12: x = 1 @ 2;
                   ^ Illegal character
    */

    let padding = diagnostic.column() + 4;

    format!(
        "{:>3}: {}\n{}^ {}",
        diagnostic.line(),
        line_text,
        " ".repeat(padding),
        diagnostic
    )
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::{
        errors::errors::{Diagnostic, DiagnosticKind},
        lexer::tokens::TokenCode,
        parser::lookups::NonTerminal,
        Position,
    };

    #[test]
    fn test_get_line_at_number() {
        let path = Path::new("tests/test_file.txt");

        assert_eq!(super::get_line_at_number(path, 1).unwrap(), "Hello, world!");
        assert_eq!(super::get_line_at_number(path, 4).unwrap(), "Testing { }");
        assert_eq!(super::get_line_at_number(path, 100).unwrap(), "");
    }

    #[test]
    fn test_get_line_at_number_missing_file() {
        let result = super::get_line_at_number(Path::new("tests/no_such_file.txt"), 1);

        assert!(result.is_err());
        assert_eq!(result.unwrap_err().get_error_name(), "SourceUnreadable");
    }

    #[test]
    fn test_display_diagnostic() {
        let diagnostic = Diagnostic::new(
            DiagnosticKind::Expected(TokenCode::Semicolon),
            Position(6, 12),
            NonTerminal::IdStartingStatement,
        );

        let rendered = super::display_diagnostic(&diagnostic, "    x = y + 1");

        assert_eq!(
            rendered,
            "  7:     x = y + 1\n                 ^ Expected ';'"
        );
    }
}
