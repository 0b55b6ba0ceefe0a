use std::{fmt::Display, io, path::PathBuf};

use thiserror::Error;

use crate::{lexer::tokens::TokenCode, parser::lookups::NonTerminal, Position};

/// Conditions that end the whole run. Syntax errors never end up here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unable to read source file {path:?}: {source}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("IOException reading next token: {0}")]
    TokenStream(#[source] io::Error),
    #[error("unable to write diagnostic: {0}")]
    Output(#[source] io::Error),
}

impl Error {
    pub fn get_error_name(&self) -> &str {
        match self {
            Error::SourceUnreadable { .. } => "SourceUnreadable",
            Error::TokenStream(_) => "TokenStream",
            Error::Output(_) => "Output",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticKind {
    IllegalCharacter,
    IdentifierTooLong,
    Expected(TokenCode),
    Invalid(&'static str),
}

impl Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagnosticKind::IllegalCharacter => write!(f, "Illegal character"),
            DiagnosticKind::IdentifierTooLong => write!(f, "Identifier too long"),
            DiagnosticKind::Expected(code) => write!(f, "Expected {}", code.reportable()),
            DiagnosticKind::Invalid(description) => write!(f, "Invalid {}", description),
        }
    }
}

/// One reported syntax or lexical error.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Where the blamed token starts.
    pub position: Position,
    /// The production that was active when the error was detected.
    pub context: NonTerminal,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, position: Position, context: NonTerminal) -> Self {
        Diagnostic {
            kind,
            position,
            context,
        }
    }

    /// 1-based line of the blamed token.
    pub fn line(&self) -> usize {
        self.position.0 as usize + 1
    }

    /// 1-based column of the blamed token.
    pub fn column(&self) -> usize {
        self.position.1 as usize + 1
    }

    pub fn get_error_name(&self) -> &str {
        match &self.kind {
            DiagnosticKind::IllegalCharacter => "IllegalCharacter",
            DiagnosticKind::IdentifierTooLong => "IdentifierTooLong",
            DiagnosticKind::Expected(_) => "UnexpectedToken",
            DiagnosticKind::Invalid(_) => "NoViableAlternative",
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}
