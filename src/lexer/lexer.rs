use std::{
    fs::File,
    io::{BufRead, BufReader, Cursor},
    path::Path,
};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{errors::errors::Error, Position, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{DataType, OpType, Token, TokenCode, RESERVED_LOOKUP};

/// Identifiers longer than this come out as `ErrLongId`.
pub const MAX_IDENTIFIER_LEN: usize = 32;

/// Produces tokens one at a time. There is no way to rewind.
pub trait TokenSource {
    /// Pulls the next token. Once the input is exhausted every further
    /// call yields an `Eof` token.
    fn next_token(&mut self) -> Result<Token, Error>;
}

/// Builds a token from the matched lexeme, or `None` for skipped input.
pub type RegexHandler = fn(&str, Position) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^//.*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^[a-zA-Z][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+(\\.[0-9]+)?([eE][+-]?[0-9]+)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^(\\+\\+|--)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenCode::IncDecOp, OpType::inc_dec) },
        RegexPattern { regex: Regex::new("^(==|!=|<=|>=|<|>)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenCode::RelOp, OpType::relational) },
        RegexPattern { regex: Regex::new("^(\\*|/|%|&&)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenCode::MulOp, OpType::multiplicative) },
        RegexPattern { regex: Regex::new("^(\\+|-|\\|\\|)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenCode::AddOp, OpType::additive) },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenCode::AssignOp) },
        RegexPattern { regex: Regex::new("^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenCode::Not) },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenCode::LBrace) },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenCode::RBrace) },
        RegexPattern { regex: Regex::new("^\\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenCode::LBracket) },
        RegexPattern { regex: Regex::new("^\\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenCode::RBracket) },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenCode::LParen) },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenCode::RParen) },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenCode::Semicolon) },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenCode::Comma) },
    ];
}

/// Line-at-a-time scanner over any buffered reader.
pub struct Lexer<R: BufRead> {
    reader: R,
    line: String,
    line_number: u32,
    lines_read: u32,
    offset: usize,
    column: u32,
    end_column: u32,
    in_block_comment: bool,
    at_eof: bool,
}

impl Lexer<BufReader<File>> {
    /// Opens a source file for scanning.
    pub fn open(path: &Path) -> Result<Self, Error> {
        let file = File::open(path).map_err(|source| Error::SourceUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Lexer::new(BufReader::new(file)))
    }
}

impl Lexer<Cursor<String>> {
    pub fn from_source(source: &str) -> Self {
        Lexer::new(Cursor::new(String::from(source)))
    }
}

impl<R: BufRead> Lexer<R> {
    pub fn new(reader: R) -> Lexer<R> {
        Lexer {
            reader,
            line: String::new(),
            line_number: 0,
            lines_read: 0,
            offset: 0,
            column: 0,
            end_column: 0,
            in_block_comment: false,
            at_eof: false,
        }
    }

    fn read_line(&mut self) -> Result<bool, Error> {
        self.line.clear();
        self.offset = 0;
        self.column = 0;

        let read = self.reader.read_line(&mut self.line).map_err(Error::TokenStream)?;
        if read == 0 {
            self.at_eof = true;
            return Ok(false);
        }

        self.line_number = self.lines_read;
        self.lines_read += 1;
        self.end_column = self.line.trim_end_matches(['\n', '\r']).chars().count() as u32;

        Ok(true)
    }

    fn advance(&mut self, lexeme: &str) {
        self.offset += lexeme.len();
        self.column += lexeme.chars().count() as u32;
    }

    pub fn remainder(&self) -> &str {
        &self.line[self.offset..]
    }

    fn skip_block_comment(&mut self) {
        match self.remainder().find("*/") {
            Some(end) => {
                let skipped = String::from(&self.remainder()[..end + 2]);
                self.advance(&skipped);
                self.in_block_comment = false;
            }
            None => {
                let skipped = String::from(self.remainder());
                self.advance(&skipped);
            }
        }
    }

    fn position(&self) -> Position {
        Position(self.line_number, self.column)
    }
}

impl<R: BufRead> TokenSource for Lexer<R> {
    fn next_token(&mut self) -> Result<Token, Error> {
        loop {
            if self.offset >= self.line.len() {
                if self.at_eof || !self.read_line()? {
                    return Ok(Token::eof(Position(self.line_number, self.end_column)));
                }
                continue;
            }

            if self.in_block_comment {
                self.skip_block_comment();
                continue;
            }

            if self.remainder().starts_with("/*") {
                self.in_block_comment = true;
                self.advance("/*");
                continue;
            }

            let position = self.position();
            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(self.remainder())
                    .map(|found| (String::from(found.as_str()), pattern.handler))
            });

            match matched {
                Some((lexeme, handler)) => {
                    self.advance(&lexeme);
                    if let Some(token) = handler(&lexeme, position) {
                        trace!(code = %token.code, value = %token.value, "scanned token");
                        return Ok(token);
                    }
                }
                None => {
                    let lexeme = self.remainder().chars().take(1).collect::<String>();
                    self.advance(&lexeme);
                    trace!(value = %lexeme, "illegal character");
                    return Ok(MK_TOKEN!(TokenCode::ErrIllChar, DataType::None, OpType::None, lexeme, position));
                }
            }
        }
    }
}

fn skip_handler(_lexeme: &str, _position: Position) -> Option<Token> {
    None
}

fn symbol_handler(lexeme: &str, position: Position) -> Option<Token> {
    if let Some(code) = RESERVED_LOOKUP.get(lexeme) {
        return Some(MK_TOKEN!(*code, DataType::None, OpType::None, lexeme, position));
    }

    if lexeme.chars().count() > MAX_IDENTIFIER_LEN {
        return Some(MK_TOKEN!(TokenCode::ErrLongId, DataType::None, OpType::None, lexeme, position));
    }

    Some(MK_TOKEN!(TokenCode::Identifier, DataType::Id, OpType::None, lexeme, position))
}

fn number_handler(lexeme: &str, position: Position) -> Option<Token> {
    let data_type = if lexeme.contains(['.', 'e', 'E']) {
        DataType::Real
    } else {
        DataType::Int
    };

    Some(MK_TOKEN!(TokenCode::Number, data_type, OpType::None, lexeme, position))
}
