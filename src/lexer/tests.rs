//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals (integers and reals)
//! - Operator classification
//! - Comments
//! - Positions
//! - Lexical-error sentinels and read failures

use std::io::{self, BufRead, Read};

use super::{
    lexer::{Lexer, TokenSource, MAX_IDENTIFIER_LEN},
    tokens::{DataType, OpType, Token, TokenCode},
};
use crate::errors::errors::Error;

fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::from_source(source);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token().unwrap();
        let done = token.code == TokenCode::Eof;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

fn codes(source: &str) -> Vec<TokenCode> {
    tokenize(source).iter().map(|token| token.code).collect()
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        codes("class void if else for return break continue int real static"),
        vec![
            TokenCode::Class,
            TokenCode::Void,
            TokenCode::If,
            TokenCode::Else,
            TokenCode::For,
            TokenCode::Return,
            TokenCode::Break,
            TokenCode::Continue,
            TokenCode::Int,
            TokenCode::Real,
            TokenCode::Static,
            TokenCode::Eof,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar_1 Classy x9");

    assert_eq!(tokens[0].code, TokenCode::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[0].data_type, DataType::Id);
    assert_eq!(tokens[1].value, "bar_1");
    assert_eq!(tokens[2].code, TokenCode::Identifier);
    assert_eq!(tokens[2].value, "Classy");
    assert_eq!(tokens[3].value, "x9");
    assert_eq!(tokens[4].code, TokenCode::Eof);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 1e10 2.5E-3");

    assert_eq!(tokens[0].code, TokenCode::Number);
    assert_eq!(tokens[0].data_type, DataType::Int);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].data_type, DataType::Real);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].data_type, DataType::Real);
    assert_eq!(tokens[3].data_type, DataType::Real);
    assert_eq!(tokens[3].value, "2.5E-3");
}

#[test]
fn test_tokenize_relational_operators() {
    let tokens = tokenize("== != < > <= >=");
    let ops: Vec<OpType> = tokens[..6].iter().map(|token| token.op_type).collect();

    assert!(tokens[..6].iter().all(|token| token.code == TokenCode::RelOp));
    assert_eq!(
        ops,
        vec![OpType::Equal, OpType::NotEqual, OpType::Lt, OpType::Gt, OpType::Lte, OpType::Gte]
    );
}

#[test]
fn test_tokenize_arithmetic_operators() {
    let tokens = tokenize("+ - || * / % && ++ --");

    assert_eq!(tokens[0].code, TokenCode::AddOp);
    assert_eq!(tokens[0].op_type, OpType::Plus);
    assert_eq!(tokens[1].op_type, OpType::Minus);
    assert_eq!(tokens[2].code, TokenCode::AddOp);
    assert_eq!(tokens[2].op_type, OpType::Or);
    assert_eq!(tokens[3].code, TokenCode::MulOp);
    assert_eq!(tokens[3].op_type, OpType::Mult);
    assert_eq!(tokens[4].op_type, OpType::Div);
    assert_eq!(tokens[5].op_type, OpType::Mod);
    assert_eq!(tokens[6].code, TokenCode::MulOp);
    assert_eq!(tokens[6].op_type, OpType::And);
    assert_eq!(tokens[7].code, TokenCode::IncDecOp);
    assert_eq!(tokens[7].op_type, OpType::Inc);
    assert_eq!(tokens[8].op_type, OpType::Dec);
    assert!(tokens[..9].iter().all(|token| token.data_type == DataType::Op));
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        codes("{ } [ ] ( ) ; , = !"),
        vec![
            TokenCode::LBrace,
            TokenCode::RBrace,
            TokenCode::LBracket,
            TokenCode::RBracket,
            TokenCode::LParen,
            TokenCode::RParen,
            TokenCode::Semicolon,
            TokenCode::Comma,
            TokenCode::AssignOp,
            TokenCode::Not,
            TokenCode::Eof,
        ]
    );
}

#[test]
fn test_tokenize_assignment_next_to_comparison() {
    assert_eq!(
        codes("x=y==z!=!w"),
        vec![
            TokenCode::Identifier,
            TokenCode::AssignOp,
            TokenCode::Identifier,
            TokenCode::RelOp,
            TokenCode::Identifier,
            TokenCode::RelOp,
            TokenCode::Not,
            TokenCode::Identifier,
            TokenCode::Eof,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let source = "int x; // trailing\n/* block\n spanning */ real y;";

    assert_eq!(
        codes(source),
        vec![
            TokenCode::Int,
            TokenCode::Identifier,
            TokenCode::Semicolon,
            TokenCode::Real,
            TokenCode::Identifier,
            TokenCode::Semicolon,
            TokenCode::Eof,
        ]
    );
}

#[test]
fn test_division_is_not_a_comment() {
    assert_eq!(
        codes("a / b"),
        vec![TokenCode::Identifier, TokenCode::MulOp, TokenCode::Identifier, TokenCode::Eof]
    );
}

#[test]
fn test_positions_are_one_based() {
    let tokens = tokenize("class T {\n  int x;\n}");

    assert_eq!((tokens[0].line(), tokens[0].column()), (1, 1));
    assert_eq!((tokens[1].line(), tokens[1].column()), (1, 7));
    assert_eq!((tokens[3].line(), tokens[3].column()), (2, 3));
    assert_eq!((tokens[4].line(), tokens[4].column()), (2, 7));
    assert_eq!((tokens[6].line(), tokens[6].column()), (3, 1));
}

#[test]
fn test_illegal_character() {
    let tokens = tokenize("x = 1 @ 2;");

    assert_eq!(tokens[3].code, TokenCode::ErrIllChar);
    assert_eq!(tokens[3].value, "@");
    assert_eq!(tokens[3].column(), 7);
    assert_eq!(tokens[4].code, TokenCode::Number);
}

#[test]
fn test_identifier_too_long() {
    let long = "a".repeat(MAX_IDENTIFIER_LEN + 1);
    let exact = "b".repeat(MAX_IDENTIFIER_LEN);
    let tokens = tokenize(&format!("{} {}", long, exact));

    assert_eq!(tokens[0].code, TokenCode::ErrLongId);
    assert_eq!(tokens[1].code, TokenCode::Identifier);
}

#[test]
fn test_eof_repeats() {
    let mut lexer = Lexer::from_source("x");

    assert_eq!(lexer.next_token().unwrap().code, TokenCode::Identifier);
    assert_eq!(lexer.next_token().unwrap().code, TokenCode::Eof);
    assert_eq!(lexer.next_token().unwrap().code, TokenCode::Eof);
}

#[test]
fn test_empty_source() {
    let tokens = tokenize("");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].code, TokenCode::Eof);
    assert_eq!(tokens[0].line(), 1);
}

struct BrokenReader;

impl Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
    }
}

impl BufRead for BrokenReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
    }

    fn consume(&mut self, _amt: usize) {}
}

#[test]
fn test_read_failure_is_fatal() {
    let mut lexer = Lexer::new(BrokenReader);

    assert!(matches!(lexer.next_token(), Err(Error::TokenStream(_))));
}
