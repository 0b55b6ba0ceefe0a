use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenCode> = {
        let mut map = HashMap::new();
        map.insert("class", TokenCode::Class);
        map.insert("void", TokenCode::Void);
        map.insert("if", TokenCode::If);
        map.insert("else", TokenCode::Else);
        map.insert("for", TokenCode::For);
        map.insert("return", TokenCode::Return);
        map.insert("break", TokenCode::Break);
        map.insert("continue", TokenCode::Continue);
        map.insert("int", TokenCode::Int);
        map.insert("real", TokenCode::Real);
        map.insert("static", TokenCode::Static);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenCode {
    Identifier,
    Number,

    IncDecOp, // ++ --
    RelOp,    // == != < > <= >=
    MulOp,    // * / % &&
    AddOp,    // + - ||
    AssignOp, // =

    // Reserved
    Class,
    Void,
    If,
    Else,
    For,
    Return,
    Break,
    Continue,
    Int,
    Real,
    Static,

    LBrace,
    RBrace,
    LBracket,
    RBracket,
    LParen,
    RParen,
    Semicolon,
    Comma,
    Not,

    Eof,
    ErrIllChar,
    ErrLongId,
}

impl TokenCode {
    /// Name of the token class as it appears in "Expected ..." messages.
    pub fn reportable(&self) -> String {
        let name = match self {
            TokenCode::Identifier => "identifier",
            TokenCode::Number => "number",
            TokenCode::IncDecOp => "'++' or '--'",
            TokenCode::RelOp => "relational operator",
            TokenCode::MulOp => "multiplication operator",
            TokenCode::AddOp => "addition operator",
            TokenCode::AssignOp => "'='",
            TokenCode::LBrace => "'{'",
            TokenCode::RBrace => "'}'",
            TokenCode::LBracket => "'['",
            TokenCode::RBracket => "']'",
            TokenCode::LParen => "'('",
            TokenCode::RParen => "')'",
            TokenCode::Semicolon => "';'",
            TokenCode::Comma => "','",
            TokenCode::Not => "'!'",
            TokenCode::Eof => "end of file",
            other => return format!("{:?}", other).to_lowercase(),
        };

        String::from(name)
    }

    /// True for the two sentinel classes the lexer emits for bad input.
    pub fn is_lexical_error(&self) -> bool {
        matches!(self, TokenCode::ErrIllChar | TokenCode::ErrLongId)
    }
}

impl Display for TokenCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Operand sub-kind carried by a token.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DataType {
    None,
    Op,
    Id,
    Int,
    Real,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OpType {
    None,

    Equal,
    NotEqual,
    Lt,
    Gt,
    Lte,
    Gte,

    Plus,
    Minus,
    Or,

    Mult,
    Div,
    Mod,
    And,

    Inc,
    Dec,
}

impl OpType {
    pub fn relational(lexeme: &str) -> OpType {
        match lexeme {
            "==" => OpType::Equal,
            "!=" => OpType::NotEqual,
            "<" => OpType::Lt,
            ">" => OpType::Gt,
            "<=" => OpType::Lte,
            ">=" => OpType::Gte,
            _ => OpType::None,
        }
    }

    pub fn multiplicative(lexeme: &str) -> OpType {
        match lexeme {
            "*" => OpType::Mult,
            "/" => OpType::Div,
            "%" => OpType::Mod,
            "&&" => OpType::And,
            _ => OpType::None,
        }
    }

    pub fn additive(lexeme: &str) -> OpType {
        match lexeme {
            "+" => OpType::Plus,
            "-" => OpType::Minus,
            "||" => OpType::Or,
            _ => OpType::None,
        }
    }

    pub fn inc_dec(lexeme: &str) -> OpType {
        match lexeme {
            "++" => OpType::Inc,
            "--" => OpType::Dec,
            _ => OpType::None,
        }
    }

    pub fn is_sign(&self) -> bool {
        matches!(self, OpType::Plus | OpType::Minus)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub code: TokenCode,
    pub data_type: DataType,
    pub op_type: OpType,
    pub value: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token {{\ncode: {},\nvalue: {},\nat: {}:{}}}",
            self.code,
            self.value,
            self.line(),
            self.column()
        )
    }
}

impl Token {
    pub fn eof(position: Position) -> Token {
        Token {
            code: TokenCode::Eof,
            data_type: DataType::None,
            op_type: OpType::None,
            value: String::from("EOF"),
            position,
        }
    }

    /// 1-based source line.
    pub fn line(&self) -> usize {
        self.position.0 as usize + 1
    }

    /// 1-based source column.
    pub fn column(&self) -> usize {
        self.position.1 as usize + 1
    }

    pub fn is_one_of_many(&self, codes: &[TokenCode]) -> bool {
        codes.contains(&self.code)
    }
}
