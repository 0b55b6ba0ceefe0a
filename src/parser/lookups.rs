//! Grammar metadata.
//!
//! FIRST sets drive alternative selection, FOLLOW sets are the
//! synchronization points for panic-mode recovery, and descriptions name
//! the enclosing construct in "Invalid ..." diagnostics.

use crate::lexer::tokens::TokenCode as T;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum NonTerminal {
    Program,
    VariableDeclarations,
    Type,
    VariableList,
    VariableListRest,
    Variable,
    VariableRest,
    MethodDeclarations,
    MoreMethodDeclarations,
    MethodDeclaration,
    MethodReturnType,
    Parameters,
    ParameterList,
    ParameterListRest,
    StatementList,
    IdStartingStatement,
    RestOfIdStartingStatement,
    Statement,
    OptionalExpression,
    StatementBlock,
    OptionalElse,
    ExpressionList,
    MoreExpressions,
    Expression,
    ExpressionRest,
    SimpleExpression,
    SimpleExpressionRest,
    Term,
    TermRest,
    IdStartingFactor,
    RestOfIdStartingFactor,
    Factor,
    VariableLoc,
    VariableLocRest,
    Sign,
}

const STATEMENT_FOLLOW: &[T] = &[
    T::If,
    T::For,
    T::Return,
    T::Break,
    T::Continue,
    T::Identifier,
    T::RBrace,
    T::LBrace,
];

const BLOCK_FOLLOW: &[T] = &[
    T::Else,
    T::If,
    T::For,
    T::Return,
    T::Break,
    T::Continue,
    T::Identifier,
    T::RBrace,
    T::LBrace,
];

const EXPRESSION_FOLLOW: &[T] = &[T::Comma, T::Semicolon, T::RBracket, T::RParen];

const SIMPLE_EXPRESSION_FOLLOW: &[T] = &[T::RelOp, T::Comma, T::Semicolon, T::RBracket, T::RParen];

const TERM_FOLLOW: &[T] = &[
    T::AddOp,
    T::RelOp,
    T::Comma,
    T::Semicolon,
    T::RBracket,
    T::RParen,
];

const FACTOR_FOLLOW: &[T] = &[
    T::MulOp,
    T::AddOp,
    T::RelOp,
    T::Comma,
    T::Semicolon,
    T::RBracket,
    T::RParen,
];

impl NonTerminal {
    pub const ALL: [NonTerminal; 35] = [
        NonTerminal::Program,
        NonTerminal::VariableDeclarations,
        NonTerminal::Type,
        NonTerminal::VariableList,
        NonTerminal::VariableListRest,
        NonTerminal::Variable,
        NonTerminal::VariableRest,
        NonTerminal::MethodDeclarations,
        NonTerminal::MoreMethodDeclarations,
        NonTerminal::MethodDeclaration,
        NonTerminal::MethodReturnType,
        NonTerminal::Parameters,
        NonTerminal::ParameterList,
        NonTerminal::ParameterListRest,
        NonTerminal::StatementList,
        NonTerminal::IdStartingStatement,
        NonTerminal::RestOfIdStartingStatement,
        NonTerminal::Statement,
        NonTerminal::OptionalExpression,
        NonTerminal::StatementBlock,
        NonTerminal::OptionalElse,
        NonTerminal::ExpressionList,
        NonTerminal::MoreExpressions,
        NonTerminal::Expression,
        NonTerminal::ExpressionRest,
        NonTerminal::SimpleExpression,
        NonTerminal::SimpleExpressionRest,
        NonTerminal::Term,
        NonTerminal::TermRest,
        NonTerminal::IdStartingFactor,
        NonTerminal::RestOfIdStartingFactor,
        NonTerminal::Factor,
        NonTerminal::VariableLoc,
        NonTerminal::VariableLocRest,
        NonTerminal::Sign,
    ];

    /// Tokens that can begin this symbol.
    ///
    /// Only the symbols the parser disambiguates on have a FIRST set. Asking
    /// for any other one means the grammar table is incomplete, which is a
    /// bug in the parser rather than in the program being parsed.
    pub fn first(self) -> &'static [T] {
        match self {
            NonTerminal::Type | NonTerminal::ParameterList => &[T::Int, T::Real],
            NonTerminal::MethodDeclaration => &[T::Static],
            NonTerminal::Statement => &[
                T::Identifier,
                T::If,
                T::For,
                T::Return,
                T::Break,
                T::Continue,
                T::LBrace,
            ],
            NonTerminal::Expression => &[T::Identifier, T::Number, T::LParen, T::Not, T::AddOp],
            NonTerminal::Sign => &[T::AddOp],
            other => panic!("FIRST set not defined for {:?}", other),
        }
    }

    /// Tokens that can directly follow this symbol.
    pub fn follow(self) -> &'static [T] {
        match self {
            NonTerminal::Program => &[T::Eof],
            NonTerminal::VariableDeclarations => &[
                T::Identifier,
                T::If,
                T::For,
                T::Return,
                T::Break,
                T::Continue,
                T::LBrace,
                T::RBrace,
                T::Static,
            ],
            NonTerminal::Type => &[T::Identifier],
            NonTerminal::VariableList | NonTerminal::VariableListRest => &[T::Semicolon],
            NonTerminal::Variable | NonTerminal::VariableRest => &[T::Comma, T::Semicolon],
            NonTerminal::MethodDeclarations | NonTerminal::MoreMethodDeclarations => &[T::RBrace],
            NonTerminal::MethodDeclaration => &[T::RBrace, T::Static],
            NonTerminal::MethodReturnType => &[T::Identifier],
            NonTerminal::Parameters | NonTerminal::ParameterList | NonTerminal::ParameterListRest => {
                &[T::RParen]
            }
            NonTerminal::StatementList => &[T::RBrace],
            NonTerminal::IdStartingStatement | NonTerminal::Statement | NonTerminal::OptionalElse => {
                STATEMENT_FOLLOW
            }
            NonTerminal::RestOfIdStartingStatement | NonTerminal::OptionalExpression => &[T::Semicolon],
            NonTerminal::StatementBlock => BLOCK_FOLLOW,
            NonTerminal::ExpressionList | NonTerminal::MoreExpressions => &[T::RParen],
            NonTerminal::Expression | NonTerminal::ExpressionRest => EXPRESSION_FOLLOW,
            NonTerminal::SimpleExpression | NonTerminal::SimpleExpressionRest => SIMPLE_EXPRESSION_FOLLOW,
            NonTerminal::Term | NonTerminal::TermRest => TERM_FOLLOW,
            NonTerminal::IdStartingFactor | NonTerminal::RestOfIdStartingFactor | NonTerminal::Factor => {
                FACTOR_FOLLOW
            }
            NonTerminal::VariableLoc | NonTerminal::VariableLocRest => &[T::AssignOp, T::IncDecOp],
            NonTerminal::Sign => &[T::Identifier, T::Number, T::LParen, T::Not],
        }
    }

    pub fn description(self) -> Option<&'static str> {
        match self {
            NonTerminal::Program => Some("program"),
            NonTerminal::VariableDeclarations => Some("variable declaration"),
            NonTerminal::MethodDeclarations | NonTerminal::MethodDeclaration => Some("method declaration"),
            NonTerminal::StatementList => Some("statement"),
            NonTerminal::Expression => Some("expression"),
            _ => None,
        }
    }
}
