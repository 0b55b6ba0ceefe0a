//! Parser implementation.
//!
//! This module contains the Parser struct that owns one parse session: the
//! token source, the lookahead pair, the error handler, and the symbol
//! table / code generator fed by successful reductions. The grammar
//! productions themselves live in `decl`, `types`, `stmt` and `expr`, one
//! function per non-terminal.

use std::mem;

use tracing::trace;

use crate::{
    codegen::{
        symbol_table::SymbolTable,
        tac::{CodeGenerator, TacCode},
    },
    errors::{
        errors::{Diagnostic, Error},
        handler::{ErrorHandler, Lookahead},
        reporter::Reporter,
    },
    lexer::{
        lexer::TokenSource,
        tokens::{Token, TokenCode},
    },
};

use super::{decl::parse_program, lookups::NonTerminal};

/// The main parser structure that maintains parsing state.
///
/// Temporary and label counters live here so that every parse numbers its
/// generated names from scratch.
pub struct Parser {
    /// Where tokens are pulled from
    source: Box<dyn TokenSource>,
    /// Current token and the one consumed before it
    lookahead: Lookahead,
    /// Error detection, reporting and recovery state
    handler: ErrorHandler,
    /// Names declared during the parse
    symbols: SymbolTable,
    /// Quadruples emitted during the parse
    code: CodeGenerator,
    temp_counter: u32,
    label_counter: u32,
}

/// Everything a finished parse leaves behind.
pub struct ParseOutcome {
    pub diagnostics: Vec<Diagnostic>,
    pub symbols: SymbolTable,
    pub code: CodeGenerator,
}

impl ParseOutcome {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl Parser {
    /// Creates a new Parser and pulls the first token.
    ///
    /// # Arguments
    ///
    /// * `source` - The token source to parse from
    /// * `reporter` - Receives each diagnostic as it is emitted
    pub fn new(mut source: Box<dyn TokenSource>, reporter: Box<dyn Reporter>) -> Result<Self, Error> {
        let current = source.next_token()?;

        Ok(Parser {
            source,
            lookahead: Lookahead {
                current,
                previous: None,
            },
            handler: ErrorHandler::new(reporter),
            symbols: SymbolTable::new(),
            code: CodeGenerator::new(),
            temp_counter: 0,
            label_counter: 0,
        })
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.lookahead.current
    }

    /// Returns the class of the current token.
    pub fn current_token_kind(&self) -> TokenCode {
        self.lookahead.current.code
    }

    pub fn previous_token(&self) -> Option<&Token> {
        self.lookahead.previous.as_ref()
    }

    pub fn lookahead_is(&self, code: TokenCode) -> bool {
        self.current_token_kind() == code
    }

    pub fn lookahead_in(&self, codes: &[TokenCode]) -> bool {
        self.current_token().is_one_of_many(codes)
    }

    /// `||` is an additive operator but cannot start an expression.
    pub fn lookahead_is_first_of_expression(&self) -> bool {
        if !self.lookahead_in(NonTerminal::Expression.first()) {
            return false;
        }

        !self.lookahead_is(TokenCode::AddOp) || self.current_token().op_type.is_sign()
    }

    pub fn lookahead_is_first_of_sign(&self) -> bool {
        self.lookahead_is(TokenCode::AddOp) && self.current_token().op_type.is_sign()
    }

    pub fn in_recovery(&self) -> bool {
        self.handler.in_recovery()
    }

    pub fn handler(&self) -> &ErrorHandler {
        &self.handler
    }

    /// Announces entry into a production.
    pub fn start(&mut self, symbol: NonTerminal) {
        self.handler.start(symbol);
    }

    /// Announces exit from a production.
    pub fn stop(&mut self) {
        self.handler.stop();
    }

    fn advance(&mut self) -> Result<(), Error> {
        let next = self.source.next_token()?;
        trace!(code = %next.code, line = next.line(), "next token read");

        let previous = mem::replace(&mut self.lookahead.current, next);
        self.lookahead.previous = Some(previous);
        Ok(())
    }

    /// Matches the current token against the expected class.
    ///
    /// On a match the token is consumed and returned. While recovering
    /// nothing is consumed: the lookahead stays paused until the production
    /// that failed has been left. On a mismatch the error handler reports
    /// (unless recovering) and hands back the token pair to continue from.
    ///
    /// # Returns
    ///
    /// `Some(token)` if a token was consumed, `None` otherwise.
    pub fn expect(&mut self, expected: TokenCode) -> Result<Option<Token>, Error> {
        if self.current_token_kind() != expected {
            self.handler
                .token_mismatch(expected, &mut self.lookahead, self.source.as_mut())?;
            trace!(%expected, current = %self.current_token_kind(), "failed match");
            return Ok(None);
        }

        if self.in_recovery() {
            trace!(current = %self.current_token_kind(), "next token skipped because of recovery");
            return Ok(None);
        }

        self.advance()?;
        Ok(self.lookahead.previous.clone())
    }

    /// Reports that no alternative of the active production fits.
    pub fn no_match(&mut self) -> Result<(), Error> {
        self.handler.no_match(&mut self.lookahead, self.source.as_mut())
    }

    /// Emits a quadruple unless the parser is recovering.
    pub fn emit(&mut self, op: TacCode, arg1: Option<&str>, arg2: Option<&str>, result: Option<&str>) {
        if self.in_recovery() {
            return;
        }

        self.code.generate(op, arg1, arg2, result);
    }

    /// Inserts a declared name and emits its declaring quadruple.
    pub fn declare(&mut self, op: TacCode, name: &str, arg1: Option<&str>) {
        if self.in_recovery() {
            return;
        }

        self.symbols.insert(name);
        self.code.generate(op, arg1, None, Some(name));
    }

    /// Generates the next temporary (`t1`, `t2`, ...).
    pub fn new_temp(&mut self) -> Option<String> {
        if self.in_recovery() {
            return None;
        }

        self.temp_counter += 1;
        let name = format!("t{}", self.temp_counter);
        self.declare(TacCode::Var, &name, None);

        Some(name)
    }

    /// Generates the next label name (`lab1`, `lab2`, ...). The label is
    /// placed separately with `place_label`.
    pub fn new_label(&mut self) -> Option<String> {
        if self.in_recovery() {
            return None;
        }

        self.label_counter += 1;
        let name = format!("lab{}", self.label_counter);
        self.symbols.insert(&name);

        Some(name)
    }

    pub fn place_label(&mut self, label: &str) {
        self.emit(TacCode::Label, None, None, Some(label));
    }

    pub fn finish(self) -> ParseOutcome {
        ParseOutcome {
            diagnostics: self.handler.into_diagnostics(),
            symbols: self.symbols,
            code: self.code,
        }
    }
}

/// Parses one translation unit.
///
/// This is the main entry point. Syntax and lexical errors are reported
/// through `reporter` and recovered from; only fatal I/O makes it fail.
///
/// # Arguments
///
/// * `source` - The token source to parse from
/// * `reporter` - Receives each diagnostic as it is emitted
pub fn parse(source: Box<dyn TokenSource>, reporter: Box<dyn Reporter>) -> Result<ParseOutcome, Error> {
    let mut parser = Parser::new(source, reporter)?;
    parse_program(&mut parser)?;

    Ok(parser.finish())
}
