//! Error detection and panic-mode recovery.
//!
//! The handler mirrors the parser's live chain of productions as a stack of
//! frames. Frames pushed while recovering are tagged `Recovering`: those
//! productions run against a paused lookahead and consume nothing. Recovery
//! ends when the first `Normal` frame is popped, which is always the frame
//! that was on top when the error was detected (the recovery anchor).

use std::mem;

use tracing::{debug, trace};

use crate::{
    lexer::{
        lexer::TokenSource,
        tokens::{Token, TokenCode},
    },
    parser::lookups::NonTerminal,
    Position,
};

use super::{
    errors::{Diagnostic, DiagnosticKind, Error},
    reporter::Reporter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameTag {
    Normal,
    Recovering,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub symbol: NonTerminal,
    pub tag: FrameTag,
}

/// The current token and the one consumed right before it.
#[derive(Debug, Clone)]
pub struct Lookahead {
    pub current: Token,
    pub previous: Option<Token>,
}

/// A known ambiguity with a cheap fix that avoids skipping input.
struct SpecificRecovery {
    anchor: NonTerminal,
    previous: TokenCode,
    note: &'static str,
}

impl SpecificRecovery {
    fn applies(&self, anchor: NonTerminal, lookahead: &Lookahead) -> bool {
        self.anchor == anchor
            && lookahead
                .previous
                .as_ref()
                .is_some_and(|previous| previous.code == self.previous)
    }
}

const SPECIFIC_RECOVERIES: &[SpecificRecovery] = &[SpecificRecovery {
    anchor: NonTerminal::Statement,
    previous: TokenCode::IncDecOp,
    note: "missing ')' in for",
}];

pub struct ErrorHandler {
    frames: Vec<Frame>,
    anchor: Option<NonTerminal>,
    reporter: Box<dyn Reporter>,
    diagnostics: Vec<Diagnostic>,
    /// Blamed position and lookahead position of the last report.
    last_report: Option<(Position, Position)>,
}

impl ErrorHandler {
    pub fn new(reporter: Box<dyn Reporter>) -> Self {
        ErrorHandler {
            frames: Vec::new(),
            anchor: None,
            reporter,
            diagnostics: Vec::new(),
            last_report: None,
        }
    }

    pub fn in_recovery(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn recovery_anchor(&self) -> Option<NonTerminal> {
        self.anchor
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Announces entry into a production.
    pub fn start(&mut self, symbol: NonTerminal) {
        let tag = if self.in_recovery() {
            FrameTag::Recovering
        } else {
            FrameTag::Normal
        };

        trace!(?symbol, ?tag, "starting");
        self.frames.push(Frame { symbol, tag });
    }

    /// Announces exit from a production.
    pub fn stop(&mut self) {
        let Some(frame) = self.frames.pop() else {
            return;
        };

        match frame.tag {
            FrameTag::Recovering => trace!(symbol = ?frame.symbol, "stopping (recovery)"),
            FrameTag::Normal => match self.anchor.take() {
                Some(anchor) => debug!(?anchor, "continuing after recovery"),
                None => trace!(symbol = ?frame.symbol, "stopping"),
            },
        }
    }

    /// Called when the lookahead is not the token class a production requires.
    pub fn token_mismatch(
        &mut self,
        expected: TokenCode,
        lookahead: &mut Lookahead,
        source: &mut dyn TokenSource,
    ) -> Result<(), Error> {
        if self.in_recovery() {
            trace!(%expected, current = %lookahead.current.code, "mismatch suppressed");
            return Ok(());
        }

        // A missing terminator is best pointed at the token it should follow.
        let blamed = if lookahead.current.code.is_lexical_error() {
            &lookahead.current
        } else if expected == TokenCode::Semicolon {
            lookahead.previous.as_ref().unwrap_or(&lookahead.current)
        } else {
            &lookahead.current
        };

        let kind = lexical_error(blamed).unwrap_or(DiagnosticKind::Expected(expected));
        let position = blamed.position;

        self.emit(kind, position, lookahead)?;
        self.recover(lookahead, source)
    }

    /// Called when no alternative of the active production fits the lookahead.
    pub fn no_match(
        &mut self,
        lookahead: &mut Lookahead,
        source: &mut dyn TokenSource,
    ) -> Result<(), Error> {
        if self.in_recovery() {
            trace!(current = %lookahead.current.code, "no match suppressed");
            return Ok(());
        }

        let kind = lexical_error(&lookahead.current)
            .unwrap_or_else(|| DiagnosticKind::Invalid(self.enclosing_description()));
        let position = lookahead.current.position;

        self.emit(kind, position, lookahead)?;
        self.recover(lookahead, source)
    }

    fn enclosing_description(&self) -> &'static str {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.symbol.description())
            .unwrap_or("program")
    }

    fn context(&self) -> NonTerminal {
        self.frames
            .last()
            .map(|frame| frame.symbol)
            .unwrap_or(NonTerminal::Program)
    }

    /// Reports a diagnostic unless it blames the same token as the previous
    /// report and nothing has been consumed since. Nested productions left
    /// over one paused token each arrive here once.
    fn emit(&mut self, kind: DiagnosticKind, position: Position, lookahead: &Lookahead) -> Result<(), Error> {
        let mark = (position, lookahead.current.position);
        if self.last_report == Some(mark) {
            trace!(%kind, "repeated report dropped");
            return Ok(());
        }
        self.last_report = Some(mark);

        let diagnostic = Diagnostic::new(kind, position, self.context());
        debug!(
            kind = diagnostic.get_error_name(),
            message = %diagnostic,
            line = diagnostic.line(),
            column = diagnostic.column(),
            context = ?diagnostic.context,
            "syntax error"
        );

        self.reporter.report(&diagnostic)?;
        self.diagnostics.push(diagnostic);
        Ok(())
    }

    fn recover(&mut self, lookahead: &mut Lookahead, source: &mut dyn TokenSource) -> Result<(), Error> {
        let anchor = self.context();
        self.anchor = Some(anchor);

        if let Some(rule) = SPECIFIC_RECOVERIES
            .iter()
            .find(|rule| rule.applies(anchor, lookahead))
        {
            debug!(note = rule.note, "specific recovery");
            self.anchor = None;
            return Ok(());
        }

        let follow = anchor.follow();
        while lookahead.current.code != TokenCode::Eof && !lookahead.current.is_one_of_many(follow) {
            trace!(skipped = %lookahead.current.code, "discarding token");
            let next = source.next_token()?;
            lookahead.previous = Some(mem::replace(&mut lookahead.current, next));
        }

        debug!(?anchor, sync = %lookahead.current.code, "synchronized");
        Ok(())
    }
}

fn lexical_error(token: &Token) -> Option<DiagnosticKind> {
    match token.code {
        TokenCode::ErrIllChar => Some(DiagnosticKind::IllegalCharacter),
        TokenCode::ErrLongId => Some(DiagnosticKind::IdentifierTooLong),
        _ => None,
    }
}
