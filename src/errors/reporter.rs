use std::{
    io::{self, Stdout, Write},
    path::{Path, PathBuf},
};

use crate::{display_diagnostic, get_line_at_number};

use super::errors::{Diagnostic, Error};

/// Receives each diagnostic as soon as the error handler emits it.
pub trait Reporter {
    fn report(&mut self, diagnostic: &Diagnostic) -> Result<(), Error>;
}

/// Renders diagnostics against the source file, re-reading the
/// offending line for every report.
pub struct SourceReporter<W: Write> {
    path: PathBuf,
    out: W,
}

impl SourceReporter<Stdout> {
    pub fn stdout(path: &Path) -> Self {
        SourceReporter::new(path, io::stdout())
    }
}

impl<W: Write> SourceReporter<W> {
    pub fn new(path: &Path, out: W) -> Self {
        SourceReporter {
            path: path.to_path_buf(),
            out,
        }
    }
}

impl<W: Write> Reporter for SourceReporter<W> {
    fn report(&mut self, diagnostic: &Diagnostic) -> Result<(), Error> {
        let line_text = get_line_at_number(&self.path, diagnostic.line())?;

        writeln!(self.out, "{}", display_diagnostic(diagnostic, &line_text)).map_err(Error::Output)
    }
}

/// Drops every report. The handler still keeps its own log.
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn report(&mut self, _diagnostic: &Diagnostic) -> Result<(), Error> {
        Ok(())
    }
}
