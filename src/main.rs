use std::{io, path::PathBuf, process, time::Instant};

use clap::Parser;
use decaf_syntax::{
    errors::{errors::Error, reporter::SourceReporter},
    lexer::lexer::Lexer,
    parser::parser::parse,
};
use tracing::{debug, error};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "decaf-parse")]
#[command(about = "Check a Decaf source file for syntax errors")]
struct Args {
    /// Path to the source file
    file: PathBuf,

    /// Trace every production, token read and recovery step on stderr
    #[arg(long)]
    trace: bool,

    /// Print the generated three-address code after parsing
    #[arg(long = "emit-code")]
    emit_code: bool,
}

fn init_logging(trace: bool) {
    let filter = if trace {
        EnvFilter::new("decaf_syntax=trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), Error> {
    let start = Instant::now();

    let lexer = Lexer::open(&args.file)?;
    let reporter = SourceReporter::stdout(&args.file);
    let outcome = parse(Box::new(lexer), Box::new(reporter))?;

    debug!(
        diagnostics = outcome.diagnostics.len(),
        symbols = outcome.symbols.len(),
        elapsed = ?start.elapsed(),
        "parsed"
    );

    if args.emit_code {
        outcome.code.print(&mut io::stdout()).map_err(Error::Output)?;
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.trace);

    if let Err(err) = run(&args) {
        error!(kind = err.get_error_name(), "fatal");
        println!("{}", err);
        process::exit(1);
    }
}
