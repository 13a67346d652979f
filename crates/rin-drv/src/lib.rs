//! `rinc` - the command-line driver.
//!
//! Unlike a full compiler driver this has exactly one job to do per
//! invocation and no pipeline to orchestrate: read one source file, then
//! either dump its token stream or run it through the parser and report
//! what the parser found. There is no `Config` struct with a dozen fields
//! and no `Session` holding cross-phase state, because there are no flags
//! beyond the single mode switch and no phases beyond lex-then-maybe-parse.

use std::path::PathBuf;

use rin_lex::Lexer;
use rin_par::Parser;
use rin_util::DriverError;

/// Which of the two CLI modes a run was asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print every non-EOF token and exit.
    DumpTokens,
    /// Run the parser and report diagnostics or success.
    Parse,
}

/// The result of parsing `std::env::args()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub mode: Mode,
    pub source_path: PathBuf,
}

/// Parses the argument list (excluding `argv[0]`).
///
/// `--tokens <file>` selects [`Mode::DumpTokens`]; `<file>` alone selects
/// [`Mode::Parse`]. Anything else is a usage error.
pub fn parse_args(args: &[String]) -> Result<Args, DriverError> {
    match args {
        [path] => Ok(Args {
            mode: Mode::Parse,
            source_path: PathBuf::from(path),
        }),
        [flag, path] if flag == "--tokens" => Ok(Args {
            mode: Mode::DumpTokens,
            source_path: PathBuf::from(path),
        }),
        _ => Err(DriverError::BadUsage),
    }
}

/// Runs one invocation end to end, printing to stdout/stderr and returning
/// the process exit code the caller should use.
///
/// Returns `anyhow::Error` at this boundary (per-variant `DriverError`s are
/// for constructing the failure; callers only ever need to display it and
/// exit non-zero, which is exactly what `anyhow` is for).
pub fn run(args: &[String]) -> anyhow::Result<i32> {
    let args = parse_args(args)?;
    let source = std::fs::read_to_string(&args.source_path)
        .map_err(|e| DriverError::Io(args.source_path.clone(), e))?;

    match args.mode {
        Mode::DumpTokens => {
            dump_tokens(&source);
            Ok(0)
        }
        Mode::Parse => Ok(run_parser(&source)),
    }
}

fn dump_tokens(source: &str) {
    let mut lexer = Lexer::new(source);
    for token in &mut lexer {
        println!("{} {}", token.kind.as_str(), token.lexeme);
    }
}

fn run_parser(source: &str) -> i32 {
    let mut parser = Parser::new(source);
    let program = parser.parse_program();

    if parser.has_errors() {
        for err in parser.errors() {
            eprintln!("{err}");
        }
        1
    } else {
        println!(
            "Parsed successfully: {} top-level statement(s).",
            program.statements.len()
        );
        0
    }
}
