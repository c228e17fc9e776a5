//! Lox Language CLI
//!
//! Runs a script file, or starts an interactive prompt when no script is
//! given. Each input is scanned and its tokens are printed one per line.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lox_lang::error::{EXIT_IO, EXIT_USAGE};
use lox_lang::{scan, scan_all, Diagnostic, LoxError, LoxResult, VERSION};

/// Lox - scanner for the Lox scripting language
#[derive(Parser, Debug)]
#[command(name = "lox")]
#[command(version = VERSION)]
#[command(about = "Scan Lox source and print its tokens", long_about = None)]
struct Cli {
    /// Script to run; starts an interactive prompt when omitted
    #[arg(value_name = "SCRIPT")]
    scripts: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "LOX_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, env = "LOX_NO_COLOR")]
    no_color: bool,

    /// Report every scan error instead of stopping at the first
    #[arg(long, env = "LOX_ALL_ERRORS")]
    all_errors: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.scripts.len() > 1 {
        eprintln!("Usage: lox [script]");
        process::exit(EXIT_USAGE);
    }

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = init_logging(cli.verbose, cli.no_color) {
        eprintln!("{}", e);
    }

    match cli.scripts.first() {
        Some(path) => {
            if let Err(err) = run_file(path, cli.all_errors) {
                if let LoxError::Io(ref e) = err {
                    eprintln!("Failed to read file '{}': {}", path.display(), e);
                }
                process::exit(err.exit_code());
            }
        }
        None => {
            if let Err(e) = run_prompt(cli.all_errors) {
                eprintln!("Error reading input: {}", e);
                process::exit(EXIT_IO);
            }
        }
    }
}

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence; otherwise `--verbose` selects `debug` and
/// the default is `warn`. Logs go to stderr so token output stays on stdout.
fn init_logging(verbose: bool, no_color: bool) -> Result<(), String> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if verbose => EnvFilter::new("debug"),
        Err(_) => EnvFilter::new("warn"),
    };

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| format!("Failed to initialize logging: {}", e))
}

/// Run a Lox script from a file
fn run_file(path: &Path, all_errors: bool) -> LoxResult<()> {
    info!(path = %path.display(), "running file");
    let source = fs::read_to_string(path)?;
    run(&source, all_errors)
}

/// Start an interactive prompt, scanning one line at a time until EOF
///
/// Scan errors are reported and the prompt carries on.
fn run_prompt(all_errors: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        let line = input.trim_end_matches(['\n', '\r']);
        if let Err(err) = run(line, all_errors) {
            debug!(error = %err, "prompt line rejected");
        }
    }

    println!();
    Ok(())
}

/// Scan one source text and print its tokens
///
/// Diagnostics are written to stderr; the first scan error is returned.
fn run(source: &str, all_errors: bool) -> LoxResult<()> {
    let scanned = if all_errors {
        scan_all(source)
    } else {
        scan(source).map_err(|err| vec![err])
    };

    match scanned {
        Ok(tokens) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for token in &tokens {
                writeln!(out, "{}", token)?;
            }
            Ok(())
        }
        Err(errors) => {
            for err in &errors {
                eprint!("{}", Diagnostic::with_source(err, source));
            }
            match errors.into_iter().next() {
                Some(first) => Err(first.into()),
                None => Ok(()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lox_lang::error::EXIT_DATA;

    #[test]
    fn test_cli_parse_no_script() {
        let cli = Cli::parse_from(["lox"]);
        assert!(cli.scripts.is_empty());
        assert!(!cli.verbose);
        assert!(!cli.all_errors);
    }

    #[test]
    fn test_cli_parse_script() {
        let cli = Cli::parse_from(["lox", "main.lox"]);
        assert_eq!(cli.scripts, vec![PathBuf::from("main.lox")]);
    }

    #[test]
    fn test_cli_parse_flags() {
        let cli = Cli::parse_from(["lox", "--verbose", "--no-color", "--all-errors", "a.lox"]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert!(cli.all_errors);
    }

    #[test]
    fn test_cli_parse_extra_scripts_are_collected() {
        let cli = Cli::parse_from(["lox", "a.lox", "b.lox"]);
        assert_eq!(cli.scripts.len(), 2);
    }

    #[test]
    fn test_run_reports_first_error() {
        let err = run("var x = @;", false).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_DATA);
        assert_eq!(err.to_string(), "[line 1] Error: Unexpected character '@'");
    }

    #[test]
    fn test_run_clean_source() {
        assert!(run("print 1 + 2;", true).is_ok());
    }

    #[test]
    fn test_run_empty_line() {
        assert!(run("", false).is_ok());
    }
}
