//! numwords - rewrites every run of digits in a text file as uppercase
//! English words.
//!
//! File names come from the command line when given, otherwise the
//! program asks for them interactively like the classic filter it
//! descends from.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use numwords::input::{validate_file_name, FileRole};
use numwords::pipeline::{run, RunError};
use numwords::prompt::{parse_file_name, prompt_file_name};
use numwords::scan::{ScanConfig, ScanError, MAX_NUMBER_DIGITS};

/// Exit code for failures to name or open either file.
const EXIT_SETUP: u8 = 1;
/// Exit code for the fatal numeral-too-long abort.
const EXIT_NUMERAL_TOO_LONG: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "numwords")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Replace digit runs in a text file with English words")]
struct Cli {
    /// File to read; prompted for when omitted
    source: Option<PathBuf>,

    /// File to write; prompted for when omitted
    destination: Option<PathBuf>,

    /// Longest digit run that can be converted
    #[arg(long, default_value_t = MAX_NUMBER_DIGITS, value_parser = parse_max_digits)]
    max_digits: usize,

    /// Enable verbose output
    #[arg(short, long, env = "NUMWORDS_VERBOSE")]
    verbose: bool,
}

/// Twelve digits is the largest run the scale-word table can name.
fn parse_max_digits(value: &str) -> Result<usize, String> {
    let digits: usize = value.parse().map_err(|_| "not a number".to_string())?;
    if digits == 0 || digits > MAX_NUMBER_DIGITS {
        return Err(format!("must be between 1 and {}", MAX_NUMBER_DIGITS));
    }
    Ok(digits)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("numwords");

    let source = match resolve_file_name(cli.source, FileRole::Source) {
        Ok(path) => path,
        Err(message) => return fail(&message, EXIT_SETUP),
    };
    let destination = match resolve_file_name(cli.destination, FileRole::Destination) {
        Ok(path) => path,
        Err(message) => return fail(&message, EXIT_SETUP),
    };

    let config = ScanConfig {
        max_digits: cli.max_digits,
    };

    match run(&source, &destination, config) {
        Ok(summary) => {
            println!(
                "Converted {} number(s) into {}",
                summary.scan.numerals,
                destination.display()
            );
            ExitCode::SUCCESS
        }
        Err(RunError::Scan(err @ ScanError::NumeralTooLong { .. })) => {
            fail(&format!("Fatal error: {}", err), EXIT_NUMERAL_TOO_LONG)
        }
        Err(err) => fail(&err.to_string(), EXIT_SETUP),
    }
}

/// Take the file name from the command line, or ask for it.
fn resolve_file_name(arg: Option<PathBuf>, role: FileRole) -> Result<PathBuf, String> {
    if let Some(path) = arg {
        let name = path.to_string_lossy();
        return validate_file_name(&name, role)
            .map(PathBuf::from)
            .map_err(|e| e.to_string());
    }

    let line = prompt_file_name(role)
        .map_err(|e| format!("failed to read {} file name: {}", role, e))?;
    parse_file_name(&line, role)
        .map(PathBuf::from)
        .map_err(|e| e.to_string())
}

fn fail(message: &str, code: u8) -> ExitCode {
    eprintln!("Error: {}", message);
    ExitCode::from(code)
}
