//! french-numerals CLI - print numbers as French words

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use french_numerals::{Dialect, FormatError, Formatter};

/// Language variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Lang {
    /// French (default)
    Fr,
    /// Belgian
    Be,
}

impl From<Lang> for Dialect {
    fn from(lang: Lang) -> Self {
        match lang {
            Lang::Fr => Dialect::Standard,
            Lang::Be => Dialect::Belgian,
        }
    }
}

/// Convert numbers to French words
#[derive(Parser, Debug)]
#[command(name = "french-numerals")]
#[command(version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Numbers to convert (0 to 999999)
    #[arg(required = true)]
    numbers: Vec<String>,

    /// Language variant: fr - French (default), be - Belgian
    #[arg(long, value_enum, default_value = "fr")]
    lang: Lang,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), FormatError> {
    let formatter = Formatter::new(cli.lang.into())?;
    debug!(dialect = %formatter.dialect(), count = cli.numbers.len(), "converting");

    for number in &cli.numbers {
        println!("{}", formatter.format_str(number)?);
    }
    Ok(())
}

/// Exit status for a failed run: 2 when the input was at fault, 1 otherwise
fn exit_status(error: &FormatError) -> u8 {
    if error.is_client_error() { 2 } else { 1 }
}

fn error_line(error: &FormatError) -> String {
    format!("error: {error}")
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", error_line(&e));
            ExitCode::from(exit_status(&e))
        }
    }
}
