use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use stk_core::{CommandSummary, Outcome, Report, make_report, summarize_command};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("STK_BUILD_COMMIT"),
    ", ",
    env!("STK_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "stk")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Decoder for SIM Application Toolkit proactive commands (ETSI TS 102.223).",
    long_about = None,
    after_help = "Examples:\n  stk decode D0058103012180\n  stk decode '0xD0 09 81 03 01 21 80 82 02 81 02' --pretty\n  stk decode D0058103012180 D0058103012500 --strict"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode one or more hex-encoded commands and print a JSON report.
    Decode {
        /// Command bytes as hex, one command per argument
        #[arg(required = true, value_name = "HEX")]
        inputs: Vec<String>,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Suppress the summary line on stderr
        #[arg(long)]
        quiet: bool,

        /// Exit with a non-zero code if any command is rejected or has an invalid length
        #[arg(long)]
        strict: bool,

        /// Log decoder diagnostics to stderr
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Decode {
            inputs,
            pretty,
            compact,
            quiet,
            strict,
            verbose,
        } => {
            init_logging(verbose);
            debug!(pretty, compact, "output format");
            cmd_decode(&inputs, pretty, quiet, strict)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{err:#}"), None)
    }
}

/// Logs go to stderr so stdout stays valid JSON.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .try_init();
}

fn cmd_decode(inputs: &[String], pretty: bool, quiet: bool, strict: bool) -> Result<(), CliError> {
    let buffers = inputs
        .iter()
        .map(|input| parse_hex(input))
        .collect::<Result<Vec<_>, _>>()?;

    let commands: Vec<CommandSummary> = buffers
        .iter()
        .map(|buffer| summarize_command(buffer))
        .collect();
    let mut rep = make_report(commands);
    rep.generated_at = now_rfc3339()?;

    let json = serialize_report(&rep, pretty)?;
    println!("{}", json);

    let failed = count_failed(&rep);
    if !quiet {
        eprintln!(
            "OK: decoded {} command(s), {} rejected or length-invalid",
            rep.commands.len(),
            failed
        );
    }
    if strict && failed > 0 {
        return Err(CliError::new(
            format!("{failed} command(s) rejected or length-invalid"),
            Some("inspect the \"result\" and \"length_valid\" fields of the report".to_string()),
        ));
    }
    Ok(())
}

/// Accepts `D0 03 81`, `d00381` and `0xD00381`.
fn parse_hex(input: &str) -> Result<Vec<u8>, CliError> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = compact
        .strip_prefix("0x")
        .or_else(|| compact.strip_prefix("0X"))
        .unwrap_or(&compact);

    if digits.is_empty() {
        return Err(CliError::new(
            format!("empty hex input '{input}'"),
            Some("pass at least one byte, e.g. D0 03 81 01 00".to_string()),
        ));
    }

    let bytes = hex::decode(digits).map_err(|err| {
        CliError::new(
            format!("invalid hex input '{input}': {err}"),
            Some("use an even number of hex digits, e.g. D0 03 81 01 00".to_string()),
        )
    })?;
    debug!(len = bytes.len(), "parsed hex input");
    Ok(bytes)
}

fn now_rfc3339() -> Result<String, CliError> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .context("failed to format report timestamp")
        .map_err(Into::into)
}

fn serialize_report(rep: &Report, pretty: bool) -> Result<String, CliError> {
    if pretty {
        serde_json::to_string_pretty(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn count_failed(rep: &Report) -> usize {
    rep.commands
        .iter()
        .filter(|command| command.outcome != Outcome::Decoded)
        .count()
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use clap::error::ErrorKind;

    use super::{Cli, parse_hex};

    #[test]
    fn pretty_and_compact_rejected_by_parser() {
        let err = Cli::try_parse_from(["stk", "decode", "D0038101", "--pretty", "--compact"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
        assert!(Cli::try_parse_from(["stk", "decode", "D0038101", "--compact"]).is_ok());
    }

    #[test]
    fn parse_hex_accepts_spacing_and_prefix() {
        let expected = vec![0xD0, 0x03, 0x81, 0x01, 0x00];
        assert_eq!(parse_hex("D0038101 00").unwrap(), expected);
        assert_eq!(parse_hex("0xd0 03 81 01 00").unwrap(), expected);
        assert_eq!(parse_hex(" 0XD003810100\n").unwrap(), expected);
    }

    #[test]
    fn parse_hex_rejects_bad_input() {
        for input in ["", "0x", "D0F", "ZZ"] {
            let err = parse_hex(input).unwrap_err();
            assert!(err.hint.is_some(), "{input}");
        }
    }
}
