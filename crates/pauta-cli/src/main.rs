//! pauta — import hearing schedules pasted from PJe.
//!
//! Usage:
//!   pauta parse [FILE]      Print the parse outcome as JSON
//!   pauta summary [FILE]    Print the import review summary
//!
//! FILE defaults to stdin. Exit status is 0 when at least one hearing was
//! recognised, 2 when none was, 1 on errors.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use pauta_core::JurisdictionChoice;
use pauta_parse::{HearingParser, ImportSummary, ParseOutcome};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod input;

#[derive(Parser)]
#[command(name = "pauta", version, about = "Import hearing schedules pasted from PJe")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse an export and print the outcome as JSON
    Parse(ParseArgs),
    /// Parse an export and print the import review summary
    Summary(ParseArgs),
}

#[derive(Args)]
struct ParseArgs {
    /// Pasted schedule export (stdin when omitted)
    file: Option<PathBuf>,

    /// `auto`, or one of: jury, domestic-violence, penal-enforcement, criminal, guardianship
    #[arg(short, long, default_value = "auto")]
    jurisdiction: JurisdictionChoice,

    /// JSON file with already-registered hearings, or a previous `pauta parse` output
    #[arg(short, long)]
    existing: Option<PathBuf>,

    /// Parser configuration (JSON)
    #[arg(short, long, env = "PAUTA_CONFIG")]
    config: Option<PathBuf>,
}

const EXIT_FOUND: u8 = 0;
const EXIT_ERROR: u8 = 1;
const EXIT_NONE_FOUND: u8 = 2;

fn run_parse(args: &ParseArgs) -> anyhow::Result<ParseOutcome> {
    let config = input::load_config(args.config.as_deref())?;
    let raw = input::read_export(args.file.as_deref())?;
    let existing = input::load_existing(args.existing.as_deref())?;
    info!(
        "Parsing {} chars ({} existing records, jurisdiction {})",
        raw.chars().count(),
        existing.len(),
        args.jurisdiction
    );

    let parser = HearingParser::new(config);
    Ok(parser.parse(&raw, args.jurisdiction, &existing))
}

fn run(cli: Cli) -> anyhow::Result<ParseOutcome> {
    match cli.command {
        Command::Parse(args) => {
            let outcome = run_parse(&args)?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            Ok(outcome)
        }
        Command::Summary(args) => {
            let outcome = run_parse(&args)?;
            println!("{}", ImportSummary::from_outcome(&outcome));
            Ok(outcome)
        }
    }
}

fn exit_code(outcome: &ParseOutcome) -> u8 {
    if outcome.failed() {
        EXIT_ERROR
    } else if outcome.total_found() == 0 {
        EXIT_NONE_FOUND
    } else {
        EXIT_FOUND
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_ERROR)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(outcome) => {
            for diagnostic in &outcome.diagnostics {
                warn!("{}", diagnostic);
            }
            ExitCode::from(exit_code(&outcome))
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
