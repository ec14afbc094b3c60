//! claimcheck
//!
//! Reviews promotional claims against the regulatory rule table and prints
//! JSON to stdout. Logs go to stderr.
//!
//! - `check` evaluates a single claim
//! - `batch` evaluates a JSON array of claims and adds a project summary
//! - `rules` lists the rule table

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use compliance_engine::{evaluate_claim, rules, ComplianceEngine, RuleInfo};
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod error;
mod input;

use error::CliError;

/// Command-line arguments for claimcheck
#[derive(Parser, Debug)]
#[command(name = "claimcheck")]
#[command(about = "Regulatory compliance review for promotional claims")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a single claim
    Check {
        /// Claim text
        text: String,

        /// Identifier echoed in the result
        #[arg(long, default_value = "claim")]
        id: String,
    },
    /// Evaluate a JSON array of {"id", "text"} claims ("-" reads stdin)
    Batch { file: PathBuf },
    /// List the rule table
    Rules,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    run(args)?;
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Check { text, id } => {
            let result = evaluate_claim(&text, &id);
            info!(
                "Claim {}: {} ({} issues, score {})",
                result.claim_id,
                result.risk_level.as_str(),
                result.issues.len(),
                result.compliance_score
            );
            print_json(&result, args.pretty)
        }
        Command::Batch { file } => {
            let claims = input::load_claims(&file)?;
            let report = ComplianceEngine::new().evaluate_claims(&claims);
            print_json(&report, args.pretty)
        }
        Command::Rules => {
            let table: Vec<RuleInfo> = rules().iter().map(|r| r.describe()).collect();
            print_json(&table, args.pretty)
        }
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), CliError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", rendered).map_err(CliError::Output)
}
