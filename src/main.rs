use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result, miette};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use txforms::application::form::TransactionForm;
use txforms::config::Minimums;
use txforms::interfaces::csv::outcome_writer::{Outcome, OutcomeWriter};
use txforms::interfaces::csv::request_reader::RequestReader;
use txforms::validation::date_range;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file with minimum_deposit_amount, minimum_withdrawal_amount and
    /// minimum_transfer_amount. Defaults apply when omitted.
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a CSV of transaction requests (kind,balance,ceiling,amount)
    Check {
        /// Input requests CSV file
        input: PathBuf,
    },
    /// Parse a "YYYY-MM-DD - YYYY-MM-DD" date range
    Daterange {
        /// Raw date-range text; empty means no filter
        #[arg(default_value = "")]
        text: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let minimums = match cli.settings {
        Some(path) => Minimums::from_path(path).into_diagnostic()?,
        None => Minimums::default(),
    };

    match cli.command {
        Command::Check { input } => check(input, &minimums),
        Command::Daterange { text } => daterange(&text),
    }
}

fn check(input: PathBuf, minimums: &Minimums) -> Result<()> {
    let file = File::open(input).into_diagnostic()?;
    let requests = RequestReader::new(file).requests().into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer = OutcomeWriter::new(stdout.lock());

    let (mut accepted, mut rejected) = (0usize, 0usize);
    for (index, request) in requests.enumerate() {
        let row = index as u64 + 1;
        let request = match request {
            Ok(request) => request,
            Err(e) => {
                warn!(row, error = %e, "Error reading transaction request");
                continue;
            }
        };

        let account = request.account();
        let form = TransactionForm::new(request.kind, &account, minimums);
        let outcome = match form.clean_amount(Some(request.amount.as_str())) {
            Ok(amount) => {
                accepted += 1;
                Outcome::accepted(row, request.kind, amount)
            }
            Err(reason) => {
                rejected += 1;
                Outcome::rejected(row, request.kind, &request.amount, &reason)
            }
        };
        writer.write_outcome(&outcome).into_diagnostic()?;
    }
    writer.flush().into_diagnostic()?;

    info!(accepted, rejected, "batch checked");
    Ok(())
}

fn daterange(text: &str) -> Result<()> {
    match date_range::parse(Some(text)) {
        Ok(Some(range)) => println!("{},{}", range.start, range.end),
        Ok(None) => println!("no date range"),
        Err(reason) => return Err(miette!("{reason}")),
    }
    Ok(())
}
