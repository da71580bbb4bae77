use clap::Parser;
use color_eyre::eyre::Result;
use rust_decimal::Decimal;
use std::path::PathBuf;
use time::{format_description::BorrowedFormatItem, macros::format_description};
use tracing_subscriber::EnvFilter;

use crate::options::Options;

#[derive(Parser)]
#[command(version, about = "Reconcile item stock movements into a daily ledger", long_about = None)]
struct Cli {
    /// Movement table, replacing the default MovtoITEM.csv
    #[clap(long)]
    movements: Option<PathBuf>,

    /// Balance snapshot table, replacing the default SaldoITEM.csv
    #[clap(long)]
    balances: Option<PathBuf>,

    /// Ledger table to write, replacing the default BalncITEM.csv
    #[clap(long)]
    ledger: Option<PathBuf>,

    /// How far a closing balance may drift before it counts as wrong
    #[clap(long)]
    tolerance: Option<Decimal>,
}

fn main() -> Result<()> {
    let out_w = &std::io::stdout();
    let error_w = &std::io::stderr();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).unwrap();

    let cli = Cli::parse();

    let mut options = Options::default();
    if let Some(movements) = cli.movements {
        options.movements = movements;
    }
    if let Some(balances) = cli.balances {
        options.balances = balances;
    }
    if let Some(ledger) = cli.ledger {
        options.ledger = ledger;
    }
    if let Some(tolerance) = cli.tolerance {
        options.balance_tolerance = tolerance;
    }

    ledger::write_ledger_from(&options, out_w, error_w)
}

/// Date format shared by the input and output tables.
pub(crate) const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

pub(crate) mod format;
pub(crate) mod ingest;
pub(crate) mod ledger;
pub(crate) mod options;
