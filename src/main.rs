//! Address Bloc - command line entry point
//!
//! Imports one or more CSV files into an address book, then prints the
//! entries or looks up names. Logs go to stderr; results go to stdout.

use address_bloc::{AddressBook, BinarySearch, Config, LinearSearch, SearchStrategy};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Linear,
    Binary,
}

impl StrategyArg {
    fn strategy(self) -> &'static dyn SearchStrategy {
        match self {
            StrategyArg::Linear => &LinearSearch,
            StrategyArg::Binary => &BinarySearch,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "address-bloc", version, about = "Look up contacts imported from CSV files")]
struct Cli {
    /// CSV file to import (repeatable, imported in order)
    #[arg(short, long = "import", value_name = "FILE")]
    imports: Vec<PathBuf>,

    /// Search strategy for name lookups
    #[arg(long, value_enum, default_value_t = StrategyArg::Binary)]
    strategy: StrategyArg,

    /// Print every entry after importing
    #[arg(long)]
    list: bool,

    /// Names to look up
    names: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env()?;

    // RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let options = config.import_options();
    let mut book = AddressBook::new();

    for path in &cli.imports {
        match book.import_from_csv_with(path, &options) {
            Ok(count) => info!("Imported {} entries from {}", count, path.display()),
            Err(e) => {
                error!("Failed to import {}: {}", path.display(), e);
                return Err(e).with_context(|| format!("importing {}", path.display()));
            }
        }
    }

    if cli.list {
        for entry in &book {
            println!("{}", serde_json::to_string(entry)?);
        }
    }

    let strategy = cli.strategy.strategy();
    for name in &cli.names {
        match book.search_with(strategy, name) {
            Some(entry) => println!("{}", serde_json::to_string_pretty(entry)?),
            None => println!("{}: not found", name),
        }
    }

    Ok(())
}
