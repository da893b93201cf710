use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    count::{self, CountArgs},
    enumerate::{self, EnumerateArgs},
    relation::{self, RelationArgs},
    version::{self, VersionArgs},
};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

#[derive(Parser, Debug)]
#[command(name = "ipart", about = "Integer partition enumerator and relation matrix CLI")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every partition of n and those with exactly k addends.
    Enumerate(EnumerateArgs),
    /// Print p(n) without enumerating.
    Count(CountArgs),
    /// Build the matrix of a relation p and of its inverse.
    Relation(RelationArgs),
    /// Print version information.
    Version(VersionArgs),
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

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Command::Enumerate(args) => enumerate::run(&args),
        Command::Count(args) => count::run(&args),
        Command::Relation(args) => relation::run(&args),
        Command::Version(args) => version::run(&args),
    }
}
