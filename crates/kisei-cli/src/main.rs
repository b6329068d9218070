//! # kisei CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros; verbosity maps onto the tracing filter.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use kisei_cli::capacity::{run_capacity, CapacityArgs};
use kisei_cli::check::{run_check, CheckArgs};
use kisei_cli::districts::{run_districts, DistrictsArgs};
use kisei_cli::locate::{run_locate, LocateArgs};

/// Hōfu building restriction simulator.
///
/// Checks a building plan against the coverage (建ぺい率) and floor-area
/// (容積率) limits of a Hōfu City use district, computes buildable
/// capacity, and geocodes addresses for map display.
#[derive(Parser, Debug)]
#[command(name = "kisei", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the twelve use districts and their ratio limits.
    Districts(DistrictsArgs),

    /// Check a building plan against a district's limits.
    Check(CheckArgs),

    /// Compute the maximum buildable areas for a lot.
    Capacity(CapacityArgs),

    /// Geocode an address for map display (falls back to Hōfu City Hall).
    Locate(LocateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Districts(args) => run_districts(&args),
        Commands::Check(args) => run_check(&args),
        Commands::Capacity(args) => run_capacity(&args),
        Commands::Locate(args) => run_locate(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
