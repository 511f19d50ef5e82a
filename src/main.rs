use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "rcy",
    version,
    about = "Longest routing-cycle analysis for claim routing records"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the claim/status group with the longest routing cycle
    Analyze {
        /// Input file, or `-` for standard input
        input: String,
        /// Treat input as pre-sorted by (claim_id, status_code) and
        /// stream it one group at a time
        #[arg(long)]
        sorted: bool,
        /// Skip the sort-order validation pre-pass in sorted mode
        #[arg(long)]
        no_validate: bool,
        /// Emit JSON instead of the claim_id,status_code,length line
        #[arg(long)]
        json: bool,
    },
    /// Check that input is sorted by (claim_id, status_code)
    Check {
        /// Input file, or `-` for standard input
        input: String,
        /// Emit JSON instead of a human-readable verdict
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            sorted,
            no_validate,
            json,
        } => commands::analyze::run(&input, sorted, !no_validate, json),
        Commands::Check { input, json } => commands::check::run(&input, json),
    }
}
