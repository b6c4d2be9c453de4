//! Cookbook — recipe registry server and offline tools.
//!
//! # Usage
//!
//! ```text
//! cookbook serve [--host <ip>] [--port <port>] [--seed <file>] [--log-json]
//! cookbook parse <text>
//! cookbook summary <name> --entries <file> [--json]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{parse::ParseArgs, serve::ServeArgs, summary::SummaryArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "cookbook",
    version,
    about = "Register ingredients and recipes, and summarize what a recipe needs",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server (/parse, /entry, /summary, /health).
    Serve(ServeArgs),

    /// Normalize a handwritten entry name.
    Parse(ParseArgs),

    /// Summarize a recipe from a YAML seed file without starting a server.
    Summary(SummaryArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Serve(args) => args.run(),
        Commands::Parse(args) => args.run(),
        Commands::Summary(args) => args.run(),
    }
}
