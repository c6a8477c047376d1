use clap::{Parser, Subcommand};

use crate::commands::{health, import};

#[derive(Debug, Parser)]
#[command(name = "kensho-seed")]
#[command(about = "Seed the Kensho anime backend from anime-offline-database", long_about = None)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Seed the first entries, reporting every entry (offset 0, limit 10, 5 episodes)
    Seed(import::Args),

    /// Bulk import with periodic progress (offset 10, limit 100, 3 episodes)
    Import(import::Args),

    /// Check whether the backend is reachable and healthy
    Health(health::Args),
}
