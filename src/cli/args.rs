//! CLI argument definitions using clap
//!
//! Commands:
//! - prodledger init --ledger <path>
//! - prodledger invoke --ledger <path> [--config <path>] <function> [args...]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// prodledger - ledger-resident product event records
#[derive(Parser, Debug)]
#[command(name = "prodledger")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an empty ledger file
    Init {
        /// Path to the ledger file
        #[arg(long, default_value = "./ledger.json")]
        ledger: PathBuf,
    },

    /// Invoke a contract function and print the response
    Invoke {
        /// Path to the ledger file
        #[arg(long, default_value = "./ledger.json")]
        ledger: PathBuf,

        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Function name, e.g. createProduct
        function: String,

        /// Function arguments
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
