use crate::core::{BankConfig, Classification};
use clap::Parser;
use std::path::PathBuf;

/// Run the Bankist demo bank from a command script
#[derive(Parser, Debug)]
#[command(name = "bankist")]
#[command(about = "Run the Bankist demo bank from a command script", long_about = None)]
pub struct CliArgs {
    /// Seed accounts CSV (owner,pin,interest_rate,movements)
    #[arg(
        long = "accounts",
        value_name = "CSV",
        help = "Seed accounts CSV file (default: built-in demo accounts)"
    )]
    pub accounts: Option<PathBuf>,

    /// Command script to run
    #[arg(
        long = "script",
        value_name = "FILE",
        help = "Command script file (default: read commands from stdin)"
    )]
    pub script: Option<PathBuf>,

    /// Label only movements above 1 as deposits
    #[arg(
        long = "legacy-classification",
        help = "Label movements as deposits only when above 1, as the Bankist web page did"
    )]
    pub legacy_classification: bool,
}

impl CliArgs {
    /// Create a BankConfig from CLI arguments
    pub fn to_bank_config(&self) -> BankConfig {
        let classification = if self.legacy_classification {
            Classification::Legacy
        } else {
            Classification::Positive
        };

        BankConfig { classification }
    }
}
