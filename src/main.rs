//! Bankist CLI
//!
//! Runs the demo bank from a command script and prints the screen after
//! every applied action.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --script actions.txt
//! cargo run -- --accounts seed.csv --script actions.txt
//! echo "login js 1111" | cargo run
//! RUST_LOG=info cargo run -- --script actions.txt
//! ```
//!
//! Rejected actions are silent on stdout; set `RUST_LOG=info` to see them
//! on stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, bad seed file, duplicate usernames, I/O error)

use bankist::cli::{self, CliArgs};
use bankist::io::{load_accounts_csv, ScriptReader};
use bankist::{run_script, AccountStore, Bank, BankError};
use std::io;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = cli::parse_args();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), BankError> {
    let store = match &args.accounts {
        Some(path) => load_accounts_csv(path)?,
        None => AccountStore::demo(),
    };
    let mut bank = Bank::new(store, args.to_bank_config());

    let mut output = io::stdout().lock();
    match &args.script {
        Some(path) => run_script(&mut bank, ScriptReader::open(path)?, &mut output)?,
        None => run_script(&mut bank, ScriptReader::new(io::stdin().lock()), &mut output)?,
    };

    Ok(())
}
