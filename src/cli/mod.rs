// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::CliArgs;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// This function parses the command-line arguments and returns a `CliArgs`
/// struct. If parsing fails (an unknown flag, a missing option value) or
/// `--help` is given, clap prints an error or the help text and exits the
/// process.
///
/// # Returns
///
/// Returns a `CliArgs` struct with the parsed command-line arguments. Use
/// [`CliArgs::to_bank_config`] to turn it into a `BankConfig`.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
