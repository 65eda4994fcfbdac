//! Script runner
//!
//! Drives a [`Bank`] from a command script, one command at a time, and writes
//! a screen frame after every applied command.
//!
//! # Error Handling
//!
//! Rejected actions and unparsable lines are logged and skipped; they never
//! reach the output. Only I/O failures stop the run.

use crate::core::Bank;
use crate::io::view_format::write_frame;
use crate::io::ScriptReader;
use crate::types::{BankError, Outcome};
use log::{info, warn};
use std::io::{BufRead, Write};

/// Counts of what happened during a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Commands that changed the bank and produced a frame
    pub applied: usize,
    /// Commands whose preconditions failed
    pub rejected: usize,
    /// Script lines that could not be parsed
    pub invalid: usize,
}

/// Run every command of `script` against `bank`
///
/// Commands are applied in script order. Each applied command writes one
/// frame (the command line, PIN omitted, followed by the screen) to
/// `output`; rejected commands and invalid lines write nothing.
///
/// # Arguments
///
/// * `bank` - The bank the commands act on
/// * `script` - Source of commands, from a file or stdin
/// * `output` - Destination for the frames
///
/// # Returns
///
/// * `Ok(RunSummary)` - Counts of applied, rejected and invalid lines
/// * `Err(BankError)` - The script could not be read or a frame could not
///   be written
///
/// # Examples
///
/// ```
/// use bankist::io::ScriptReader;
/// use bankist::{run_script, Bank};
///
/// let mut bank = Bank::demo();
/// let mut output = Vec::new();
/// let script = ScriptReader::new("login js 1111\nloan 0\n".as_bytes());
///
/// let summary = run_script(&mut bank, script, &mut output).unwrap();
/// assert_eq!(summary.applied, 1);
/// assert_eq!(summary.rejected, 1);
/// ```
pub fn run_script<R: BufRead>(
    bank: &mut Bank,
    script: ScriptReader<R>,
    output: &mut dyn Write,
) -> Result<RunSummary, BankError> {
    let mut summary = RunSummary::default();

    for result in script {
        let command = match result {
            Ok(command) => command,
            Err(e @ BankError::InvalidCommand { .. }) => {
                warn!("Skipping script line: {}", e);
                summary.invalid += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        match bank.apply(&command) {
            Outcome::Applied => {
                summary.applied += 1;
                write_frame(&command, bank.screen(), output)?;
            }
            Outcome::Rejected(_) => summary.rejected += 1,
        }
    }

    output.flush()?;
    info!(
        "Script finished: {} applied, {} rejected, {} invalid",
        summary.applied, summary.rejected, summary.invalid
    );

    Ok(summary)
}
