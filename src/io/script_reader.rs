//! Command script reader with iterator interface
//!
//! Provides a streaming iterator over the commands of a script, read from
//! any `BufRead` (a file or stdin). Parsing is delegated to the
//! command_format module.
//!
//! ```no_run
//! use bankist::io::ScriptReader;
//! use std::path::Path;
//!
//! let reader = ScriptReader::open(Path::new("actions.txt")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(command) => println!("Running: {}", command),
//!         Err(e) => eprintln!("Skipped: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Blank lines and `#` comments are skipped silently
//! - A line that fails to parse, including one that is not valid UTF-8, is
//!   yielded as `Err(BankError::InvalidCommand)` carrying its 1-based line
//!   number; iteration continues with the next line
//! - A read failure is yielded as `Err(BankError::IoError)` and ends iteration

use crate::io::command_format::{is_blank_or_comment, parse_command};
use crate::types::{BankError, Command};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Streaming reader over script commands
///
/// Reads one line at a time, so a script piped from stdin is processed as
/// it arrives.
///
/// # Examples
///
/// ```
/// use bankist::io::ScriptReader;
/// use bankist::Command;
///
/// let script = "# demo\nlogin js 1111\nsort\n";
/// let commands: Vec<_> = ScriptReader::new(script.as_bytes())
///     .filter_map(Result::ok)
///     .collect();
/// assert_eq!(commands.last(), Some(&Command::Sort));
/// ```
#[derive(Debug)]
pub struct ScriptReader<R> {
    reader: R,
    line_num: usize,
    failed: bool,
}

impl<R: BufRead> ScriptReader<R> {
    /// Create a ScriptReader over any buffered reader, such as stdin
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_num: 0,
            failed: false,
        }
    }
}

impl ScriptReader<BufReader<File>> {
    /// Open a script file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the command script
    ///
    /// # Returns
    ///
    /// * `Ok(ScriptReader)` - Reader positioned at the first line
    /// * `Err(BankError)` - `FileNotFound` if the path does not exist,
    ///   `IoError` for any other failure to open it
    pub fn open(path: &Path) -> Result<Self, BankError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                BankError::file_not_found(&path.display().to_string())
            }
            _ => BankError::from(e),
        })?;

        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> Iterator for ScriptReader<R> {
    type Item = Result<Command, BankError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let mut buf = Vec::new();
        loop {
            buf.clear();
            match self.reader.read_until(b'\n', &mut buf) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_num += 1;
                    let line = match std::str::from_utf8(&buf) {
                        Ok(line) => line,
                        Err(_) => {
                            return Some(Err(BankError::invalid_command(
                                self.line_num,
                                "line is not valid UTF-8",
                            )))
                        }
                    };
                    if is_blank_or_comment(line) {
                        continue;
                    }
                    return Some(
                        parse_command(line)
                            .map_err(|e| BankError::invalid_command(self.line_num, e)),
                    );
                }
                Err(e) => {
                    self.failed = true;
                    return Some(Err(BankError::from(e)));
                }
            }
        }
    }
}
