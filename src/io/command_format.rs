//! Text format for command script lines
//!
//! One command per line, fields separated by whitespace, keyword matched
//! case-insensitively:
//!
//! ```text
//! login <username> <pin>
//! transfer <username> <amount>
//! loan <amount>
//! close <username> <pin>
//! sort
//! ```
//!
//! All functions are pure (no I/O).

use crate::types::{Amount, Command, Pin};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Whether a line carries no command (blank or `#` comment)
pub fn is_blank_or_comment(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

/// Parse one script line into a Command
///
/// # Returns
///
/// * `Ok(Command)` - Successfully parsed command
/// * `Err(String)` - Description of what is wrong with the line
pub fn parse_command(line: &str) -> Result<Command, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let (keyword, args) = fields
        .split_first()
        .ok_or_else(|| "empty command".to_string())?;

    let command = match keyword.to_lowercase().as_str() {
        "login" => {
            let [username, pin] = expect_args::<2>("login", args)?;
            Command::Login {
                username: username.to_string(),
                pin: parse_pin(pin)?,
            }
        }
        "transfer" => {
            let [to, amount] = expect_args::<2>("transfer", args)?;
            Command::Transfer {
                to: to.to_string(),
                amount: parse_amount(amount)?,
            }
        }
        "loan" => {
            let [amount] = expect_args::<1>("loan", args)?;
            Command::Loan {
                amount: parse_amount(amount)?,
            }
        }
        "close" => {
            let [username, pin] = expect_args::<2>("close", args)?;
            Command::Close {
                username: username.to_string(),
                pin: parse_pin(pin)?,
            }
        }
        "sort" => {
            expect_args::<0>("sort", args)?;
            Command::Sort
        }
        _ => return Err(format!("unknown action '{}'", keyword)),
    };

    Ok(command)
}

fn expect_args<'a, const N: usize>(
    keyword: &str,
    args: &[&'a str],
) -> Result<[&'a str; N], String> {
    <[&str; N]>::try_from(args).map_err(|_| {
        format!(
            "'{}' takes {} argument(s), got {}",
            keyword,
            N,
            args.len()
        )
    })
}

fn parse_pin(text: &str) -> Result<Pin, String> {
    text.parse::<Pin>()
        .map_err(|_| format!("invalid PIN '{}'", text))
}

fn parse_amount(text: &str) -> Result<Amount, String> {
    Decimal::from_str(text).map_err(|_| format!("invalid amount '{}'", text))
}
