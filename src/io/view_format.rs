//! Text rendition of the screen
//!
//! A visible screen is written as:
//!
//! ```text
//! Welcome back, Jonas
//! Balance: 3840
//! 8 deposit 1300
//! 7 deposit 70
//! ...
//! In: 5020
//! Out: 1180
//! Interest: 59.4
//! ```
//!
//! A hidden screen is only its welcome line. Numbers are printed as
//! normalized decimals with no rounding.

use crate::core::Screen;
use crate::types::{BankError, Command};
use rust_decimal::Decimal;
use std::io::Write;

/// Write the current screen
pub fn write_screen(screen: &Screen, output: &mut dyn Write) -> Result<(), BankError> {
    writeln!(output, "{}", screen.welcome())?;

    let view = match screen.view() {
        Some(view) if screen.is_visible() => view,
        _ => return Ok(()),
    };

    writeln!(output, "Balance: {}", number(view.balance))?;
    for row in &view.movements {
        writeln!(
            output,
            "{} {} {}",
            row.position,
            row.kind,
            number(row.amount)
        )?;
    }
    writeln!(output, "In: {}", number(view.summary.total_in))?;
    writeln!(output, "Out: {}", number(view.summary.total_out))?;
    writeln!(output, "Interest: {}", number(view.summary.interest))?;

    Ok(())
}

/// Write the screen shown after `command` was applied, under a header line
pub fn write_frame(
    command: &Command,
    screen: &Screen,
    output: &mut dyn Write,
) -> Result<(), BankError> {
    writeln!(output, "--- {} ---", command)?;
    write_screen(screen, output)
}

fn number(value: Decimal) -> Decimal {
    value.normalize()
}
