//! Error types for Bankist
//!
//! Two kinds of failure exist:
//!
//! - [`Rejection`]: a user action whose preconditions did not hold. The
//!   action has no effect and nothing is shown on screen; the reason is kept
//!   so callers and tests can tell what happened.
//! - [`BankError`]: problems with the inputs around the bank itself (seed
//!   files, command scripts, I/O) and store construction failures.

use rust_decimal::Decimal;
use thiserror::Error;

/// Reason a user action was not applied
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    /// The action needs a logged-in account
    #[error("No account is logged in")]
    NoActiveSession,

    /// No account in the store has this username
    #[error("Unknown username '{username}'")]
    UnknownUsername { username: String },

    /// The username exists but the PIN does not match
    #[error("Incorrect PIN for '{username}'")]
    IncorrectPin { username: String },

    /// Transfer and loan amounts must be strictly positive
    #[error("Amount {amount} must be greater than zero")]
    NonPositiveAmount { amount: Decimal },

    /// The sender's balance does not cover the transfer
    #[error("Insufficient balance: balance {balance}, requested {requested}")]
    InsufficientBalance { balance: Decimal, requested: Decimal },

    /// Sender and receiver are the same account
    #[error("Cannot transfer to the logged-in account '{username}'")]
    SelfTransfer { username: String },

    /// No past movement reaches 10% of the requested loan
    #[error("Loan of {requested} needs a past movement of at least {required}")]
    LoanNotCovered { requested: Decimal, required: Decimal },

    /// Closure credentials do not match the logged-in account
    #[error("Credentials do not match the logged-in account")]
    CredentialsMismatch,

    /// Appending the amount would overflow an account's balance or summary
    #[error("Amount {amount} would overflow the figures of '{username}'")]
    ArithmeticOverflow { amount: Decimal, username: String },
}

/// Main error type for Bankist
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading or writing
    #[error("I/O error: {message}")]
    IoError { message: String },

    /// Seed CSV could not be parsed
    ///
    /// Fatal: the account store is never built from a partial file.
    #[error(
        "CSV parse error{}: {message}",
        line.map(|l| format!(" at line {}", l)).unwrap_or_default()
    )]
    ParseError { line: Option<u64>, message: String },

    /// A command script line could not be understood
    ///
    /// Recoverable: the line is skipped.
    #[error("Invalid command at line {line}: {message}")]
    InvalidCommand { line: usize, message: String },

    /// Owner name yields an empty username
    #[error("Owner name '{owner}' does not produce a username")]
    InvalidOwner { owner: String },

    /// Two owners share the same initials
    #[error("Username '{username}' is shared by '{first_owner}' and '{second_owner}'")]
    DuplicateUsername {
        username: String,
        first_owner: String,
        second_owner: String,
    },

    /// Seed movements whose balance or summary does not fit in a `Decimal`
    #[error("Arithmetic overflow in the figures of '{owner}'")]
    ArithmeticOverflow { owner: String },
}

impl From<std::io::Error> for BankError {
    fn from(error: std::io::Error) -> Self {
        BankError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for BankError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        BankError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl BankError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        BankError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a ParseError error
    pub fn parse_error(line: Option<u64>, message: impl Into<String>) -> Self {
        BankError::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an InvalidCommand error
    pub fn invalid_command(line: usize, message: impl Into<String>) -> Self {
        BankError::InvalidCommand {
            line,
            message: message.into(),
        }
    }

    /// Create an InvalidOwner error
    pub fn invalid_owner(owner: &str) -> Self {
        BankError::InvalidOwner {
            owner: owner.to_string(),
        }
    }

    /// Create a DuplicateUsername error
    pub fn duplicate_username(username: &str, first_owner: &str, second_owner: &str) -> Self {
        BankError::DuplicateUsername {
            username: username.to_string(),
            first_owner: first_owner.to_string(),
            second_owner: second_owner.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(owner: &str) -> Self {
        BankError::ArithmeticOverflow {
            owner: owner.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::file_not_found(
        BankError::FileNotFound { path: "accounts.csv".to_string() },
        "File not found: accounts.csv"
    )]
    #[case::io_error(
        BankError::IoError { message: "Broken pipe".to_string() },
        "I/O error: Broken pipe"
    )]
    #[case::parse_error_with_line(
        BankError::ParseError { line: Some(3), message: "Invalid pin".to_string() },
        "CSV parse error at line 3: Invalid pin"
    )]
    #[case::parse_error_without_line(
        BankError::ParseError { line: None, message: "Invalid pin".to_string() },
        "CSV parse error: Invalid pin"
    )]
    #[case::invalid_command(
        BankError::InvalidCommand { line: 7, message: "unknown action 'deposit'".to_string() },
        "Invalid command at line 7: unknown action 'deposit'"
    )]
    #[case::duplicate_username(
        BankError::DuplicateUsername {
            username: "js".to_string(),
            first_owner: "Jonas Schmedtmann".to_string(),
            second_owner: "Jane Smith".to_string(),
        },
        "Username 'js' is shared by 'Jonas Schmedtmann' and 'Jane Smith'"
    )]
    #[case::arithmetic_overflow(
        BankError::ArithmeticOverflow { owner: "Ada Lovelace".to_string() },
        "Arithmetic overflow in the figures of 'Ada Lovelace'"
    )]
    fn test_error_display(#[case] error: BankError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::no_session(Rejection::NoActiveSession, "No account is logged in")]
    #[case::insufficient_balance(
        Rejection::InsufficientBalance {
            balance: Decimal::from(1000),
            requested: Decimal::from(2000),
        },
        "Insufficient balance: balance 1000, requested 2000"
    )]
    #[case::loan_not_covered(
        Rejection::LoanNotCovered {
            requested: Decimal::from(100000),
            required: Decimal::new(100000, 1),
        },
        "Loan of 100000 needs a past movement of at least 10000.0"
    )]
    #[case::arithmetic_overflow(
        Rejection::ArithmeticOverflow { amount: Decimal::from(5), username: "js".to_string() },
        "Amount 5 would overflow the figures of 'js'"
    )]
    fn test_rejection_display(#[case] rejection: Rejection, #[case] expected: &str) {
        assert_eq!(rejection.to_string(), expected);
    }

    #[rstest]
    #[case::invalid_command(
        BankError::invalid_command(2, "missing amount"),
        BankError::InvalidCommand { line: 2, message: "missing amount".to_string() }
    )]
    #[case::duplicate_username(
        BankError::duplicate_username("ss", "Sarah Smith", "Sam Stone"),
        BankError::DuplicateUsername {
            username: "ss".to_string(),
            first_owner: "Sarah Smith".to_string(),
            second_owner: "Sam Stone".to_string(),
        }
    )]
    fn test_helper_functions(#[case] result: BankError, #[case] expected: BankError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "Broken pipe");
        let error: BankError = io_error.into();
        assert!(matches!(error, BankError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Broken pipe");
    }
}
