//! User actions and their outcomes

use super::account::{Amount, Pin};
use super::error::Rejection;
use std::fmt;

/// A user-initiated action
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Login { username: String, pin: Pin },
    Transfer { to: String, amount: Amount },
    Loan { amount: Amount },
    Close { username: String, pin: Pin },
    Sort,
}

/// PINs are left out so frames and logs never echo credentials.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Login { username, .. } => write!(f, "login {}", username),
            Command::Transfer { to, amount } => {
                write!(f, "transfer {} {}", to, amount.normalize())
            }
            Command::Loan { amount } => write!(f, "loan {}", amount.normalize()),
            Command::Close { username, .. } => write!(f, "close {}", username),
            Command::Sort => write!(f, "sort"),
        }
    }
}

/// Result of a user action
///
/// A rejected action leaves the store, session and screen untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Applied,
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }

    /// The rejection reason, if any
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Outcome::Applied => None,
            Outcome::Rejected(rejection) => Some(rejection),
        }
    }
}

impl From<Result<(), Rejection>> for Outcome {
    fn from(result: Result<(), Rejection>) -> Self {
        match result {
            Ok(()) => Outcome::Applied,
            Err(rejection) => Outcome::Rejected(rejection),
        }
    }
}
