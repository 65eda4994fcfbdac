//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account records and username derivation
//! - `command`: User actions and their outcomes
//! - `error`: Error and rejection types

pub mod account;
pub mod command;
pub mod error;

pub use account::{derive_username, Account, Amount, Pin};
pub use command::{Command, Outcome};
pub use error::{BankError, Rejection};
