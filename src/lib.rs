//! Bankist Library
//! # Overview
//!
//! This library implements the Bankist demo bank: a handful of in-memory
//! accounts, a ledger summary per account, and five user actions that mutate
//! the accounts and re-render the logged-in one.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Account, Command, errors)
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Balance, totals and qualifying interest
//!   - [`core::account_store`] - Ordered in-memory accounts
//!   - [`core::render`] - Account projection and the screen
//!   - [`core::bank`] - Session state and action handlers
//! - [`io`] - Seed CSV, command scripts and screen text
//! - [`runner`] - Drives a bank from a command script
//! - [`cli`] - CLI arguments parsing
//!
//! # Actions
//!
//! - **Login**: start a session with a username and PIN
//! - **Transfer**: move money from the logged-in account to another one
//! - **Loan**: credit the logged-in account if a past movement covers 10%
//! - **Close**: remove the logged-in account and end the session
//! - **Sort**: toggle ascending order of the displayed movements
//!
//! Every action returns an [`Outcome`]. A rejected action changes nothing.

pub mod cli;
pub mod core;
pub mod io;
pub mod runner;
pub mod types;

pub use self::core::{AccountStore, Bank, BankConfig, Classification, Screen};
pub use runner::{run_script, RunSummary};
pub use types::{Account, BankError, Command, Outcome, Rejection};
