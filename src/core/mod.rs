//! Core business logic module
//!
//! This module contains the banking components:
//! - `ledger` - Checked balance, summary and interest calculations
//! - `account_store` - Ordered in-memory account collection
//! - `render` - Projection of an account onto the screen
//! - `bank` - Session state and the user action handlers

pub mod account_store;
pub mod bank;
pub mod ledger;
pub mod render;

pub use account_store::AccountStore;
pub use bank::{Bank, BankConfig};
pub use ledger::{Figures, Summary};
pub use render::{render, AccountView, Classification, MovementKind, MovementRow, Screen};
