//! CSV format handling for seed accounts
//!
//! This module provides:
//! - SeedRecord structure for deserialization
//! - Conversion from seed records to accounts
//! - Loading a whole account store from a CSV file
//!
//! The expected columns are `owner,pin,interest_rate,movements`, where
//! `movements` is a whitespace separated list of signed amounts.

use crate::core::AccountStore;
use crate::types::{Account, BankError, Pin};
use csv::{ReaderBuilder, Trim};
use log::debug;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// CSV record structure for deserialization
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SeedRecord {
    pub owner: String,
    pub pin: Pin,
    pub interest_rate: String,
    #[serde(default)]
    pub movements: String,
}

/// Convert a SeedRecord to an Account
///
/// # Returns
///
/// * `Ok(Account)` - Successfully converted record
/// * `Err(String)` - Description of the first field that failed to parse
pub fn convert_seed_record(record: SeedRecord) -> Result<Account, String> {
    let interest_rate = Decimal::from_str(record.interest_rate.trim()).map_err(|_| {
        format!(
            "Invalid interest rate '{}' for '{}'",
            record.interest_rate, record.owner
        )
    })?;

    let movements = record
        .movements
        .split_whitespace()
        .map(|amount| {
            Decimal::from_str(amount)
                .map_err(|_| format!("Invalid movement '{}' for '{}'", amount, record.owner))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Account::new(record.owner, movements, interest_rate, record.pin).map_err(|e| e.to_string())
}

/// Read seed accounts from any reader and build a store
///
/// Unlike command scripts, a bad row is fatal: the store is never built from
/// a partial file.
///
/// # Errors
///
/// - `BankError::ParseError` for malformed CSV, unparsable fields, or
///   movements whose figures overflow a `Decimal`
/// - `BankError::DuplicateUsername` if two owners share initials
pub fn read_accounts_csv<R: Read>(input: R) -> Result<AccountStore, BankError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(input);

    let mut accounts = Vec::new();
    for result in reader.deserialize::<SeedRecord>() {
        let record = result?;
        // Header is line 1
        let line = accounts.len() as u64 + 2;
        let account =
            convert_seed_record(record).map_err(|e| BankError::parse_error(Some(line), e))?;
        accounts.push(account);
    }

    debug!("Loaded {} seed accounts", accounts.len());
    AccountStore::new(accounts)
}

/// Load seed accounts from a CSV file
pub fn load_accounts_csv(path: &Path) -> Result<AccountStore, BankError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => BankError::file_not_found(&path.display().to_string()),
        _ => BankError::from(e),
    })?;

    read_accounts_csv(file)
}
