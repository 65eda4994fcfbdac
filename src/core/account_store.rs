//! Account store module
//!
//! This module provides the `AccountStore`, the ordered in-memory list of
//! accounts the bank works on.
//!
//! The AccountStore is responsible for:
//! - Rejecting duplicate usernames when it is built
//! - Looking accounts up by username
//! - Appending movements to accounts
//! - Removing closed accounts

use crate::types::{Account, Amount, BankError};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Ordered collection of accounts
///
/// Accounts keep the order they were seeded in. Usernames are unique, so a
/// username is enough to address an account.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountStore {
    accounts: Vec<Account>,
}

impl AccountStore {
    /// Build a store from seed accounts
    ///
    /// # Errors
    ///
    /// Returns `BankError::DuplicateUsername` if two owners produce the same
    /// initials. Lookups would otherwise silently pick the first match.
    pub fn new(accounts: Vec<Account>) -> Result<Self, BankError> {
        let mut seen: HashMap<&str, &str> = HashMap::with_capacity(accounts.len());
        for account in &accounts {
            if let Some(first_owner) = seen.insert(account.username(), account.owner()) {
                return Err(BankError::duplicate_username(
                    account.username(),
                    first_owner,
                    account.owner(),
                ));
            }
        }

        Ok(AccountStore { accounts })
    }

    /// The four built-in demo accounts
    pub fn demo() -> Self {
        AccountStore {
            accounts: demo_accounts(),
        }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// All accounts in seed order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Find an account by exact (case-sensitive) username
    pub fn find(&self, username: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.username() == username)
    }

    fn find_mut(&mut self, username: &str) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.username() == username)
    }

    /// Append a movement to an account
    ///
    /// Returns `false` if no account has this username, or if the movement
    /// would overflow the account's figures. Nothing changes in either case.
    pub fn append_movement(&mut self, username: &str, amount: Amount) -> bool {
        self.find_mut(username)
            .is_some_and(|account| account.push_movement(amount))
    }

    /// Remove an account, returning it if it existed
    pub fn remove(&mut self, username: &str) -> Option<Account> {
        let index = self
            .accounts
            .iter()
            .position(|account| account.username() == username)?;
        Some(self.accounts.remove(index))
    }
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::demo()
    }
}

fn demo_accounts() -> Vec<Account> {
    let seeds: [(&str, &[i64], Decimal, u32); 4] = [
        (
            "Jonas Schmedtmann",
            &[200, 450, -400, 3000, -650, -130, 70, 1300],
            Decimal::new(12, 1),
            1111,
        ),
        (
            "Jessica Davis",
            &[5000, 3400, -150, -790, -3210, -1000, 8500, -30],
            Decimal::new(15, 1),
            2222,
        ),
        (
            "Steven Thomas Williams",
            &[200, -200, 340, -300, -20, 50, 400, -460],
            Decimal::new(7, 1),
            3333,
        ),
        (
            "Sarah Smith",
            &[430, 1000, 700, 50, 90],
            Decimal::ONE,
            4444,
        ),
    ];

    // Every demo owner has a name and small movements, so none is dropped
    seeds
        .into_iter()
        .filter_map(|(owner, movements, interest_rate, pin)| {
            let movements = movements.iter().map(|&mov| Decimal::from(mov)).collect();
            Account::new(owner, movements, interest_rate, pin).ok()
        })
        .collect()
}
