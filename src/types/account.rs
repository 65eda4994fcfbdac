//! Account-related types for Bankist
//!
//! This module defines the Account record and the derivation of login
//! usernames from owner names.

use super::error::BankError;
use crate::core::ledger::{Figures, Summary};
use rust_decimal::Decimal;

/// Signed movement amount (positive = deposit, negative = withdrawal)
pub type Amount = Decimal;

/// Numeric login credential
pub type Pin = u32;

/// One bank customer
///
/// The username is derived from the owner name when the account is built and
/// is never recomputed afterwards. The balance and summary are kept in step
/// with the movements: a movement that would overflow them is never
/// appended.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    owner: String,
    username: String,

    /// Movement history in chronological order
    ///
    /// Only ever appended to. The whole account is dropped on closure.
    movements: Vec<Amount>,

    /// Percentage applied to qualifying deposits
    interest_rate: Decimal,

    pin: Pin,

    figures: Figures,
}

impl Account {
    /// Create an account, deriving its username from `owner`
    ///
    /// # Errors
    ///
    /// - `BankError::InvalidOwner` if the owner name contains no words, since
    ///   such an account could never be logged into
    /// - `BankError::ArithmeticOverflow` if the balance or a summary figure
    ///   of `movements` does not fit in a `Decimal`
    pub fn new(
        owner: impl Into<String>,
        movements: Vec<Amount>,
        interest_rate: Decimal,
        pin: Pin,
    ) -> Result<Self, BankError> {
        let owner = owner.into();
        let username = derive_username(&owner);
        if username.is_empty() {
            return Err(BankError::invalid_owner(&owner));
        }

        let figures = Figures::compute(&movements, interest_rate)
            .ok_or_else(|| BankError::arithmetic_overflow(&owner))?;

        Ok(Account {
            owner,
            username,
            movements,
            interest_rate,
            pin,
            figures,
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// First word of the owner name, used for the welcome message
    pub fn first_name(&self) -> &str {
        self.owner.split_whitespace().next().unwrap_or_default()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn movements(&self) -> &[Amount] {
        &self.movements
    }

    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    pub fn pin(&self) -> Pin {
        self.pin
    }

    /// Current balance (sum of all movements)
    pub fn balance(&self) -> Decimal {
        self.figures.balance
    }

    pub fn summary(&self) -> Summary {
        self.figures.summary
    }

    /// Whether `amount` can be appended without overflowing a figure
    pub fn accepts(&self, amount: Amount) -> bool {
        self.figures
            .with_movement(amount, self.interest_rate)
            .is_some()
    }

    /// Append a movement to the history
    ///
    /// Returns `false` and leaves the account untouched if a figure would
    /// overflow.
    pub(crate) fn push_movement(&mut self, amount: Amount) -> bool {
        match self.figures.with_movement(amount, self.interest_rate) {
            Some(figures) => {
                self.movements.push(amount);
                self.figures = figures;
                true
            }
            None => false,
        }
    }
}

/// Derive a login username from an owner name
///
/// Takes the first character of every whitespace-separated word, lowercased,
/// and concatenates them: "Steven Thomas Williams" becomes "stw".
pub fn derive_username(owner: &str) -> String {
    owner
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::two_words("Jonas Schmedtmann", "js")]
    #[case::three_words("Steven Thomas Williams", "stw")]
    #[case::single_word("Cher", "c")]
    #[case::extra_whitespace("  Sarah   Smith ", "ss")]
    #[case::already_lowercase("jessica davis", "jd")]
    #[case::empty("", "")]
    #[case::blank("   ", "")]
    fn test_derive_username(#[case] owner: &str, #[case] expected: &str) {
        assert_eq!(derive_username(owner), expected);
    }

    #[test]
    fn test_new_derives_username_once() {
        let account = Account::new("Jonas Schmedtmann", vec![], Decimal::ONE, 1111).unwrap();
        assert_eq!(account.username(), "js");
        assert_eq!(account.owner(), "Jonas Schmedtmann");
        assert_eq!(account.first_name(), "Jonas");
        assert_eq!(account.pin(), 1111);
    }

    #[test]
    fn test_new_rejects_blank_owner() {
        let result = Account::new("   ", vec![], Decimal::ONE, 1);
        assert!(matches!(result, Err(BankError::InvalidOwner { .. })));
    }

    #[test]
    fn test_balance_tracks_pushed_movements() {
        let mut account = Account::new(
            "Sarah Smith",
            vec![Decimal::from(430), Decimal::from(-30)],
            Decimal::ONE,
            4444,
        )
        .unwrap();
        assert_eq!(account.balance(), Decimal::from(400));

        assert!(account.push_movement(Decimal::from(100)));
        assert_eq!(account.balance(), Decimal::from(500));
        assert_eq!(account.summary().total_in, Decimal::from(530));
        assert_eq!(account.summary().total_out, Decimal::from(30));
        assert_eq!(account.summary().interest, Decimal::new(53, 1));
        assert_eq!(account.movements().len(), 3);
    }

    #[test]
    fn test_new_rejects_overflowing_movements() {
        let result = Account::new(
            "Ada Lovelace",
            vec![Decimal::MAX, Decimal::MAX],
            Decimal::ONE,
            1815,
        );
        assert_eq!(result, Err(BankError::arithmetic_overflow("Ada Lovelace")));
    }

    #[test]
    fn test_push_movement_refuses_overflow() {
        let mut account =
            Account::new("Ada Lovelace", vec![Decimal::MAX], Decimal::ZERO, 1815).unwrap();

        assert!(!account.accepts(Decimal::ONE));
        assert!(!account.push_movement(Decimal::ONE));
        assert_eq!(account.movements(), &[Decimal::MAX]);
        assert_eq!(account.balance(), Decimal::MAX);

        assert!(account.accepts(Decimal::NEGATIVE_ONE));
    }
}
