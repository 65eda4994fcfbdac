//! Session and action handling
//!
//! This module provides the `Bank`, the single owned context that the five
//! user actions operate on. It holds the account store, the logged-in
//! session, the sort flag and the screen.
//!
//! Every handler follows the same steps:
//! - Validate the action's preconditions against the current state
//! - Mutate the store (or not)
//! - Re-render the logged-in account onto the screen
//!
//! A failed precondition leaves every piece of state untouched and is
//! reported as `Outcome::Rejected`. That includes a movement that would push
//! an account's figures past the range of `Decimal`: it is checked against
//! every affected account before any of them changes.

use crate::core::account_store::AccountStore;
use crate::core::render::{render, Classification, Screen};
use crate::types::{Account, Amount, Command, Outcome, Pin, Rejection};
use log::{debug, info};
use rust_decimal::Decimal;

/// Share of a requested loan that some past movement must reach
const LOAN_COVERAGE_RATIO: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// Bank configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BankConfig {
    /// How movement rows are labelled
    pub classification: Classification,
}

/// The application state and its action handlers
#[derive(Debug, Clone)]
pub struct Bank {
    store: AccountStore,
    /// Username of the logged-in account
    session: Option<String>,
    /// Persists across logins
    sorted: bool,
    config: BankConfig,
    screen: Screen,
}

impl Bank {
    /// Create a bank over a seeded store, with nobody logged in
    pub fn new(store: AccountStore, config: BankConfig) -> Self {
        Bank {
            store,
            session: None,
            sorted: false,
            config,
            screen: Screen::new(),
        }
    }

    /// A bank over the built-in demo accounts
    pub fn demo() -> Self {
        Self::new(AccountStore::demo(), BankConfig::default())
    }

    pub fn store(&self) -> &AccountStore {
        &self.store
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// The logged-in account, if any
    pub fn current_account(&self) -> Option<&Account> {
        self.session
            .as_deref()
            .and_then(|username| self.store.find(username))
    }

    /// Dispatch a command to its handler
    pub fn apply(&mut self, command: &Command) -> Outcome {
        let outcome = match command {
            Command::Login { username, pin } => self.login(username, *pin),
            Command::Transfer { to, amount } => self.transfer(to, *amount),
            Command::Loan { amount } => self.request_loan(*amount),
            Command::Close { username, pin } => self.close_account(username, *pin),
            Command::Sort => self.toggle_sort(),
        };

        match &outcome {
            Outcome::Applied => debug!("Applied '{}'", command),
            Outcome::Rejected(reason) => info!("Rejected '{}': {}", command, reason),
        }

        outcome
    }

    /// Log in as `username`
    ///
    /// Replaces any existing session on success.
    pub fn login(&mut self, username: &str, pin: Pin) -> Outcome {
        self.try_login(username, pin).into()
    }

    fn try_login(&mut self, username: &str, pin: Pin) -> Result<(), Rejection> {
        let account = self
            .store
            .find(username)
            .ok_or_else(|| Rejection::UnknownUsername {
                username: username.to_string(),
            })?;

        if account.pin() != pin {
            return Err(Rejection::IncorrectPin {
                username: username.to_string(),
            });
        }

        self.session = Some(account.username().to_string());
        self.refresh();
        Ok(())
    }

    /// Move `amount` from the logged-in account to `to`
    pub fn transfer(&mut self, to: &str, amount: Amount) -> Outcome {
        self.try_transfer(to, amount).into()
    }

    fn try_transfer(&mut self, to: &str, amount: Amount) -> Result<(), Rejection> {
        let sender = self.session()?;

        if amount <= Decimal::ZERO {
            return Err(Rejection::NonPositiveAmount { amount });
        }

        let receiver = self
            .store
            .find(to)
            .ok_or_else(|| Rejection::UnknownUsername {
                username: to.to_string(),
            })?;

        let balance = sender.balance();
        if balance < amount {
            return Err(Rejection::InsufficientBalance {
                balance,
                requested: amount,
            });
        }

        if receiver.username() == sender.username() {
            return Err(Rejection::SelfTransfer {
                username: to.to_string(),
            });
        }

        check_accepts(sender, -amount)?;
        check_accepts(receiver, amount)?;

        let sender = sender.username().to_string();
        let receiver = receiver.username().to_string();
        self.store.append_movement(&sender, -amount);
        self.store.append_movement(&receiver, amount);

        self.refresh();
        Ok(())
    }

    /// Grant a loan of `amount` to the logged-in account
    ///
    /// Granted only if some past movement is at least 10% of the amount.
    pub fn request_loan(&mut self, amount: Amount) -> Outcome {
        self.try_request_loan(amount).into()
    }

    fn try_request_loan(&mut self, amount: Amount) -> Result<(), Rejection> {
        let account = self.session()?;

        if amount <= Decimal::ZERO {
            return Err(Rejection::NonPositiveAmount { amount });
        }

        let required = amount * LOAN_COVERAGE_RATIO;
        if !account.movements().iter().any(|&mov| mov >= required) {
            return Err(Rejection::LoanNotCovered {
                requested: amount,
                required,
            });
        }

        check_accepts(account, amount)?;

        let username = account.username().to_string();
        self.store.append_movement(&username, amount);

        self.refresh();
        Ok(())
    }

    /// Close the logged-in account
    ///
    /// Both credentials must match the logged-in account. On success the
    /// account is removed, the session ends and the shell is hidden.
    pub fn close_account(&mut self, username: &str, pin: Pin) -> Outcome {
        self.try_close_account(username, pin).into()
    }

    fn try_close_account(&mut self, username: &str, pin: Pin) -> Result<(), Rejection> {
        let account = self.session()?;

        if account.username() != username || account.pin() != pin {
            return Err(Rejection::CredentialsMismatch);
        }

        self.store.remove(username);
        self.session = None;
        self.screen.hide();
        Ok(())
    }

    /// Flip the sort flag and re-render
    pub fn toggle_sort(&mut self) -> Outcome {
        self.try_toggle_sort().into()
    }

    fn try_toggle_sort(&mut self) -> Result<(), Rejection> {
        self.session()?;

        self.sorted = !self.sorted;
        self.refresh();
        Ok(())
    }

    fn session(&self) -> Result<&Account, Rejection> {
        self.current_account().ok_or(Rejection::NoActiveSession)
    }

    /// Render the logged-in account onto the screen
    fn refresh(&mut self) {
        if let Some(account) = self.current_account() {
            let view = render(account, self.sorted, self.config.classification);
            let first_name = account.first_name().to_string();
            self.screen.show(&first_name, view);
        }
    }
}

fn check_accepts(account: &Account, amount: Amount) -> Result<(), Rejection> {
    if account.accepts(amount) {
        Ok(())
    } else {
        Err(Rejection::ArithmeticOverflow {
            amount,
            username: account.username().to_string(),
        })
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::demo()
    }
}
