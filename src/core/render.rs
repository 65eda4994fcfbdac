//! Rendering
//!
//! Projects an account into the rows and figures the UI displays, and keeps
//! the [`Screen`] those projections are shown on.

use crate::core::ledger::Summary;
use crate::types::{Account, Amount};
use rust_decimal::Decimal;
use std::fmt;

/// Message shown while nobody is logged in
pub const LOGGED_OUT_MESSAGE: &str = "Log in to get started";

/// Rule deciding whether a movement row is labelled a deposit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Classification {
    /// Deposit iff amount > 0
    #[default]
    Positive,
    /// Deposit iff amount > 1, so a movement of exactly 1 shows as a
    /// withdrawal. This is the comparison the Bankist web page used.
    Legacy,
}

impl Classification {
    pub fn classify(self, amount: Amount) -> MovementKind {
        let threshold = match self {
            Classification::Positive => Decimal::ZERO,
            Classification::Legacy => Decimal::ONE,
        };

        if amount > threshold {
            MovementKind::Deposit
        } else {
            MovementKind::Withdrawal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovementKind::Deposit => write!(f, "deposit"),
            MovementKind::Withdrawal => write!(f, "withdrawal"),
        }
    }
}

/// One displayed movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementRow {
    /// 1-based chronological index of the movement, whatever the display order
    pub position: usize,
    pub kind: MovementKind,
    pub amount: Amount,
}

/// Everything displayed for one account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountView {
    pub movements: Vec<MovementRow>,
    pub balance: Decimal,
    pub summary: Summary,
}

/// Project an account into its displayed rows and figures
///
/// Rows are most recent first, or ascending by amount when `sort_ascending`
/// is set. The sort is stable, so equal amounts keep chronological order.
pub fn render(
    account: &Account,
    sort_ascending: bool,
    classification: Classification,
) -> AccountView {
    let mut movements: Vec<MovementRow> = account
        .movements()
        .iter()
        .enumerate()
        .map(|(index, &amount)| MovementRow {
            position: index + 1,
            kind: classification.classify(amount),
            amount,
        })
        .collect();

    if sort_ascending {
        movements.sort_by(|a, b| a.amount.cmp(&b.amount));
    } else {
        movements.reverse();
    }

    AccountView {
        movements,
        balance: account.balance(),
        summary: account.summary(),
    }
}

/// The output fields of the UI
///
/// Each `show` replaces the previous view entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    welcome: String,
    visible: bool,
    view: Option<AccountView>,
}

impl Screen {
    pub fn new() -> Self {
        Screen {
            welcome: LOGGED_OUT_MESSAGE.to_string(),
            visible: false,
            view: None,
        }
    }

    /// Display an account view and greet its owner
    pub fn show(&mut self, first_name: &str, view: AccountView) {
        self.welcome = format!("Welcome back, {}", first_name);
        self.visible = true;
        self.view = Some(view);
    }

    /// Hide the application shell and drop the displayed account
    pub fn hide(&mut self) {
        self.welcome = LOGGED_OUT_MESSAGE.to_string();
        self.visible = false;
        self.view = None;
    }

    pub fn welcome(&self) -> &str {
        &self.welcome
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn view(&self) -> Option<&AccountView> {
        self.view.as_ref()
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn account(movements: &[i64]) -> Account {
        Account::new(
            "Jonas Schmedtmann",
            decs(movements),
            Decimal::new(12, 1),
            1111,
        )
        .unwrap()
    }

    fn decs(values: &[i64]) -> Vec<Decimal> {
        values.iter().map(|&v| Decimal::from(v)).collect()
    }

    fn amounts(view: &AccountView) -> Vec<Decimal> {
        view.movements.iter().map(|row| row.amount).collect()
    }

    #[test]
    fn test_unsorted_is_most_recent_first() {
        let view = render(&account(&[200, 450, -400]), false, Classification::Positive);

        assert_eq!(amounts(&view), decs(&[-400, 450, 200]));
        let positions: Vec<_> = view.movements.iter().map(|row| row.position).collect();
        assert_eq!(positions, vec![3, 2, 1]);
    }

    #[test]
    fn test_sorted_is_ascending_by_amount() {
        let view = render(&account(&[200, 450, -400]), true, Classification::Positive);

        assert_eq!(amounts(&view), decs(&[-400, 200, 450]));
        let positions: Vec<_> = view.movements.iter().map(|row| row.position).collect();
        assert_eq!(positions, vec![3, 1, 2]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_amounts() {
        let view = render(&account(&[50, -10, 50, 50]), true, Classification::Positive);
        let positions: Vec<_> = view.movements.iter().map(|row| row.position).collect();
        assert_eq!(positions, vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_view_carries_summary_figures() {
        let view = render(&account(&[200, 450, -400]), false, Classification::Positive);

        assert_eq!(view.balance, Decimal::from(250));
        assert_eq!(view.summary.total_in, Decimal::from(650));
        assert_eq!(view.summary.total_out, Decimal::from(400));
        assert_eq!(view.summary.interest, Decimal::new(78, 1));
    }

    #[test]
    fn test_empty_account_renders_no_rows() {
        let view = render(&account(&[]), true, Classification::Positive);
        assert!(view.movements.is_empty());
        assert_eq!(view.balance, Decimal::ZERO);
    }

    #[rstest]
    #[case::positive_deposit(Classification::Positive, 450, MovementKind::Deposit)]
    #[case::positive_one(Classification::Positive, 1, MovementKind::Deposit)]
    #[case::positive_withdrawal(Classification::Positive, -400, MovementKind::Withdrawal)]
    #[case::legacy_deposit(Classification::Legacy, 450, MovementKind::Deposit)]
    #[case::legacy_one(Classification::Legacy, 1, MovementKind::Withdrawal)]
    #[case::legacy_withdrawal(Classification::Legacy, -400, MovementKind::Withdrawal)]
    fn test_classification(
        #[case] classification: Classification,
        #[case] amount: i64,
        #[case] expected: MovementKind,
    ) {
        assert_eq!(classification.classify(Decimal::from(amount)), expected);
    }

    #[test]
    fn test_screen_show_replaces_and_hide_resets() {
        let mut screen = Screen::new();
        assert!(!screen.is_visible());
        assert_eq!(screen.welcome(), LOGGED_OUT_MESSAGE);

        let first = render(&account(&[200]), false, Classification::Positive);
        let second = render(&account(&[200, 450]), false, Classification::Positive);
        screen.show("Jonas", first);
        screen.show("Jonas", second);
        assert!(screen.is_visible());
        assert_eq!(screen.welcome(), "Welcome back, Jonas");
        assert_eq!(screen.view().unwrap().movements.len(), 2);

        screen.hide();
        assert!(!screen.is_visible());
        assert_eq!(screen.welcome(), LOGGED_OUT_MESSAGE);
        assert!(screen.view().is_none());
    }
}
