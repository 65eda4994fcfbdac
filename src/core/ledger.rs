//! Ledger calculations
//!
//! Pure functions deriving an account's figures from its movement list. An
//! empty list yields zero everywhere.
//!
//! All arithmetic is checked: every function returns `None` instead of
//! panicking when a sum or product leaves the range of `Decimal`.

use rust_decimal::Decimal;

/// Summary figures shown under the movement list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// Sum of all deposits
    pub total_in: Decimal,
    /// Absolute sum of all withdrawals
    pub total_out: Decimal,
    /// Interest earned on deposits, see [`qualifying_interest`]
    pub interest: Decimal,
}

/// Balance and summary of one account
///
/// Kept alongside the movements so that appending a movement is the only
/// place figures can overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Figures {
    pub balance: Decimal,
    pub summary: Summary,
}

impl Figures {
    /// Compute every figure of a movement list at `rate` percent
    ///
    /// # Returns
    ///
    /// * `Some(Figures)` - All figures fit in a `Decimal`
    /// * `None` - Some figure would overflow
    pub fn compute(movements: &[Decimal], rate: Decimal) -> Option<Self> {
        Some(Figures {
            balance: balance(movements)?,
            summary: summarize(movements, rate)?,
        })
    }

    /// Figures after appending `amount`, without recomputing the history
    ///
    /// Returns `None` if any figure would overflow.
    pub fn with_movement(&self, amount: Decimal, rate: Decimal) -> Option<Self> {
        let mut next = *self;
        next.balance = self.balance.checked_add(amount)?;

        if amount > Decimal::ZERO {
            next.summary.total_in = self.summary.total_in.checked_add(amount)?;
            let interest = deposit_interest(amount, rate)?;
            next.summary.interest = self.summary.interest.checked_add(interest)?;
        } else if amount < Decimal::ZERO {
            next.summary.total_out = self.summary.total_out.checked_add(amount.abs())?;
        }

        Some(next)
    }
}

fn checked_sum<'a>(mut amounts: impl Iterator<Item = &'a Decimal>) -> Option<Decimal> {
    amounts.try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(*amount))
}

/// Interest on one deposit, or zero if it is below 1
fn deposit_interest(deposit: Decimal, rate: Decimal) -> Option<Decimal> {
    let interest = deposit.checked_mul(rate.checked_div(Decimal::ONE_HUNDRED)?)?;

    if interest >= Decimal::ONE {
        Some(interest)
    } else {
        Some(Decimal::ZERO)
    }
}

/// Sum of all movements
pub fn balance(movements: &[Decimal]) -> Option<Decimal> {
    checked_sum(movements.iter())
}

/// Sum of all deposits (movements > 0)
pub fn total_in(movements: &[Decimal]) -> Option<Decimal> {
    checked_sum(movements.iter().filter(|mov| **mov > Decimal::ZERO))
}

/// Absolute value of the sum of all withdrawals (movements < 0)
pub fn total_out(movements: &[Decimal]) -> Option<Decimal> {
    checked_sum(movements.iter().filter(|mov| **mov < Decimal::ZERO)).map(|sum| sum.abs())
}

/// Interest earned on deposits at `rate` percent
///
/// Interest is computed per deposit as `deposit * rate / 100`. Any single
/// amount below 1 is dropped entirely; the threshold applies per item, not
/// to the total.
pub fn qualifying_interest(movements: &[Decimal], rate: Decimal) -> Option<Decimal> {
    movements
        .iter()
        .filter(|mov| **mov > Decimal::ZERO)
        .try_fold(Decimal::ZERO, |acc, &deposit| {
            acc.checked_add(deposit_interest(deposit, rate)?)
        })
}

/// Compute every summary figure at once
pub fn summarize(movements: &[Decimal], rate: Decimal) -> Option<Summary> {
    Some(Summary {
        total_in: total_in(movements)?,
        total_out: total_out(movements)?,
        interest: qualifying_interest(movements, rate)?,
    })
}
