//! Split-bill calculation for the Eat-N-Split app.
//!
//! A `SplitBillDraft` holds the transient form values while a friend is
//! selected: the bill total, the user's own expense and who paid. The
//! friend's share and the balance delta to commit are derived from those
//! three values and never stored.
//!
//! Rules:
//! - amounts are finite and non-negative
//! - the user's expense never exceeds the bill total; an edit that would break
//!   this is rejected and the previous value kept
//! - changing the bill total does not retroactively clamp the user's expense,
//!   so lowering the bill below the expense leaves a negative friend share
//!   until the expense is edited again

use log::debug;
use shared::{Payer, SplitBillField};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SplitBillError {
    #[error("Amount must be a non-negative number, got {0}")]
    InvalidAmount(f64),
    #[error("Your expense ({expense}) cannot exceed the bill ({bill_total})")]
    ExpenseExceedsBill { expense: f64, bill_total: f64 },
}

/// Form state for splitting a bill with the selected friend
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SplitBillDraft {
    bill_total: f64,
    user_expense: f64,
    payer: Payer,
}

impl SplitBillDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bill_total(&self) -> f64 {
        self.bill_total
    }

    pub fn user_expense(&self) -> f64 {
        self.user_expense
    }

    pub fn payer(&self) -> Payer {
        self.payer
    }

    pub fn set_bill_total(&mut self, value: f64) -> Result<(), SplitBillError> {
        validate_amount(value)?;
        self.bill_total = value;
        Ok(())
    }

    /// Rejected when `value` exceeds the current bill total
    pub fn set_user_expense(&mut self, value: f64) -> Result<(), SplitBillError> {
        validate_amount(value)?;
        if value > self.bill_total {
            debug!(
                "Rejecting expense {:.2}, bill total is {:.2}",
                value, self.bill_total
            );
            return Err(SplitBillError::ExpenseExceedsBill {
                expense: value,
                bill_total: self.bill_total,
            });
        }
        self.user_expense = value;
        Ok(())
    }

    pub fn set_payer(&mut self, payer: Payer) {
        self.payer = payer;
    }

    /// Apply a single form edit
    pub fn apply(&mut self, field: SplitBillField) -> Result<(), SplitBillError> {
        match field {
            SplitBillField::BillTotal(value) => self.set_bill_total(value),
            SplitBillField::UserExpense(value) => self.set_user_expense(value),
            SplitBillField::Payer(payer) => {
                self.set_payer(payer);
                Ok(())
            }
        }
    }

    /// The friend's share. Zero until both the bill and the user's expense are
    /// entered, so no misleading share shows up on an empty form.
    pub fn friend_expense(&self) -> f64 {
        if self.bill_total != 0.0 && self.user_expense != 0.0 {
            self.bill_total - self.user_expense
        } else {
            0.0
        }
    }

    /// Signed amount to add to the selected friend's balance on commit.
    ///
    /// When the user paid, the friend now owes their share (positive). When the
    /// friend paid, the user owes their own share (negative).
    pub fn balance_delta(&self) -> f64 {
        match self.payer {
            Payer::User => self.friend_expense(),
            Payer::Friend => -self.user_expense,
        }
    }
}

fn validate_amount(value: f64) -> Result<(), SplitBillError> {
    if !value.is_finite() || value < 0.0 {
        return Err(SplitBillError::InvalidAmount(value));
    }
    Ok(())
}
