//! Salary disbursement policy.
//!
//! # Responsibility
//! - Define how a salary payment is described per employee.
//! - Keep the persisted method tag explicit instead of deriving it from an
//!   object's identity.
//!
//! # Invariants
//! - `pay` is a pure function of method and amount; no side effects.
//! - DB tag strings are stable: `"Direct Deposit"` and `"Check"`.

use serde::{Deserialize, Serialize};

/// Disbursement method for an employee's salary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Electronic transfer. The default for new employees.
    #[default]
    DirectDeposit,
    /// Paper check.
    Check,
}

impl PaymentMethod {
    /// Renders a payment confirmation line for `amount`.
    ///
    /// The amount is accepted as-is; range checks belong to callers. Whole
    /// amounts render with a trailing `.0` to keep the confirmation text
    /// stable with existing pay-stub consumers.
    pub fn pay(self, amount: f64) -> String {
        let amount = format_amount(amount);
        match self {
            Self::DirectDeposit => format!("Paid {amount} via Direct Deposit."),
            Self::Check => format!("Paid {amount} via Check."),
        }
    }

    /// Stable tag stored in the `payment_method` column.
    pub fn as_db_str(self) -> &'static str {
        match self {
            Self::DirectDeposit => "Direct Deposit",
            Self::Check => "Check",
        }
    }

    /// Parses a persisted method tag.
    ///
    /// Anything other than `"Check"` resolves to direct deposit, matching the
    /// observed persistence behavior this schema is compatible with.
    pub fn from_db_str(value: &str) -> Self {
        if value == "Check" {
            Self::Check
        } else {
            Self::DirectDeposit
        }
    }
}

fn format_amount(amount: f64) -> String {
    if amount.is_finite() && amount.fract() == 0.0 {
        format!("{amount:.1}")
    } else {
        amount.to_string()
    }
}
