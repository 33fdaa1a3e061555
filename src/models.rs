use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{OutlayError, Result};

/// A stored expense row. The id is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    pub id: i64,
    pub date: NaiveDate,
    pub category: String,
    pub amount: Decimal,
    pub description: Option<String>,
}

/// Validated form input before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub date: NaiveDate,
    pub category: String,
    pub amount: Decimal,
    pub description: Option<String>,
}

impl ExpenseDraft {
    /// Build a draft from raw field strings, rejecting anything the store
    /// should never see. Amounts are normalized to two decimal places;
    /// a blank description becomes None.
    pub fn parse(date: &str, category: &str, amount: &str, description: &str) -> Result<Self> {
        let date = date.trim();
        let category = category.trim();
        let amount = amount.trim();
        let description = description.trim();

        if date.is_empty() || category.is_empty() || amount.is_empty() {
            return Err(OutlayError::Validation(
                "Please fill Date, Category and Amount".into(),
            ));
        }

        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| OutlayError::Validation("Date must be in YYYY-MM-DD format".into()))?;

        let amount = Decimal::from_str(amount)
            .map_err(|_| OutlayError::Validation("Amount must be numeric".into()))?
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        Ok(ExpenseDraft {
            date,
            category: category.to_string(),
            amount,
            description: if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            },
        })
    }
}

/// Convert a two-decimal amount to whole cents for storage. The multiply
/// is checked: amounts whose cents overflow a Decimal or an i64 are
/// rejected, never panicked on.
pub fn to_cents(amount: Decimal) -> Result<i64> {
    amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|cents| cents.to_i64())
        .ok_or_else(|| OutlayError::Validation("Amount is out of range".into()))
}

/// Convert stored cents back to a two-decimal amount.
pub fn from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}
