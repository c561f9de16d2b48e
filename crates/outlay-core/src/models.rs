//! Domain models for Outlay

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One financial transaction, the canonical shape every ingestion path
/// converges to.
///
/// Records are immutable once created. The stored collection only ever
/// grows by append or is cleared whole; there is no update-in-place.
///
/// Serialized field names are camelCase to match the persisted document
/// shape (`paymentMethod`, etc.).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Calendar date as an ISO-8601 `YYYY-MM-DD` string.
    ///
    /// Not validated at ingestion. Display code should call
    /// [`Expense::has_valid_date`] and render unparsable dates as an
    /// explicit "invalid" state instead of crashing.
    pub date: String,
    /// Counterparty display name. Empty when the source had no payee.
    #[serde(default)]
    pub payee: String,
    /// Free-text note, may be empty.
    #[serde(default)]
    pub description: String,
    /// Decimal magnitude in the user's single implicit currency.
    /// Parse failures at ingestion normalize to `0.0`.
    #[serde(default)]
    pub amount: f64,
    /// Free-text aggregation key. Case-sensitive: labels differing only
    /// in case are distinct categories and are not merged.
    #[serde(default)]
    pub category: String,
    /// Descriptive only, never used in aggregation.
    #[serde(default)]
    pub payment_method: String,
}

impl Expense {
    /// Manual-entry constructor. Trivial by design: the date string is
    /// taken as-is, format validation belongs to the entry surface.
    pub fn new(
        date: impl Into<String>,
        payee: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        payment_method: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            payee: payee.into(),
            description: description.into(),
            amount,
            category: category.into(),
            payment_method: payment_method.into(),
        }
    }

    /// Whether `date` is a real calendar date in `YYYY-MM-DD` form.
    pub fn has_valid_date(&self) -> bool {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").is_ok()
    }
}

/// Per-category summed spend, used for top-N ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Aggregated view of the expense collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpendingSummary {
    /// Sum of all amounts
    pub total: f64,
    /// Number of records
    pub count: usize,
    /// Summed spend per exact-match category label
    pub category_totals: HashMap<String, f64>,
    /// Categories with greatest summed spend, descending, at most N entries.
    /// Ties keep first-seen order.
    pub top_categories: Vec<CategoryTotal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_date() {
        let expense = Expense::new("2024-01-15", "Starbucks", "Coffee", 4.5, "Food", "Card");
        assert!(expense.has_valid_date());
    }

    #[test]
    fn test_invalid_date_detected_not_rejected() {
        // Bad dates survive construction; only the display path flags them
        let expense = Expense::new("not-a-date", "", "", 1.0, "Misc", "");
        assert!(!expense.has_valid_date());

        let impossible = Expense::new("2024-02-31", "", "", 1.0, "Misc", "");
        assert!(!impossible.has_valid_date());
    }

    #[test]
    fn test_serde_shape_is_camel_case() {
        let expense = Expense::new("2024-01-15", "Starbucks", "Coffee", 4.5, "Food", "Card");
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["paymentMethod"], "Card");
        assert_eq!(json["date"], "2024-01-15");
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        // Older documents may omit fields; they default rather than fail
        let expense: Expense = serde_json::from_str(r#"{"date":"2024-01-15"}"#).unwrap();
        assert_eq!(expense.amount, 0.0);
        assert_eq!(expense.payee, "");
    }
}
