//! Extraction payload types
//!
//! These types are backend-agnostic and mirror the output schema declared
//! to the vision model.

use serde::{Deserialize, Serialize};

/// Structured output of a receipt extraction
///
/// All four fields are required: a payload missing any of them does not
/// deserialize, and the extraction fails as a whole rather than producing
/// a partial record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedExpense {
    /// Date of the expense on the receipt, expected `YYYY-MM-DD`.
    /// Passed through as-is; the model is instructed but not trusted to
    /// return a real calendar date.
    pub date: String,
    /// Total amount on the receipt
    pub amount: f64,
    /// Vendor name on the receipt
    pub vendor: String,
    /// Free-text category label (e.g. "Food", "Transportation", "Groceries")
    pub category: String,
}
