//! Category aggregation for summary reporting
//!
//! Summaries are recomputed from the full collection on every call. There
//! is no incremental maintenance or caching: collections are expected to
//! stay in the thousands of records, where a full pass is cheap.

use std::collections::HashMap;

use crate::models::{CategoryTotal, Expense, SpendingSummary};

/// Number of top categories reported when the caller has no preference
pub const DEFAULT_TOP_CATEGORIES: usize = 5;

/// Compute total spend, per-category totals, and the top-N categories.
///
/// Categories group by exact string match; the empty string is a valid
/// group of its own. `top_categories` sorts by summed amount descending,
/// and equal totals keep the order in which each category first appeared
/// in `records` — the ranking is deterministic for a given input order.
///
/// Non-finite amounts contribute `0` (ingestion already normalizes parse
/// failures to `0`, this guards documents written by other tools).
pub fn summarize(records: &[Expense], top_n: usize) -> SpendingSummary {
    let mut total = 0.0;
    // First-seen order drives the tie-break, so totals accumulate in an
    // ordered seq with a side index rather than a bare map.
    let mut ordered: Vec<CategoryTotal> = Vec::new();
    let mut position: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let amount = if record.amount.is_finite() {
            record.amount
        } else {
            0.0
        };
        total += amount;

        match position.get(record.category.as_str()) {
            Some(&i) => ordered[i].total += amount,
            None => {
                position.insert(record.category.as_str(), ordered.len());
                ordered.push(CategoryTotal {
                    category: record.category.clone(),
                    total: amount,
                });
            }
        }
    }

    let category_totals = ordered
        .iter()
        .map(|c| (c.category.clone(), c.total))
        .collect();

    // Stable sort over the first-seen ordering: ties stay in appearance order
    let mut top_categories = ordered;
    top_categories.sort_by(|a, b| b.total.total_cmp(&a.total));
    top_categories.truncate(top_n);

    SpendingSummary {
        total,
        count: records.len(),
        category_totals,
        top_categories,
    }
}
