//! CSV importer for the expense tracking-sheet export format
//!
//! The format is a plain comma-delimited export with a fixed header
//! vocabulary and no quoting or escaping. Parsing is deliberately
//! permissive: rows whose field count does not match the header are
//! dropped without error, so a comma inside a field silently loses that
//! row. This matches the companion sheet's behavior and is relied on by
//! downstream consumers; do not tighten it.

use std::collections::HashMap;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::error::Result;
use crate::models::Expense;

/// Expected header names, matched exactly (case-sensitive).
///
/// The amount is read from the column literally named "Currency". That is
/// how the source sheet labels its amount column, and stored documents
/// depend on the mapping, so it stays.
const COL_DATE: &str = "Date on Receipt";
const COL_DESCRIPTION: &str = "Description of Expense";
const COL_AMOUNT: &str = "Currency";
const COL_CATEGORY: &str = "Type of Expense";
const COL_PAYMENT_METHOD: &str = "Payment Method";
const COL_PAYEE: &str = "Payee";

/// Parse raw CSV text into expenses.
///
/// Blank (whitespace-only) lines are discarded; the first remaining line
/// is the header row. Values map to fields by header name, not position,
/// so reordered columns still import. Missing columns default to empty
/// strings, and a missing or unparsable amount defaults to `0.0` rather
/// than failing the row.
///
/// Empty input (or input that is only blank lines) yields an empty vec.
pub fn parse_expenses_csv(raw: &str) -> Result<Vec<Expense>> {
    let cleaned = raw
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    if cleaned.is_empty() {
        return Ok(Vec::new());
    }

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(cleaned.as_bytes());

    let headers = rdr.headers()?.clone();
    let header_index = index_headers(&headers);

    let mut expenses = Vec::new();
    let mut skipped = 0usize;

    for result in rdr.records() {
        let record = result?;

        // Permissive-skip: only rows with exactly the header's field count
        // are accepted. Everything else is dropped, not reported.
        if record.len() != headers.len() {
            skipped += 1;
            continue;
        }

        let field = |name: &str| -> &str {
            header_index
                .get(name)
                .and_then(|&i| record.get(i))
                .unwrap_or("")
        };

        let amount = field(COL_AMOUNT).parse::<f64>().unwrap_or(0.0);

        expenses.push(Expense {
            date: field(COL_DATE).to_string(),
            payee: field(COL_PAYEE).to_string(),
            description: field(COL_DESCRIPTION).to_string(),
            amount,
            category: field(COL_CATEGORY).to_string(),
            payment_method: field(COL_PAYMENT_METHOD).to_string(),
        });
    }

    debug!(
        "Parsed {} expenses ({} malformed rows skipped)",
        expenses.len(),
        skipped
    );
    Ok(expenses)
}

/// Map header names to column positions. Later duplicates win, matching
/// the source sheet's last-write-wins header handling.
fn index_headers(headers: &StringRecord) -> HashMap<String, usize> {
    let mut index = HashMap::new();
    for (i, name) in headers.iter().enumerate() {
        index.insert(name.to_string(), i);
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_HEADER: &str =
        "Date on Receipt,Description of Expense,Currency,Type of Expense,Payment Method,Payee";

    #[test]
    fn test_parse_well_formed_row() {
        let csv = format!("{}\n2024-01-15,Coffee,4.50,Food,Card,Starbucks", FULL_HEADER);

        let expenses = parse_expenses_csv(&csv).unwrap();
        assert_eq!(expenses.len(), 1);

        let e = &expenses[0];
        assert_eq!(e.date, "2024-01-15");
        assert_eq!(e.description, "Coffee");
        assert_eq!(e.amount, 4.50);
        assert_eq!(e.category, "Food");
        assert_eq!(e.payment_method, "Card");
        assert_eq!(e.payee, "Starbucks");
    }

    #[test]
    fn test_field_count_mismatch_skips_row_only() {
        let csv = format!(
            "{}\n2024-01-15,Coffee,4.50,Food,Card,Starbucks\n\
             2024-01-16,too,few,fields\n\
             2024-01-17,Lunch,12.00,Food,Cash,Deli",
            FULL_HEADER
        );

        let expenses = parse_expenses_csv(&csv).unwrap();
        // The malformed middle row vanishes without disturbing its neighbors
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0].description, "Coffee");
        assert_eq!(expenses[1].description, "Lunch");
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(parse_expenses_csv("").unwrap().is_empty());
        assert!(parse_expenses_csv("\n\n   \n\t\n").unwrap().is_empty());
    }

    #[test]
    fn test_blank_lines_discarded_before_header() {
        let csv = format!(
            "\n   \n{}\n\n2024-01-15,Coffee,4.50,Food,Card,Starbucks\n\n",
            FULL_HEADER
        );

        let expenses = parse_expenses_csv(&csv).unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].payee, "Starbucks");
    }

    #[test]
    fn test_missing_columns_default() {
        // Only three of the six canonical columns present
        let csv = "Date on Receipt,Currency,Type of Expense\n2024-03-01,20,Transport";

        let expenses = parse_expenses_csv(csv).unwrap();
        assert_eq!(expenses.len(), 1);

        let e = &expenses[0];
        assert_eq!(e.date, "2024-03-01");
        assert_eq!(e.amount, 20.0);
        assert_eq!(e.category, "Transport");
        assert_eq!(e.payee, "");
        assert_eq!(e.description, "");
        assert_eq!(e.payment_method, "");
    }

    #[test]
    fn test_reordered_columns_map_by_name() {
        let csv = "Payee,Currency,Date on Receipt\nStarbucks,4.50,2024-01-15";

        let expenses = parse_expenses_csv(csv).unwrap();
        assert_eq!(expenses[0].payee, "Starbucks");
        assert_eq!(expenses[0].amount, 4.50);
        assert_eq!(expenses[0].date, "2024-01-15");
    }

    #[test]
    fn test_unparsable_amount_defaults_to_zero() {
        let csv = "Date on Receipt,Currency\n2024-01-15,USD\n2024-01-16,\n2024-01-17,9.99";

        let expenses = parse_expenses_csv(csv).unwrap();
        assert_eq!(expenses.len(), 3);
        assert_eq!(expenses[0].amount, 0.0);
        assert_eq!(expenses[1].amount, 0.0);
        assert_eq!(expenses[2].amount, 9.99);
    }

    #[test]
    fn test_header_match_is_case_sensitive() {
        // "currency" is not "Currency"; the amount column goes unmapped
        let csv = "Date on Receipt,currency\n2024-01-15,9.99";

        let expenses = parse_expenses_csv(csv).unwrap();
        assert_eq!(expenses[0].amount, 0.0);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let csv = format!(
            "{}\n 2024-01-15 ,  Coffee ,  4.50 , Food ,Card,  Starbucks  ",
            FULL_HEADER
        );

        let expenses = parse_expenses_csv(&csv).unwrap();
        assert_eq!(expenses[0].date, "2024-01-15");
        assert_eq!(expenses[0].amount, 4.50);
        assert_eq!(expenses[0].payee, "Starbucks");
    }

    #[test]
    fn test_unquoted_embedded_comma_loses_the_row() {
        // No quoting support: the extra comma shifts the field count
        let csv = format!(
            "{}\n2024-01-15,\"Coffee, large\",4.50,Food,Card,Starbucks",
            FULL_HEADER
        );

        let expenses = parse_expenses_csv(&csv).unwrap();
        assert!(expenses.is_empty());
    }
}
