//! Integration tests for outlay-core
//!
//! These tests exercise the full import → store → summarize workflow
//! against a real SQLite file, plus the receipt path over the mock client.

use outlay_core::{
    aggregate::summarize,
    csv_import::parse_expenses_csv,
    extract::{ExtractorClient, ReceiptExtractor},
    kv::SqliteStore,
    store::ExpenseStore,
};

/// Tracking-sheet export with one malformed row (embedded comma, no quoting)
fn sheet_csv() -> &'static str {
    "Date on Receipt,Description of Expense,Currency,Type of Expense,Payment Method,Payee\n\
     2024-01-15,Coffee,4.50,Food,Card,Starbucks\n\
     2024-01-16,Team lunch,32.00,Food,Card,Deli\n\
     2024-01-17,Ride downtown, with a stop,18.00,Transport,Cash,CityCab\n\
     2024-01-18,Weekly shop,54.25,Groceries,Card,Grocer\n\
     2024-01-19,Metro pass,40.00,Transport,Card,Transit Authority"
}

#[test]
fn test_full_import_workflow() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("outlay.db");
    let db_path = db_path.to_str().unwrap();

    let expenses = parse_expenses_csv(sheet_csv()).expect("Failed to parse CSV");
    // The comma-in-field row is silently dropped
    assert_eq!(expenses.len(), 4);

    let store = ExpenseStore::new(SqliteStore::open(db_path).unwrap());
    store.append(&expenses).unwrap();

    // Reopen the file: the collection survives the process boundary
    let reopened = ExpenseStore::new(SqliteStore::open(db_path).unwrap());
    let stored = reopened.load().unwrap();
    assert_eq!(stored.len(), 4);
    assert_eq!(stored[0].payee, "Starbucks");

    let summary = summarize(&stored, 2);
    assert_eq!(summary.total, 130.75);
    assert_eq!(summary.count, 4);
    assert_eq!(summary.category_totals["Food"], 36.5);
    assert_eq!(summary.category_totals["Transport"], 40.0);
    assert_eq!(summary.top_categories[0].category, "Groceries");
    assert_eq!(summary.top_categories[1].category, "Transport");
}

#[test]
fn test_clear_empties_regardless_of_contents() {
    let store = ExpenseStore::new(SqliteStore::in_memory().unwrap());

    let expenses = parse_expenses_csv(sheet_csv()).unwrap();
    store.append(&expenses).unwrap();
    assert!(!store.load().unwrap().is_empty());

    store.clear().unwrap();
    assert!(store.load().unwrap().is_empty());

    // Clearing an already-empty store is also fine
    store.clear().unwrap();
    assert!(store.load().unwrap().is_empty());
}

#[tokio::test]
async fn test_receipt_to_store_workflow() {
    let store = ExpenseStore::new(SqliteStore::in_memory().unwrap());
    let extractor = ReceiptExtractor::new(ExtractorClient::mock());

    let expense = extractor
        .extract("data:image/png;base64,aGk=")
        .await
        .expect("Extraction failed");
    store.append(std::slice::from_ref(&expense)).unwrap();

    let stored = store.load().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].payee, "Mock Mart");
    assert_eq!(stored[0].description, "");

    // Both ingestion paths land in one collection
    let csv_expenses = parse_expenses_csv(sheet_csv()).unwrap();
    store.append(&csv_expenses).unwrap();

    let summary = summarize(&store.load().unwrap(), 5);
    assert_eq!(summary.count, 5);
    assert_eq!(summary.category_totals["Groceries"], 54.25 + 42.50);
}
