//! Outlay Core Library
//!
//! Shared functionality for the Outlay expense tracker:
//! - Canonical expense record shared by all ingestion paths
//! - Tolerant CSV importer for the tracking-sheet export format
//! - Receipt extraction over pluggable vision backends (Ollama, mock)
//! - Key-value persistence port with SQLite and in-memory implementations
//! - Expense store keyed by a single logical document
//! - Category aggregation for summary reporting

pub mod aggregate;
pub mod csv_import;
pub mod error;
pub mod extract;
pub mod kv;
pub mod models;
pub mod store;

/// Test utilities including mock Ollama server
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use aggregate::{summarize, DEFAULT_TOP_CATEGORIES};
pub use csv_import::parse_expenses_csv;
pub use error::{Error, Result};
pub use extract::{
    ExtractedExpense, ExtractorClient, MockBackend, OllamaBackend, ReceiptExtractor, VisionBackend,
};
pub use kv::{KeyValueStore, MemoryStore, SqliteStore};
pub use models::{CategoryTotal, Expense, SpendingSummary};
pub use store::{ExpenseStore, EXPENSES_KEY};
