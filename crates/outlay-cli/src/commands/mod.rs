//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `expenses` - Manual entry, listing, and clearing
//! - `import` - CSV import command
//! - `receipts` - Receipt scanning command
//! - `reports` - Summary report command
//! - `status` - Store/backend status command

pub mod expenses;
pub mod import;
pub mod receipts;
pub mod reports;
pub mod status;

// Re-export command functions for main.rs
pub use expenses::*;
pub use import::*;
pub use receipts::*;
pub use reports::*;
pub use status::*;

use std::path::Path;

use anyhow::{Context, Result};
use outlay_core::{ExpenseStore, SqliteStore};

/// Open the expense store at the given path
pub fn open_store(path: &Path) -> Result<ExpenseStore<SqliteStore>> {
    let path_str = path
        .to_str()
        .with_context(|| format!("Store path is not valid UTF-8: {}", path.display()))?;
    let kv = SqliteStore::open(path_str)
        .with_context(|| format!("Failed to open store at {}", path.display()))?;
    tracing::debug!("Opened store at {}", path.display());
    Ok(ExpenseStore::new(kv))
}

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}...", &s[..max.saturating_sub(3)])
    }
}
