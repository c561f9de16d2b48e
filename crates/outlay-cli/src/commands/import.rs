//! CSV import command

use std::path::Path;

use anyhow::{Context, Result};
use outlay_core::{parse_expenses_csv, ExpenseStore, SqliteStore};

/// Import expenses from a tracking-sheet CSV export
pub fn cmd_import(store: &ExpenseStore<SqliteStore>, file: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;

    println!("📥 Importing expenses from {}...", file.display());

    let expenses = parse_expenses_csv(&raw)
        .with_context(|| format!("Failed to parse CSV: {}", file.display()))?;

    println!("   Found {} expenses", expenses.len());

    store
        .append(&expenses)
        .context("Failed to save imported expenses — check that the store file is writable")?;

    let total = store.load().context("Failed to re-read the store")?.len();

    println!("✅ Import complete!");
    println!("   Collection now holds {} expenses", total);
    Ok(())
}
