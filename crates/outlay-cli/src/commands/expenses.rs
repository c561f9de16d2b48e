//! Manual entry, listing, and clearing commands

use anyhow::{Context, Result};
use chrono::NaiveDate;
use outlay_core::{Expense, ExpenseStore, SqliteStore};

use super::truncate;

/// Add a manually entered expense
#[allow(clippy::too_many_arguments)]
pub fn cmd_add(
    store: &ExpenseStore<SqliteStore>,
    date: &str,
    amount: f64,
    category: &str,
    payee: &str,
    description: &str,
    payment_method: &str,
) -> Result<()> {
    // Manual entry is the one path where the date is checked up front:
    // the user is right here and can fix the typo.
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .with_context(|| format!("Invalid --date '{}' (use YYYY-MM-DD)", date))?;

    let expense = Expense::new(date, payee, description, amount, category, payment_method);
    store
        .append(std::slice::from_ref(&expense))
        .context("Failed to save expense — check that the store file is writable")?;

    println!("✅ Added {} ${:.2} ({})", expense.date, expense.amount, expense.category);
    Ok(())
}

/// List stored expenses, most recent input last
pub fn cmd_list(store: &ExpenseStore<SqliteStore>, limit: usize) -> Result<()> {
    let expenses = store.load().context("Failed to load expenses")?;

    if expenses.is_empty() {
        println!("No expenses recorded yet. Try 'outlay import' or 'outlay scan'.");
        return Ok(());
    }

    println!("\n💳 Expenses ({} shown of {})", expenses.len().min(limit), expenses.len());
    println!("{}", "─".repeat(78));

    for expense in expenses.iter().take(limit) {
        // Unparsable dates render as an explicit invalid state, never a crash
        let date = if expense.has_valid_date() {
            expense.date.clone()
        } else {
            format!("⚠ {}", truncate(&expense.date, 8))
        };

        println!(
            "  {:<12} {:>9}  {:<16} {:<14} {}",
            date,
            format!("${:.2}", expense.amount),
            truncate(&expense.category, 16),
            truncate(&expense.payee, 14),
            truncate(&expense.description, 20),
        );
    }

    println!();
    Ok(())
}

/// Delete all stored expenses
pub fn cmd_clear(store: &ExpenseStore<SqliteStore>, yes: bool) -> Result<()> {
    let count = store.load().context("Failed to load expenses")?.len();

    if !yes {
        println!(
            "This permanently deletes all {} stored expenses. Re-run with --yes to confirm.",
            count
        );
        return Ok(());
    }

    store
        .clear()
        .context("Failed to clear the store — check that the store file is writable")?;

    println!("🗑️  Cleared {} expenses", count);
    Ok(())
}
