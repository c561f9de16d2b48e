//! Summary report command

use anyhow::{Context, Result};
use outlay_core::{summarize, ExpenseStore, SqliteStore};

/// Show total spend, per-category totals, and the top categories
pub fn cmd_summary(store: &ExpenseStore<SqliteStore>, top: usize, json: bool) -> Result<()> {
    let expenses = store.load().context("Failed to load expenses")?;
    let summary = summarize(&expenses, top);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("\n💰 Spending summary");
    println!("{}", "─".repeat(46));
    println!("  Total:      ${:.2}", summary.total);
    println!("  Expenses:   {}", summary.count);
    println!("  Categories: {}", summary.category_totals.len());

    if summary.top_categories.is_empty() {
        println!("\nNothing to rank yet.");
        return Ok(());
    }

    println!("\n🏆 Top {} categories", summary.top_categories.len());
    for (rank, entry) in summary.top_categories.iter().enumerate() {
        let label = if entry.category.is_empty() {
            "(uncategorized)"
        } else {
            entry.category.as_str()
        };
        let share = if summary.total > 0.0 {
            entry.total / summary.total * 100.0
        } else {
            0.0
        };
        println!(
            "  {}. {:<20} ${:>9.2}  ({:.0}%)",
            rank + 1,
            label,
            entry.total,
            share
        );
    }

    println!();
    Ok(())
}
