//! Store/backend status command

use anyhow::{Context, Result};
use outlay_core::extract::VisionBackend;
use outlay_core::{ExpenseStore, ExtractorClient, SqliteStore};

/// Show the store location, record count, and extraction backend health
pub async fn cmd_status(store: &ExpenseStore<SqliteStore>) -> Result<()> {
    let count = store.load().context("Failed to load expenses")?.len();

    println!("\n📊 Outlay status");
    println!("{}", "─".repeat(46));
    println!("  Store:    {}", store.kv().path());
    println!("  Expenses: {}", count);

    match ExtractorClient::from_env() {
        Some(client) => {
            let healthy = client.health_check().await;
            println!("  Backend:  {} @ {}", client.model(), client.host());
            println!(
                "  Health:   {}",
                if healthy { "✅ reachable" } else { "❌ unreachable" }
            );
        }
        None => {
            println!("  Backend:  not configured (set OLLAMA_HOST to enable 'outlay scan')");
        }
    }

    println!();
    Ok(())
}
