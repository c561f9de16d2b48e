//! Receipt scanning command

use anyhow::{anyhow, Context, Result};
use outlay_core::extract::VisionBackend;
use outlay_core::{ExpenseStore, ReceiptExtractor, SqliteStore};

/// Extract one expense from a receipt image and store it
pub async fn cmd_scan(
    store: &ExpenseStore<SqliteStore>,
    image: &str,
    model: Option<&str>,
) -> Result<()> {
    let extractor = ReceiptExtractor::from_env().ok_or_else(|| {
        anyhow!(
            "No extraction backend configured.\n\
             Set OLLAMA_HOST to your Ollama server (and optionally OLLAMA_MODEL \
             to a vision-capable model), or AI_BACKEND=mock for offline testing."
        )
    })?;

    println!(
        "🧾 Scanning {} with {} ({})...",
        image,
        model.unwrap_or_else(|| extractor.client().model()),
        extractor.client().host()
    );

    let expense = extractor.extract_with_model(image, model).await.context(
        "Receipt extraction failed. The model produced no structured output — \
         retry the scan, or enter the expense manually with 'outlay add'",
    )?;

    store
        .append(std::slice::from_ref(&expense))
        .context("Extraction succeeded but saving failed — check that the store file is writable")?;

    println!("✅ Expense recorded");
    println!("   Date:     {}", expense.date);
    println!("   Payee:    {}", expense.payee);
    println!("   Amount:   ${:.2}", expense.amount);
    println!("   Category: {}", expense.category);
    Ok(())
}
