//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Outlay - Track expenses from receipts and spreadsheets
#[derive(Parser)]
#[command(name = "outlay")]
#[command(about = "Receipt-scanning expense tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Store path
    #[arg(long, default_value = "outlay.db", global = true)]
    pub store: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import expenses from a tracking-sheet CSV export
    Import {
        /// CSV file to import
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Extract one expense from a receipt image
    ///
    /// The image may be a local file, an http(s) URL, or a base64 data URI.
    /// Requires an extraction backend (see OLLAMA_HOST / AI_BACKEND).
    Scan {
        /// Receipt image reference
        image: String,

        /// Vision model to use for this scan (overrides OLLAMA_MODEL)
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Add an expense manually
    Add {
        /// Expense date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Amount spent
        #[arg(long)]
        amount: f64,

        /// Category label (e.g. Food, Transport)
        #[arg(long)]
        category: String,

        /// Who was paid
        #[arg(long, default_value = "")]
        payee: String,

        /// Free-text note
        #[arg(long, default_value = "")]
        description: String,

        /// Payment method (e.g. Card, Cash)
        #[arg(long, default_value = "")]
        payment_method: String,
    },

    /// List stored expenses
    List {
        /// Maximum number of expenses to show
        #[arg(short, long, default_value = "50")]
        limit: usize,
    },

    /// Show spending summary (total, per-category, top categories)
    Summary {
        /// Number of top categories to show
        #[arg(short, long, default_value_t = outlay_core::DEFAULT_TOP_CATEGORIES)]
        top: usize,

        /// Emit the summary as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show store status and extraction backend health
    Status,

    /// Delete all stored expenses
    Clear {
        /// Skip the confirmation requirement
        #[arg(long)]
        yes: bool,
    },
}
