//! Outlay CLI - Receipt-scanning expense tracker
//!
//! Usage:
//!   outlay import --file CSV  Import expenses from a tracking sheet
//!   outlay scan IMAGE         Extract an expense from a receipt image
//!   outlay summary            Show totals and top spending categories

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Import { file } => {
            let store = commands::open_store(&cli.store)?;
            commands::cmd_import(&store, &file)
        }
        Commands::Scan { image, model } => {
            let store = commands::open_store(&cli.store)?;
            commands::cmd_scan(&store, &image, model.as_deref()).await
        }
        Commands::Add {
            date,
            amount,
            category,
            payee,
            description,
            payment_method,
        } => {
            let store = commands::open_store(&cli.store)?;
            commands::cmd_add(
                &store,
                &date,
                amount,
                &category,
                &payee,
                &description,
                &payment_method,
            )
        }
        Commands::List { limit } => {
            let store = commands::open_store(&cli.store)?;
            commands::cmd_list(&store, limit)
        }
        Commands::Summary { top, json } => {
            let store = commands::open_store(&cli.store)?;
            commands::cmd_summary(&store, top, json)
        }
        Commands::Status => {
            let store = commands::open_store(&cli.store)?;
            commands::cmd_status(&store).await
        }
        Commands::Clear { yes } => {
            let store = commands::open_store(&cli.store)?;
            commands::cmd_clear(&store, yes)
        }
    }
}
