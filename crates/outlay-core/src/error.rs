//! Error types for Outlay

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Database pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Receipt extraction failed: {0}")]
    Extraction(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl Error {
    /// The extraction failure reported when the vision backend yields no
    /// usable payload. Callers receive this whole or not at all; a partial
    /// record is never produced.
    pub fn no_structured_output() -> Self {
        Error::Extraction("no structured output produced".to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
