//! Receipt extraction over pluggable vision backends
//!
//! This module provides a backend-agnostic interface for turning a receipt
//! image into one canonical expense record.
//!
//! # Architecture
//!
//! - `VisionBackend` trait: the external extraction capability — one
//!   structured-output call plus a health probe
//! - `ExtractorClient` enum: concrete wrapper providing Clone +
//!   compile-time dispatch
//! - `ReceiptExtractor`: resolves an image reference, invokes the backend
//!   once, and maps the payload into an [`Expense`]
//!
//! # Configuration
//!
//! Environment variables:
//! - `AI_BACKEND`: Backend to use (ollama, mock). Default: ollama
//! - `OLLAMA_HOST`: Ollama server URL (required for ollama backend)
//! - `OLLAMA_MODEL`: Vision model name (default: llama3.2-vision)

mod mock;
mod ollama;
pub mod parsing;
pub mod types;

pub use mock::MockBackend;
pub use ollama::OllamaBackend;
pub use types::ExtractedExpense;

use async_trait::async_trait;
use base64::Engine;

use crate::error::{Error, Result};
use crate::models::Expense;

/// Trait defining the interface to the external extraction capability
///
/// Backends should be Send + Sync to allow use across async tasks.
#[async_trait]
pub trait VisionBackend: Send + Sync {
    /// Extract one expense payload from a receipt image
    ///
    /// Single request/response: no streaming, no partial results, no
    /// automatic retry (retry policy, if any, belongs to the caller).
    async fn extract_expense(
        &self,
        image_data: &[u8],
        model_override: Option<&str>,
    ) -> Result<ExtractedExpense>;

    /// Check if the backend is available
    async fn health_check(&self) -> bool;

    /// Get the model name (for display)
    fn model(&self) -> &str;

    /// Get the host URL (for logging)
    fn host(&self) -> &str;
}

/// Concrete extraction client enum
///
/// Provides Clone and compile-time dispatch without Box<dyn> overhead.
#[derive(Clone)]
pub enum ExtractorClient {
    /// Ollama backend (HTTP API)
    Ollama(OllamaBackend),
    /// Mock backend for testing
    Mock(MockBackend),
}

impl ExtractorClient {
    /// Create an extraction client from environment variables
    ///
    /// Checks `AI_BACKEND` to determine which backend to use:
    /// - `ollama` (default): Uses OLLAMA_HOST and OLLAMA_MODEL
    /// - `mock`: Creates a mock backend for testing
    ///
    /// Returns None if the required environment variables are not set.
    pub fn from_env() -> Option<Self> {
        let backend = std::env::var("AI_BACKEND").unwrap_or_else(|_| "ollama".to_string());

        match backend.to_lowercase().as_str() {
            "ollama" => OllamaBackend::from_env().map(ExtractorClient::Ollama),
            "mock" => Some(ExtractorClient::Mock(MockBackend::new())),
            _ => {
                tracing::warn!(backend = %backend, "Unknown AI_BACKEND, falling back to ollama");
                OllamaBackend::from_env().map(ExtractorClient::Ollama)
            }
        }
    }

    /// Create an Ollama backend directly
    pub fn ollama(host: &str, model: &str) -> Self {
        ExtractorClient::Ollama(OllamaBackend::new(host, model))
    }

    /// Create a mock backend for testing
    pub fn mock() -> Self {
        ExtractorClient::Mock(MockBackend::new())
    }

    /// Create a new instance with a different model
    pub fn with_model(&self, model: &str) -> Self {
        match self {
            ExtractorClient::Ollama(b) => ExtractorClient::Ollama(b.with_model(model)),
            ExtractorClient::Mock(b) => ExtractorClient::Mock(b.with_model(model)),
        }
    }
}

// Implement VisionBackend for ExtractorClient by delegating to the inner backend
#[async_trait]
impl VisionBackend for ExtractorClient {
    async fn extract_expense(
        &self,
        image_data: &[u8],
        model_override: Option<&str>,
    ) -> Result<ExtractedExpense> {
        match self {
            ExtractorClient::Ollama(b) => b.extract_expense(image_data, model_override).await,
            ExtractorClient::Mock(b) => b.extract_expense(image_data, model_override).await,
        }
    }

    async fn health_check(&self) -> bool {
        match self {
            ExtractorClient::Ollama(b) => b.health_check().await,
            ExtractorClient::Mock(b) => b.health_check().await,
        }
    }

    fn model(&self) -> &str {
        match self {
            ExtractorClient::Ollama(b) => b.model(),
            ExtractorClient::Mock(b) => b.model(),
        }
    }

    fn host(&self) -> &str {
        match self {
            ExtractorClient::Ollama(b) => b.host(),
            ExtractorClient::Mock(b) => b.host(),
        }
    }
}

/// Turns receipt image references into canonical expense records
pub struct ReceiptExtractor {
    client: ExtractorClient,
}

impl ReceiptExtractor {
    pub fn new(client: ExtractorClient) -> Self {
        Self { client }
    }

    /// Create from environment variables (see [`ExtractorClient::from_env`])
    pub fn from_env() -> Option<Self> {
        ExtractorClient::from_env().map(Self::new)
    }

    /// Access the underlying client (for health/identity display)
    pub fn client(&self) -> &ExtractorClient {
        &self.client
    }

    /// Extract one expense from a receipt image reference
    ///
    /// The reference may be an `http(s)` URL, a base64 `data:` URI, or a
    /// local file path. The payload maps `vendor` to `payee`; this path
    /// produces no description or payment method, so both stay empty. The
    /// extracted date string is passed through unvalidated — display code
    /// must treat it as potentially invalid.
    pub async fn extract(&self, image_ref: &str) -> Result<Expense> {
        self.extract_with_model(image_ref, None).await
    }

    /// Extract with a per-call model override
    pub async fn extract_with_model(
        &self,
        image_ref: &str,
        model_override: Option<&str>,
    ) -> Result<Expense> {
        let image_data = load_image_reference(image_ref).await?;
        let payload = self
            .client
            .extract_expense(&image_data, model_override)
            .await?;

        Ok(Expense {
            date: payload.date,
            payee: payload.vendor,
            description: String::new(),
            amount: payload.amount,
            category: payload.category,
            payment_method: String::new(),
        })
    }
}

/// Resolve an image reference to raw bytes
async fn load_image_reference(image_ref: &str) -> Result<Vec<u8>> {
    if image_ref.starts_with("http://") || image_ref.starts_with("https://") {
        let response = reqwest::get(image_ref).await?;
        if !response.status().is_success() {
            return Err(Error::Http(response.error_for_status().unwrap_err()));
        }
        return Ok(response.bytes().await?.to_vec());
    }

    if let Some(rest) = image_ref.strip_prefix("data:") {
        let encoded = rest
            .split_once(";base64,")
            .map(|(_, data)| data)
            .ok_or_else(|| Error::InvalidData("Unsupported data URI (expected base64)".into()))?;
        return base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .map_err(|e| Error::InvalidData(format!("Invalid base64 in data URI: {}", e)));
    }

    Ok(std::fs::read(image_ref)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_mock_identity() {
        let client = ExtractorClient::mock();
        assert_eq!(client.model(), "mock");
        assert_eq!(client.host(), "mock://localhost");
    }

    #[tokio::test]
    async fn test_extract_maps_vendor_to_payee() {
        let extractor = ReceiptExtractor::new(ExtractorClient::mock());
        // Tiny valid data URI so no filesystem or network is touched
        let expense = extractor.extract("data:image/png;base64,aGk=").await.unwrap();

        assert_eq!(expense.payee, "Mock Mart");
        assert_eq!(expense.date, "2024-01-15");
        assert_eq!(expense.amount, 42.50);
        assert_eq!(expense.category, "Groceries");
        // This path never produces these fields
        assert_eq!(expense.description, "");
        assert_eq!(expense.payment_method, "");
    }

    #[tokio::test]
    async fn test_failed_extraction_produces_no_record() {
        let extractor = ReceiptExtractor::new(ExtractorClient::Mock(MockBackend::failing()));
        let err = extractor
            .extract("data:image/png;base64,aGk=")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("no structured output produced"));
    }

    #[tokio::test]
    async fn test_data_uri_decoding() {
        let bytes = load_image_reference("data:image/png;base64,aGVsbG8=")
            .await
            .unwrap();
        assert_eq!(bytes, b"hello");
    }

    #[tokio::test]
    async fn test_malformed_data_uri() {
        assert!(load_image_reference("data:image/png,plaintext").await.is_err());
        assert!(load_image_reference("data:image/png;base64,???").await.is_err());
    }

    #[tokio::test]
    async fn test_missing_file_reference() {
        let err = load_image_reference("/no/such/receipt.jpg").await.unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
