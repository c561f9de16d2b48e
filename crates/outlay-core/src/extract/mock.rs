//! Mock backend for testing
//!
//! Deterministic responses for the extraction operation, so tests and
//! development work without a running vision model.

use async_trait::async_trait;

use crate::error::{Error, Result};

use super::types::ExtractedExpense;
use super::VisionBackend;

/// Mock vision backend for testing
#[derive(Clone, Default)]
pub struct MockBackend {
    /// Whether health_check should return true
    pub healthy: bool,
    /// Whether extraction should fail with no structured output
    pub fail_extraction: bool,
}

impl MockBackend {
    /// Create a new mock backend (healthy by default)
    pub fn new() -> Self {
        Self {
            healthy: true,
            fail_extraction: false,
        }
    }

    /// Create an unhealthy mock backend
    pub fn unhealthy() -> Self {
        Self {
            healthy: false,
            fail_extraction: false,
        }
    }

    /// Create a mock backend whose extraction always fails
    ///
    /// Simulates the capability producing nothing usable, for asserting
    /// the all-or-nothing error contract.
    pub fn failing() -> Self {
        Self {
            healthy: true,
            fail_extraction: true,
        }
    }

    /// Create a new instance with a different model (no-op for mock)
    pub fn with_model(&self, _model: &str) -> Self {
        self.clone()
    }
}

#[async_trait]
impl VisionBackend for MockBackend {
    async fn extract_expense(
        &self,
        _image_data: &[u8],
        _model_override: Option<&str>,
    ) -> Result<ExtractedExpense> {
        if self.fail_extraction {
            return Err(Error::no_structured_output());
        }

        Ok(ExtractedExpense {
            date: "2024-01-15".to_string(),
            amount: 42.50,
            vendor: "Mock Mart".to_string(),
            category: "Groceries".to_string(),
        })
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }

    fn model(&self) -> &str {
        "mock"
    }

    fn host(&self) -> &str {
        "mock://localhost"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_extract() {
        let mock = MockBackend::new();
        let payload = mock.extract_expense(b"fake image", None).await.unwrap();
        assert_eq!(payload.vendor, "Mock Mart");
        assert_eq!(payload.amount, 42.50);
    }

    #[tokio::test]
    async fn test_failing_mock() {
        let mock = MockBackend::failing();
        let err = mock.extract_expense(b"fake image", None).await.unwrap_err();
        assert!(err.to_string().contains("no structured output produced"));
    }

    #[tokio::test]
    async fn test_mock_health_check() {
        assert!(MockBackend::new().health_check().await);
        assert!(!MockBackend::unhealthy().health_check().await);
    }
}
