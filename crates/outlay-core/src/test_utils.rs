//! Test utilities for outlay-core
//!
//! Provides a mock Ollama server so integration tests can exercise the
//! real HTTP backend without a running model.

use axum::{
    extract::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::sync::oneshot;

/// Mock Ollama server for testing and development
pub struct MockOllamaServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockOllamaServer {
    /// Start the mock server on an available port
    pub async fn start() -> Self {
        let app = Router::new()
            .route("/api/tags", get(handle_tags))
            .route("/api/generate", post(handle_generate));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .unwrap();
        });

        Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Get the base URL for this mock server
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stop the mock server
    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockOllamaServer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Ollama tags endpoint response (health check)
async fn handle_tags() -> Json<TagsResponse> {
    Json(TagsResponse {
        models: vec![ModelInfo {
            name: "llama3.2-vision:latest".to_string(),
            modified_at: "2024-01-01T00:00:00Z".to_string(),
            size: 7_000_000_000,
        }],
    })
}

/// Ollama generate endpoint
///
/// Returns a canned receipt payload wrapped in prose, so callers also
/// exercise the JSON-extraction path. Requesting the model "no-output"
/// yields a response with no JSON at all, for failure-path tests.
async fn handle_generate(Json(request): Json<GenerateRequest>) -> Json<GenerateResponse> {
    let response = if request.model == "no-output" {
        "I was unable to read anything from this image.".to_string()
    } else {
        "Here is the extracted expense:\n\
         {\"date\": \"2024-03-09\", \"amount\": 23.75, \"vendor\": \"Corner Bistro\", \
         \"category\": \"Food\"}"
            .to_string()
    };

    Json(GenerateResponse { response })
}

#[derive(Debug, Deserialize)]
struct GenerateRequest {
    model: String,
    #[serde(default)]
    #[allow(dead_code)]
    prompt: String,
    #[serde(default)]
    #[allow(dead_code)]
    images: Vec<String>,
    #[serde(default)]
    #[allow(dead_code)]
    stream: bool,
}

#[derive(Debug, Serialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Debug, Serialize)]
struct TagsResponse {
    models: Vec<ModelInfo>,
}

#[derive(Debug, Serialize)]
struct ModelInfo {
    name: String,
    modified_at: String,
    size: u64,
}
