//! LLM Client: the single point of entry for inference backend calls.
//!
//! ARCHITECTURAL RULE: No other module may call the Ollama API directly.
//! Handlers reach the backend through `AppState.inference`, an `Arc<dyn InferenceBackend>`.
//!
//! Calls are single-shot and non-streaming. There is no retry: a failed call
//! fails the request that made it.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// The subset of Ollama's `/api/generate` reply we read.
/// Every field is optional: the backend is not a contract.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub response: Option<String>,
    /// Nanoseconds, as reported by Ollama.
    #[serde(default)]
    pub total_duration: Option<u64>,
    #[serde(default)]
    pub eval_count: Option<u32>,
}

impl GenerateResponse {
    /// Response with only the generated text set. Used by stub backends.
    #[cfg(test)]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            response: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.response.as_deref()
    }
}

#[derive(Debug, Deserialize)]
struct OllamaError {
    error: String,
}

/// A text-completion backend. Implement this to swap Ollama for anything else
/// (tests use an in-memory stub) without touching handlers.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Model name sent with every request.
    fn model(&self) -> &str;

    async fn generate(&self, prompt: &str) -> Result<GenerateResponse, LlmError>;
}

/// Ollama `/api/generate` client.
#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(url: String, model: String, timeout: Duration) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url, model })
    }
}

#[async_trait]
impl InferenceBackend for OllamaClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<GenerateResponse, LlmError> {
        let request_body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(&self.url)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Ollama reports failures as {"error": "..."}
            let message = serde_json::from_str::<OllamaError>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let generated: GenerateResponse = response.json().await?;

        debug!(
            model = %self.model,
            total_duration_ns = ?generated.total_duration,
            eval_count = ?generated.eval_count,
            "Ollama generate succeeded"
        );

        Ok(generated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};
    use tokio::net::TcpListener;

    /// Serves `app` on a random loopback port and returns the generate URL.
    async fn spawn_backend(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/api/generate")
    }

    fn client_for(url: String) -> OllamaClient {
        OllamaClient::new(url, "mistral".to_string(), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_generate_request_wire_shape() {
        let body = GenerateRequest {
            model: "mistral",
            prompt: "hello",
            stream: false,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({"model": "mistral", "prompt": "hello", "stream": false})
        );
    }

    #[test]
    fn test_generate_response_tolerates_missing_and_extra_fields() {
        let parsed: GenerateResponse =
            serde_json::from_str(r#"{"done": true, "context": [1, 2, 3]}"#).unwrap();
        assert!(parsed.text().is_none());

        let parsed: GenerateResponse =
            serde_json::from_str(r#"{"response": null, "eval_count": 7}"#).unwrap();
        assert!(parsed.text().is_none());
        assert_eq!(parsed.eval_count, Some(7));
    }

    #[tokio::test]
    async fn test_generate_posts_non_streaming_request() {
        let app = Router::new().route(
            "/api/generate",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["model"], "mistral");
                assert_eq!(body["stream"], false);
                assert_eq!(body["prompt"], "classify me");
                Json(json!({"model": "mistral", "response": "Hardware Issues", "done": true}))
            }),
        );
        let client = client_for(spawn_backend(app).await);

        let generated = client.generate("classify me").await.unwrap();
        assert_eq!(generated.text(), Some("Hardware Issues"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_api_error() {
        let app = Router::new().route(
            "/api/generate",
            post(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({"error": "model 'mistral' not found"})),
                )
            }),
        );
        let client = client_for(spawn_backend(app).await);

        match client.generate("anything").await {
            Err(LlmError::Api { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "model 'mistral' not found");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_refused_connection_is_http_error() {
        // Grab a free port, then release it so nothing is listening there.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{addr}/api/generate"));
        let err = client.generate("anything").await.unwrap_err();
        assert!(matches!(err, LlmError::Http(_)));
    }

    #[tokio::test]
    async fn test_undecodable_body_is_http_error() {
        let app = Router::new().route("/api/generate", post(|| async { "not json" }));
        let client = client_for(spawn_backend(app).await);

        let err = client.generate("anything").await.unwrap_err();
        assert!(matches!(err, LlmError::Http(_)));
    }
}
