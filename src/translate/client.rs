use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tracing::{debug, error};

use super::interface::{Endpoint, Inference};
use crate::error::{Result, TranslateError};

/// HTTP client for the Hugging Face inference router.
///
/// One POST per call; the `wait_for_model` option asks the router to hold the
/// request through a cold start instead of failing immediately.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    client: Client,
    api_key: String,
}

impl InferenceClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl Inference for InferenceClient {
    async fn infer(&self, endpoint: &Endpoint, inputs: &str) -> Result<String> {
        let body = json!({
            "inputs": inputs,
            "options": { "wait_for_model": true },
        });

        debug!("Calling {} ({})", endpoint.name, endpoint.url);
        let response = self
            .client
            .post(&endpoint.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|source| TranslateError::Transport {
                endpoint: endpoint.name.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!("{} failed with {}: {}", endpoint.name, status, detail);
            if status == StatusCode::TOO_MANY_REQUESTS {
                return Err(TranslateError::RateLimited {
                    endpoint: endpoint.name.to_string(),
                    detail,
                });
            }
            return Err(TranslateError::UpstreamStatus {
                endpoint: endpoint.name.to_string(),
                status,
                detail,
            });
        }

        let data: Value = response
            .json()
            .await
            .map_err(|source| TranslateError::Transport {
                endpoint: endpoint.name.to_string(),
                source,
            })?;

        Ok(extract_text(&data))
    }
}

/// Pull the best available string out of an inference response.
///
/// Models differ in shape: translation models return `translation_text`,
/// the transliterator returns `generated_text`, and some pipelines return a
/// bare array of strings. Nothing usable yields an empty string, which is a
/// successful outcome, not an error.
fn extract_text(data: &Value) -> String {
    let Some(first) = data.get(0) else {
        return String::new();
    };
    if let Some(text) = first.get("translation_text").and_then(Value::as_str) {
        return text.to_string();
    }
    if let Some(text) = first.get("generated_text").and_then(Value::as_str) {
        return text.to_string();
    }
    if let Some(text) = first.as_str() {
        return text.to_string();
    }
    String::new()
}
