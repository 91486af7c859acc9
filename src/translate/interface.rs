use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One of the fixed remote inference models, resolved from config at startup.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub name: &'static str,
    pub url: String,
}

impl Endpoint {
    pub fn new(name: &'static str, url: String) -> Self {
        Self { name, url }
    }
}

/// A single round trip to an inference endpoint.
///
/// `Ok` may carry an empty string when the model returned no usable field;
/// callers must treat that differently from `Err`.
#[async_trait]
pub trait Inference: Send + Sync {
    async fn infer(&self, endpoint: &Endpoint, inputs: &str) -> Result<String>;
}

#[derive(Debug, Deserialize)]
pub struct TranslateApiRequest {
    /// The speech-capture UI posts `prompt`; newer clients post `text`.
    #[serde(alias = "prompt")]
    pub text: Option<String>,
    /// Advisory direction hint from the caller. The classifier is
    /// authoritative; this is only logged when the two disagree.
    #[serde(default)]
    pub direction: Option<String>,
}

/// Final pipeline output. `mode` traces which path produced the result.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Translation {
    pub result: String,
    pub mode: String,
}
