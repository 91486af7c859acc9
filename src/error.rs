use reqwest::StatusCode;
use thiserror::Error;

/// Failures the translation pipeline can surface to callers.
///
/// An upstream call that succeeds but yields no usable text is NOT an error;
/// the orchestrator handles that case with branch-specific fallbacks.
#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("no text provided")]
    EmptyInput,

    #[error("rate limited by {endpoint}: {detail}")]
    RateLimited { endpoint: String, detail: String },

    #[error("{endpoint} returned status {status}: {detail}")]
    UpstreamStatus {
        endpoint: String,
        status: StatusCode,
        detail: String,
    },

    #[error("transport error calling {endpoint}: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

impl TranslateError {
    /// Only rate-limit failures are eligible for retry.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, TranslateError::RateLimited { .. })
    }
}

pub type Result<T> = std::result::Result<T, TranslateError>;
