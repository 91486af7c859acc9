use std::time::Duration;
use tracing::warn;

use super::interface::{Endpoint, Inference};
use crate::error::Result;

/// Retry budget for rate-limited inference calls.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(1000),
        }
    }
}

/// Wraps an [`Inference`] backend with bounded exponential-backoff retry.
///
/// Only rate-limit failures (HTTP 429) are retried; every other failure
/// propagates immediately. The delay doubles after each rate-limited attempt.
/// All outbound translation and transliteration calls go through this.
pub struct RetryingClient<I> {
    inner: I,
    policy: RetryPolicy,
}

impl<I: Inference> RetryingClient<I> {
    pub fn new(inner: I, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    pub async fn infer_with_retry(&self, endpoint: &Endpoint, inputs: &str) -> Result<String> {
        let mut budget = self.policy.max_retries;
        let mut delay = self.policy.initial_delay;

        loop {
            match self.inner.infer(endpoint, inputs).await {
                Ok(text) => return Ok(text),
                Err(err) if err.is_rate_limit() && budget > 0 => {
                    warn!(
                        "{} rate limited, retrying in {:?} ({} retries left)",
                        endpoint.name, delay, budget
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                    budget -= 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
