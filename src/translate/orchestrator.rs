use std::time::Duration;
use tracing::{debug, warn};

use super::client::InferenceClient;
use super::interface::{Endpoint, Inference, Translation};
use super::retry::{RetryPolicy, RetryingClient};
use super::script::{classify, ScriptLabel};
use crate::config::InferenceConfig;
use crate::error::{Result, TranslateError};

const MODE_HINDI_TO_ENGLISH: &str = "Hindi → English";
const MODE_ENGLISH_TO_HINDI: &str = "English → Hindi";
const MODE_ROMAN_HINDI: &str = "Roman Hindi → English (via transliteration)";

/// Language tag the transliteration model expects in front of its input.
const TRANSLITERATE_PREFIX: &str = "<hi>";

/// The three fixed remote models, resolved once at startup.
pub struct Endpoints {
    pub roman_to_devanagari: Endpoint,
    pub english_to_hindi: Endpoint,
    pub hindi_to_english: Endpoint,
}

impl Endpoints {
    pub fn from_config(config: &InferenceConfig) -> Self {
        Self {
            roman_to_devanagari: Endpoint::new(
                "roman-to-devanagari",
                config.roman_to_devanagari_url.clone(),
            ),
            english_to_hindi: Endpoint::new("english-to-hindi", config.english_to_hindi_url.clone()),
            hindi_to_english: Endpoint::new("hindi-to-english", config.hindi_to_english_url.clone()),
        }
    }
}

/// Routes classified input through the right pipeline and assembles the
/// final result plus a mode label tracing the path taken.
///
/// The pipeline is sequential per request: classify, then at most one
/// transliteration call, then at most one translation call.
pub struct Translator<I> {
    client: RetryingClient<I>,
    endpoints: Endpoints,
    max_input_chars: usize,
}

impl Translator<InferenceClient> {
    pub fn from_config(config: &InferenceConfig) -> Self {
        Self::new(
            InferenceClient::new(config.api_key.clone()),
            RetryPolicy {
                max_retries: config.max_retries,
                initial_delay: Duration::from_millis(config.initial_delay_ms),
            },
            Endpoints::from_config(config),
            config.max_input_chars,
        )
    }
}

impl<I: Inference> Translator<I> {
    pub fn new(
        backend: I,
        policy: RetryPolicy,
        endpoints: Endpoints,
        max_input_chars: usize,
    ) -> Self {
        Self {
            client: RetryingClient::new(backend, policy),
            endpoints,
            max_input_chars,
        }
    }

    pub async fn translate(&self, raw_text: &str) -> Result<Translation> {
        if raw_text.trim().is_empty() {
            return Err(TranslateError::EmptyInput);
        }

        // Truncated once here, never mid-pipeline.
        let text = truncate_chars(raw_text, self.max_input_chars);
        let label = classify(&text);
        debug!("Classified input as {:?}", label);

        match label {
            ScriptLabel::Devanagari => {
                let result = self
                    .client
                    .infer_with_retry(&self.endpoints.hindi_to_english, &text)
                    .await?;
                Ok(Translation {
                    result,
                    mode: MODE_HINDI_TO_ENGLISH.to_string(),
                })
            }
            ScriptLabel::RomanizedHindi => self.translate_roman_hindi(&text).await,
            ScriptLabel::Other => {
                let result = self
                    .client
                    .infer_with_retry(&self.endpoints.english_to_hindi, &text)
                    .await?;
                Ok(Translation {
                    result,
                    mode: MODE_ENGLISH_TO_HINDI.to_string(),
                })
            }
        }
    }

    async fn translate_roman_hindi(&self, text: &str) -> Result<Translation> {
        let devanagari = self.transliterate(text).await;

        if !devanagari.trim().is_empty() {
            let translated = self
                .client
                .infer_with_retry(&self.endpoints.hindi_to_english, &devanagari)
                .await?;
            // An empty translation of a good transliteration: the Devanagari
            // text itself beats returning nothing.
            let result = if translated.trim().is_empty() {
                devanagari
            } else {
                translated
            };
            return Ok(Translation {
                result,
                mode: MODE_ROMAN_HINDI.to_string(),
            });
        }

        // Transliteration produced nothing. Best effort: translate the
        // original text directly; a failure here is terminal.
        warn!("Transliteration empty; trying direct Hindi → English on the original text");
        let result = self
            .client
            .infer_with_retry(&self.endpoints.hindi_to_english, text)
            .await?;
        Ok(Translation {
            result,
            mode: format!("{} (fallback)", MODE_ROMAN_HINDI),
        })
    }

    /// Transliteration failures are swallowed into the empty-string case so
    /// the caller can apply its fallback policy.
    async fn transliterate(&self, text: &str) -> String {
        let inputs = format!("{} {}", TRANSLITERATE_PREFIX, text);
        match self
            .client
            .infer_with_retry(&self.endpoints.roman_to_devanagari, &inputs)
            .await
        {
            Ok(devanagari) => devanagari,
            Err(err) => {
                warn!("Transliteration failed: {}", err);
                String::new()
            }
        }
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    struct FakeBackend {
        responses: Mutex<VecDeque<Result<String>>>,
        calls: Mutex<Vec<(String, String)>>,
    }

    impl FakeBackend {
        fn new(responses: Vec<Result<String>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<(String, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Inference for &FakeBackend {
        async fn infer(&self, endpoint: &Endpoint, inputs: &str) -> Result<String> {
            self.calls
                .lock()
                .unwrap()
                .push((endpoint.name.to_string(), inputs.to_string()));
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("backend called more times than scripted")
        }
    }

    fn translator(backend: &FakeBackend) -> Translator<&FakeBackend> {
        Translator::new(
            backend,
            RetryPolicy {
                max_retries: 0,
                initial_delay: Duration::from_millis(1),
            },
            Endpoints::from_config(&crate::config::InferenceConfig::default()),
            2000,
        )
    }

    fn server_error() -> TranslateError {
        TranslateError::UpstreamStatus {
            endpoint: "test".to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: "boom".to_string(),
        }
    }

    #[tokio::test]
    async fn devanagari_input_translates_hindi_to_english_once() {
        let backend = FakeBackend::new(vec![Ok("hello".to_string())]);
        let translation = translator(&backend).translate("नमस्ते").await.unwrap();

        assert_eq!(translation.result, "hello");
        assert_eq!(translation.mode, "Hindi → English");
        assert_eq!(
            backend.calls(),
            vec![("hindi-to-english".to_string(), "नमस्ते".to_string())]
        );
    }

    #[tokio::test]
    async fn english_input_translates_english_to_hindi_once() {
        let backend = FakeBackend::new(vec![Ok("नमस्ते दुनिया".to_string())]);
        let translation = translator(&backend).translate("hello world").await.unwrap();

        assert_eq!(translation.result, "नमस्ते दुनिया");
        assert_eq!(translation.mode, "English → Hindi");
        assert_eq!(
            backend.calls(),
            vec![("english-to-hindi".to_string(), "hello world".to_string())]
        );
    }

    #[tokio::test]
    async fn roman_hindi_transliterates_then_translates() {
        let backend = FakeBackend::new(vec![
            Ok("मेरा नाम क्या है".to_string()),
            Ok("what is my name".to_string()),
        ]);
        let translation = translator(&backend)
            .translate("mera naam kya hai")
            .await
            .unwrap();

        assert_eq!(translation.result, "what is my name");
        assert!(translation.mode.starts_with("Roman Hindi → English"));
        assert_eq!(
            backend.calls(),
            vec![
                (
                    "roman-to-devanagari".to_string(),
                    "<hi> mera naam kya hai".to_string()
                ),
                (
                    "hindi-to-english".to_string(),
                    "मेरा नाम क्या है".to_string()
                ),
            ]
        );
    }

    #[tokio::test]
    async fn empty_translation_falls_back_to_transliterated_text() {
        let backend = FakeBackend::new(vec![Ok("मेरा नाम".to_string()), Ok(String::new())]);
        let translation = translator(&backend).translate("mera naam").await.unwrap();

        assert_eq!(translation.result, "मेरा नाम");
        assert!(translation.mode.starts_with("Roman Hindi → English"));
    }

    #[tokio::test]
    async fn empty_transliteration_falls_back_to_direct_translation() {
        let backend = FakeBackend::new(vec![Ok(String::new()), Ok("my name".to_string())]);
        let translation = translator(&backend).translate("mera naam").await.unwrap();

        assert_eq!(translation.result, "my name");
        assert!(translation.mode.contains("(fallback)"));
        let calls = backend.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1], ("hindi-to-english".to_string(), "mera naam".to_string()));
    }

    #[tokio::test]
    async fn transliteration_error_is_swallowed_into_fallback() {
        let backend = FakeBackend::new(vec![Err(server_error()), Ok("my name".to_string())]);
        let translation = translator(&backend).translate("mera naam").await.unwrap();

        assert_eq!(translation.result, "my name");
        assert!(translation.mode.contains("(fallback)"));
    }

    #[tokio::test]
    async fn fallback_translation_failure_is_terminal() {
        let backend = FakeBackend::new(vec![Ok(String::new()), Err(server_error())]);
        let err = translator(&backend)
            .translate("mera naam")
            .await
            .unwrap_err();

        assert!(matches!(err, TranslateError::UpstreamStatus { .. }));
    }

    #[tokio::test]
    async fn translation_failure_propagates() {
        let backend = FakeBackend::new(vec![Err(server_error())]);
        let err = translator(&backend).translate("नमस्ते").await.unwrap_err();

        assert!(matches!(err, TranslateError::UpstreamStatus { .. }));
    }

    #[tokio::test]
    async fn blank_input_fails_without_any_calls() {
        let backend = FakeBackend::new(vec![]);
        let err = translator(&backend).translate("   ").await.unwrap_err();

        assert!(matches!(err, TranslateError::EmptyInput));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn long_input_is_truncated_once_at_entry() {
        let backend = FakeBackend::new(vec![Ok("ठीक".to_string())]);
        let long = "a".repeat(3000);
        translator(&backend).translate(&long).await.unwrap();

        let calls = backend.calls();
        assert_eq!(calls[0].0, "english-to-hindi");
        assert_eq!(calls[0].1.chars().count(), 2000);
    }
}
