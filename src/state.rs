use std::sync::Arc;

use crate::config::Config;
use crate::translate::client::InferenceClient;
use crate::translate::Translator;

/// Shared application state. Everything here is immutable after startup;
/// per-request values live on the request path only.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub translator: Arc<Translator<InferenceClient>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let translator = Arc::new(Translator::from_config(&config.inference_config));
        Self { config, translator }
    }
}
