use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub inference_config: InferenceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Bearer credential for the inference router. Normally injected from
    /// the HUGGINGFACE_API_KEY environment variable at load time.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_roman_to_devanagari_url")]
    pub roman_to_devanagari_url: String,
    #[serde(default = "default_english_to_hindi_url")]
    pub english_to_hindi_url: String,
    #[serde(default = "default_hindi_to_english_url")]
    pub hindi_to_english_url: String,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_roman_to_devanagari_url() -> String {
    "https://router.huggingface.co/hf-inference/models/ai4bharat/IndicTrans-v2-Roman-to-Devanagari"
        .to_string()
}

fn default_english_to_hindi_url() -> String {
    "https://router.huggingface.co/hf-inference/models/Helsinki-NLP/opus-mt-en-hi".to_string()
}

fn default_hindi_to_english_url() -> String {
    "https://router.huggingface.co/hf-inference/models/Helsinki-NLP/opus-mt-hi-en".to_string()
}

fn default_max_retries() -> u32 {
    3
}

fn default_initial_delay_ms() -> u64 {
    1000
}

fn default_max_input_chars() -> usize {
    2000
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            roman_to_devanagari_url: default_roman_to_devanagari_url(),
            english_to_hindi_url: default_english_to_hindi_url(),
            hindi_to_english_url: default_hindi_to_english_url(),
            max_retries: default_max_retries(),
            initial_delay_ms: default_initial_delay_ms(),
            max_input_chars: default_max_input_chars(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            system_config: SystemConfig::default(),
            inference_config: InferenceConfig::default(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&content)?;
        config.apply_env();
        Ok(config)
    }

    /// Build a config without a file, from defaults plus the environment.
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    // Credentials come from the process environment exactly once, here.
    // Request-handling code only ever sees the resulting struct.
    fn apply_env(&mut self) {
        if let Ok(key) = std::env::var("HUGGINGFACE_API_KEY") {
            if !key.is_empty() {
                self.inference_config.api_key = key;
            }
        }
    }
}
