use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use anuvaad_backend::config::Config;
use anuvaad_backend::routes;
use anuvaad_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "anuvaad_backend=debug,tower_http=debug".to_string()),
        )
        .init();

    let config = load_config();
    if config.inference_config.api_key.is_empty() {
        warn!("HUGGINGFACE_API_KEY is not set; upstream calls will be unauthorized");
    }

    let app_state = AppState::new(config.clone());

    let app = Router::new()
        .merge(routes::create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let addr: SocketAddr = format!(
        "{}:{}",
        config.system_config.host, config.system_config.port
    )
    .parse()?;
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Configuration lookup: CONFIG_PATH, then conf.yaml, then built-in defaults.
/// The API key is picked up from the environment in every case.
fn load_config() -> Config {
    let paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.yaml".to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    for path in &paths {
        match Config::load(path) {
            Ok(config) => {
                info!("Loaded configuration from {}", path);
                return config;
            }
            Err(e) => {
                tracing::debug!("Failed to load config from {}: {}", path, e);
            }
        }
    }

    info!("No config file found; using built-in defaults");
    Config::from_env()
}
