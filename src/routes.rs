use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::TranslateError;
use crate::state::AppState;
use crate::translate::TranslateApiRequest;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/translate", post(translate))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn translate(
    State(state): State<AppState>,
    Json(payload): Json<TranslateApiRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let request_id = Uuid::new_v4();
    let text = payload.text.unwrap_or_default();

    // The classifier is authoritative; a caller hint is advisory only.
    if let Some(hint) = &payload.direction {
        debug!("[{}] Caller sent direction hint {:?}; ignoring", request_id, hint);
    }

    info!("[{}] Translate request ({} chars)", request_id, text.chars().count());

    match state.translator.translate(&text).await {
        Ok(translation) => {
            info!("[{}] Completed via {}", request_id, translation.mode);
            Ok(Json(json!({
                "result": translation.result,
                "meta": { "mode": translation.mode },
            })))
        }
        Err(err) => Err(error_response(err)),
    }
}

fn error_response(err: TranslateError) -> (StatusCode, Json<Value>) {
    match &err {
        TranslateError::EmptyInput => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "No text provided" })),
        ),
        // Only reached after the retry budget is exhausted
        TranslateError::RateLimited { .. } => (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({
                "error": "Upstream rate limit exceeded",
                "details": err.to_string(),
            })),
        ),
        TranslateError::UpstreamStatus { .. } | TranslateError::Transport { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Translation failed",
                "details": err.to_string(),
            })),
        ),
    }
}
