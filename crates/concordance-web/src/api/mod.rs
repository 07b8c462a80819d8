mod health;
mod sentences;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/sentences", get(sentences::missing_word))
        .route("/sentences/", get(sentences::missing_word))
        .route("/sentences/{word}", get(sentences::get_sentences))
        .route("/batch-sentences", post(sentences::batch_sentences))
        .fallback(not_found)
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub(crate) fn error_response(
    status: StatusCode,
    message: impl Into<String>,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    error_response(StatusCode::NOT_FOUND, "Endpoint not found")
}

/// Panic fallback: a generic 500 body, no internal detail.
pub fn handle_panic(_err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
}
