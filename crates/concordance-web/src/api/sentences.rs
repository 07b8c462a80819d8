use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use concordance_core::{AggregateResult, BatchOutput, SourceId};
use serde::{Deserialize, Serialize};

use super::{error_response, ErrorResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SentencesQuery {
    limit: Option<String>,
}

/// Response for `GET /sentences/{word}`: merged sentences across all
/// sources, without the per-source image or display numbering the batch
/// entries carry.
#[derive(Debug, Serialize)]
pub struct SentencesResponse {
    pub word: String,
    pub sentences: Vec<String>,
    pub sources: Vec<SourceId>,
    pub total_sentences: usize,
    pub returned_sentences: usize,
    pub limit: usize,
}

impl From<AggregateResult> for SentencesResponse {
    fn from(r: AggregateResult) -> Self {
        Self {
            word: r.word.into_string(),
            sentences: r.sentences,
            sources: r.sources,
            total_sentences: r.total_sentences,
            returned_sentences: r.returned_sentences,
            limit: r.limit,
        }
    }
}

pub async fn get_sentences(
    State(state): State<AppState>,
    Path(word): Path<String>,
    Query(query): Query<SentencesQuery>,
) -> Result<Json<SentencesResponse>, (StatusCode, Json<ErrorResponse>)> {
    // An unparseable limit falls back to the default instead of erroring.
    let limit = query.limit.as_deref().and_then(|v| v.parse::<i64>().ok());

    let result = state
        .service
        .lookup(&word, limit)
        .await
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, e.to_string()))?;

    Ok(Json(SentencesResponse::from(result)))
}

/// `GET /sentences` and `GET /sentences/` — the word segment is missing.
pub async fn missing_word() -> (StatusCode, Json<ErrorResponse>) {
    error_response(StatusCode::BAD_REQUEST, "Word parameter is required")
}

#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    words: Vec<String>,
}

pub async fn batch_sentences(
    State(state): State<AppState>,
    Json(request): Json<BatchRequest>,
) -> Result<Json<BatchOutput>, (StatusCode, Json<ErrorResponse>)> {
    let output = state
        .service
        .batch(&request.words)
        .await
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, e.to_string()))?;

    Ok(Json(output))
}
