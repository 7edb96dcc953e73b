//! Question endpoint handler.

use crate::api::{ApiError, AppState, AskRequest, AskResponse};
use axum::{extract::State, Json};
use std::sync::Arc;

/// POST /v1/ask - Answer one question and return the extended history.
pub async fn handle(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, ApiError> {
    if request.question.trim().is_empty() {
        return Err(ApiError::bad_request("question must not be empty"));
    }

    let answer = state.router.answer(&request.question).await;

    let mut history = request.history;
    history.push_user(request.question);
    history.push_assistant(answer.text.clone());

    Ok(Json(AskResponse {
        answer: answer.text,
        source: answer.source,
        history,
    }))
}
