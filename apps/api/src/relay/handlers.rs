//! Axum route handlers for the Relay API.

use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::relay::models::{GenerateRequest, GenerateResponse};
use crate::relay::prompt_preview;
use crate::state::AppState;

/// POST /api/generate
///
/// Forwards the prompt to the configured provider (or the mock) and returns its answer verbatim.
/// Any body that does not carry a non-empty string `prompt` is treated as a missing prompt,
/// except an oversized body, which is refused with 413.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            debug!("Rejected generate body: {rejection}");
            return Err(AppError::PayloadTooLarge);
        }
        Err(rejection) => {
            debug!("Rejected generate body: {rejection}");
            GenerateRequest::default()
        }
    };

    let prompt = request
        .prompt
        .filter(|p| !p.is_empty())
        .ok_or(AppError::MissingPrompt)?;

    info!("Request: {}...", prompt_preview(&prompt));

    let answer = state.relay.answer(&prompt).await?;

    Ok(Json(GenerateResponse { answer }))
}

/// Fallback for every unmatched route.
pub async fn handle_not_found() -> AppError {
    AppError::NotFound
}
