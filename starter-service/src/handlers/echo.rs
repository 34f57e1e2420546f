use crate::dtos::EchoResponse;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;
use service_core::error::AppError;

/// Returns the request body untouched under `received`.
///
/// A body that is missing, mislabelled or not JSON is answered with the
/// error envelope (415 without a JSON content type, 400 otherwise).
pub async fn echo(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<EchoResponse>, AppError> {
    let Json(received) = payload.map_err(|rejection| {
        tracing::warn!(reason = %rejection.body_text(), "Rejected echo payload");
        AppError::from(rejection)
    })?;

    Ok(Json(EchoResponse {
        received,
        timestamp: state.clock.timestamp(),
    }))
}
