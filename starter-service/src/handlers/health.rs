use crate::dtos::{HealthResponse, HEALTHY};
use crate::AppState;
use axum::{extract::State, Json};

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTHY,
        timestamp: state.clock.timestamp(),
    })
}
