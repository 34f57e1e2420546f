use crate::dtos::IndexResponse;
use axum::Json;

pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse::default())
}
