use crate::dtos::GreetingResponse;
use axum::{extract::Path, Json};

/// `name` arrives percent-decoded and is echoed without validation.
pub async fn hello(Path(name): Path<String>) -> Json<GreetingResponse> {
    Json(GreetingResponse::for_name(&name))
}
