use crate::error::ErrorResponse;
use axum::{http::StatusCode, response::Response};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;

/// Turns a handler panic into a 500 with the standard error envelope.
///
/// The panic payload is only exposed in `details` when `debug` is on.
pub fn catch_panic_layer(
    debug: bool,
) -> CatchPanicLayer<impl Fn(Box<dyn Any + Send + 'static>) -> Response + Clone> {
    CatchPanicLayer::custom(move |payload: Box<dyn Any + Send + 'static>| {
        panic_response(payload, debug)
    })
}

fn panic_response(payload: Box<dyn Any + Send + 'static>, debug: bool) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!(panic = %message, "Request handler panicked");

    ErrorResponse {
        error: "Internal server error".to_string(),
        details: debug.then_some(message),
    }
    .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
}
