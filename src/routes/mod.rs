use axum::http::StatusCode;
use axum::Json;

use crate::models::Ack;

pub mod contact;
pub mod estimate;
pub mod health;

// Common rejection shape: every error leaves as an Ack with success=false.
pub fn bad_request(message: impl Into<String>) -> (StatusCode, Json<Ack>) {
    (
        StatusCode::BAD_REQUEST,
        Json(Ack {
            success: false,
            message: message.into(),
        }),
    )
}
