use actix_web::{error::JsonPayloadError, HttpRequest};

use crate::core::AppError;

/// Maps malformed request bodies onto the `InvalidInput` error shape.
///
/// Amount and rate validation runs during deserialization, so a negative
/// price or an unknown payment method surfaces here rather than in a handler.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(path = %req.path(), error = %err, "Rejected request body");

    let message = match &err {
        JsonPayloadError::Deserialize(e) => e.to_string(),
        other => other.to_string(),
    };

    AppError::invalid_input(message).into()
}
