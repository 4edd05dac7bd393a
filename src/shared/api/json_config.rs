// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

pub const INVALID_PAYLOAD_MESSAGE: &str = "Invalid payload.";

/// Bodies that cannot be read as JSON get the same answer as a payload
/// that fails validation.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        tracing::warn!(error = %err, "Rejected unreadable JSON body");
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request(INVALID_PAYLOAD_MESSAGE),
        )
        .into()
    })
}
