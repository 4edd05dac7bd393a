use crate::api::schemas::MessageResponse;
use crate::shared::api::ApiResponse;
use actix_web::{get, Responder};

/// Liveness check for the users service
#[utoipa::path(
    get,
    path = "/users/ping",
    tag = "users",
    responses(
        (
            status = 200,
            description = "Service is up",
            body = MessageResponse,
            example = json!({ "status": "success", "message": "pong!" })
        )
    )
)]
#[get("/users/ping")]
pub async fn ping_handler() -> impl Responder {
    ApiResponse::ok_message("pong!")
}
