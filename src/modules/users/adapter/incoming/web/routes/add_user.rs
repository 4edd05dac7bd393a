use crate::api::schemas::MessageResponse;
use crate::modules::users::application::use_cases::add_user::AddUserError;
use crate::shared::api::{ApiResponse, INVALID_PAYLOAD_MESSAGE};
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

pub const DUPLICATE_EMAIL_MESSAGE: &str = "Sorry, that email already exists.";

/// Request body for adding a user
#[derive(Serialize, Deserialize, ToSchema)]
pub struct AddUserRequest {
    #[schema(example = "testUser")]
    pub username: String,

    /// Must not belong to another user
    #[schema(example = "testUser@test.com")]
    pub email: String,
}

/// Add a user
///
/// The body is validated before anything is written. Email addresses are unique.
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = AddUserRequest,
    responses(
        (
            status = 201,
            description = "User created",
            body = MessageResponse,
            example = json!({
                "status": "success",
                "message": "testUser@test.com was added!"
            })
        ),
        (
            status = 400,
            description = "Invalid payload or duplicate email",
            body = MessageResponse,
            examples(
                ("Invalid payload" = (value = json!({
                    "status": "fail",
                    "message": "Invalid payload."
                }))),
                ("Duplicate email" = (value = json!({
                    "status": "fail",
                    "message": "Sorry, that email already exists."
                })))
            )
        ),
        (
            status = 500,
            description = "Internal server error",
            body = MessageResponse,
            example = json!({
                "status": "error",
                "message": "An unexpected error occurred."
            })
        ),
    )
)]
#[post("/users")]
pub async fn add_user_handler(
    payload: web::Json<serde_json::Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.add_user_use_case.execute(&payload).await {
        Ok(user) => {
            info!(
                user_id = %user.id,
                username = %user.username,
                email = %user.email,
                "User added"
            );
            ApiResponse::created(&format!("{} was added!", user.email))
        }

        Err(AddUserError::InvalidPayload(e)) => {
            warn!(error = %e, "Rejected user payload");
            ApiResponse::bad_request(INVALID_PAYLOAD_MESSAGE)
        }

        Err(AddUserError::DuplicateEmail(email)) => {
            warn!(email = %email, "Email already exists");
            ApiResponse::bad_request(DUPLICATE_EMAIL_MESSAGE)
        }

        Err(AddUserError::RepositoryError(e)) => {
            error!(error = %e, "Failed to add user");
            ApiResponse::internal_error()
        }
    }
}
