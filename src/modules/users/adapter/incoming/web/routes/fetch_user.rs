use crate::api::schemas::{DataResponse, MessageResponse};
use crate::modules::users::application::domain::{User, UserId};
use crate::modules::users::application::use_cases::fetch_user::FetchUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;

pub const USER_NOT_FOUND_MESSAGE: &str = "User does not exist";

#[derive(Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "testUser")]
    pub username: String,

    #[schema(example = "testUser@test.com")]
    pub email: String,

    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.value(),
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// Fetch a single user
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (
            status = 200,
            description = "User found",
            body = inline(DataResponse<UserResponse>),
            example = json!({
                "status": "success",
                "data": {
                    "id": 1,
                    "username": "testUser",
                    "email": "testUser@test.com",
                    "created_at": "2025-03-04T10:54:28Z"
                }
            })
        ),
        (
            status = 404,
            description = "Unknown or malformed id",
            body = MessageResponse,
            example = json!({ "status": "fail", "message": "User does not exist" })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = MessageResponse
        ),
    )
)]
#[get("/users/{id}")]
pub async fn fetch_user_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let raw_id = path.into_inner();
    let user_id = match raw_id.parse::<UserId>() {
        Ok(id) => id,
        Err(_) => {
            warn!(user_id = %raw_id, "Malformed user id");
            return ApiResponse::not_found(USER_NOT_FOUND_MESSAGE);
        }
    };

    match data.fetch_user_use_case.execute(user_id).await {
        Ok(user) => ApiResponse::success(UserResponse::from(user)),

        Err(FetchUserError::UserNotFound(id)) => {
            warn!(user_id = %id, "User not found");
            ApiResponse::not_found(USER_NOT_FOUND_MESSAGE)
        }

        Err(FetchUserError::QueryError(e)) => {
            error!(user_id = %user_id, error = %e, "Database error fetching user");
            ApiResponse::internal_error()
        }
    }
}
