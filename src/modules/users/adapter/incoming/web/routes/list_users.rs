use super::fetch_user::UserResponse;
use crate::api::schemas::{DataResponse, MessageResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct UsersListResponse {
    pub users: Vec<UserResponse>,
}

/// List all users, oldest first
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "Every stored user", body = inline(DataResponse<UsersListResponse>)),
        (status = 500, description = "Internal server error", body = MessageResponse),
    )
)]
#[get("/users")]
pub async fn list_users_handler(data: web::Data<AppState>) -> impl Responder {
    match data.list_users_use_case.execute().await {
        Ok(users) => ApiResponse::success(UsersListResponse {
            users: users.into_iter().map(UserResponse::from).collect(),
        }),
        Err(e) => {
            error!(error = %e, "Database error listing users");
            ApiResponse::internal_error()
        }
    }
}
