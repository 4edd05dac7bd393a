use crate::api::schemas::{DataResponse, MessageResponse};
use crate::modules::users::adapter::incoming::web::routes::{
    AddUserRequest, UserResponse, UsersListResponse,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users Service API",
        version = "0.1.0",
        description = "Create and look up users"
    ),
    paths(
        crate::modules::users::adapter::incoming::web::routes::ping_handler,
        crate::modules::users::adapter::incoming::web::routes::list_users_handler,
        crate::modules::users::adapter::incoming::web::routes::add_user_handler,
        crate::modules::users::adapter::incoming::web::routes::fetch_user_handler,
    ),
    components(
        schemas(
            MessageResponse,
            DataResponse<UserResponse>,
            DataResponse<UsersListResponse>,
            AddUserRequest,
            UserResponse,
            UsersListResponse
        )
    ),
    tags(
        (name = "users", description = "User management endpoints"),
    )
)]
pub struct ApiDoc;
