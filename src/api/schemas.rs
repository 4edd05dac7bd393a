use serde::Serialize;
use utoipa::ToSchema;

/// Response carrying only an outcome and a message
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    /// `success`, `fail` (client error) or `error` (server error)
    #[schema(example = "success")]
    pub status: String,

    #[schema(example = "pong!")]
    pub message: String,
}

/// Successful response carrying data
#[derive(Serialize, ToSchema)]
pub struct DataResponse<T> {
    #[schema(example = "success")]
    pub status: String,
    pub data: T,
}
