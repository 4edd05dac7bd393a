use async_trait::async_trait;

use crate::modules::users::application::domain::{PayloadError, User};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddUserError {
    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] PayloadError),

    #[error("Email already exists: {0}")]
    DuplicateEmail(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AddUserUseCase: Send + Sync {
    /// Validates a raw request payload and persists the user it describes.
    async fn execute(&self, payload: &serde_json::Value) -> Result<User, AddUserError>;
}
