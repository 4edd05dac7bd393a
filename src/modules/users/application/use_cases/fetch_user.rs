use async_trait::async_trait;

use crate::modules::users::application::{
    domain::{User, UserId},
    ports::outgoing::UserQueryError,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchUserError {
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),
}

#[async_trait]
pub trait FetchUserUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<User, FetchUserError>;
}
