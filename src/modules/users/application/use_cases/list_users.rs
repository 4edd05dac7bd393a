use async_trait::async_trait;

use crate::modules::users::application::{domain::User, ports::outgoing::UserQueryError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListUsersError {
    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),
}

#[async_trait]
pub trait ListUsersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<User>, ListUsersError>;
}
