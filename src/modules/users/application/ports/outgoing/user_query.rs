// application/ports/outgoing/user_query.rs
use crate::modules::users::application::domain::{User, UserId};
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError>;

    /// All users, ordered by id.
    async fn list_users(&self) -> Result<Vec<User>, UserQueryError>;
}
