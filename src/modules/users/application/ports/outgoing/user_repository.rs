use crate::modules::users::application::domain::{NewUser, User};
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Write side of the user store.
///
/// Implementations must enforce email uniqueness themselves (a unique
/// constraint, a lock, ...) and report a violation as
/// [`UserRepositoryError::EmailAlreadyExists`] without persisting anything.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError>;
}
