use async_trait::async_trait;

use crate::modules::users::application::{
    domain::{NewUser, User},
    ports::outgoing::{UserRepository, UserRepositoryError},
    use_cases::add_user::{AddUserError, AddUserUseCase},
};

#[derive(Debug, Clone)]
pub struct AddUserService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> AddUserService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> AddUserUseCase for AddUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, payload: &serde_json::Value) -> Result<User, AddUserError> {
        let new_user = NewUser::from_payload(payload)?;
        let email = new_user.email.clone();

        // No lookup first: the store rejects duplicates atomically on insert
        self.repository
            .create_user(new_user)
            .await
            .map_err(|e| match e {
                UserRepositoryError::EmailAlreadyExists => AddUserError::DuplicateEmail(email),
                UserRepositoryError::DatabaseError(msg) => AddUserError::RepositoryError(msg),
            })
    }
}
