use async_trait::async_trait;

use crate::modules::users::application::{
    domain::{User, UserId},
    ports::outgoing::UserQuery,
    use_cases::fetch_user::{FetchUserError, FetchUserUseCase},
};

pub struct FetchUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    user_query: Q,
}

impl<Q> FetchUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { user_query: query }
    }
}

#[async_trait]
impl<Q> FetchUserUseCase for FetchUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<User, FetchUserError> {
        self.user_query
            .find_by_id(user_id)
            .await?
            .ok_or(FetchUserError::UserNotFound(user_id))
    }
}
