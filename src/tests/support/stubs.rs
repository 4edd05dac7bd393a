use async_trait::async_trait;

use crate::modules::users::application::domain::{User, UserId};
use crate::modules::users::application::use_cases::{
    add_user::{AddUserError, AddUserUseCase},
    fetch_user::{FetchUserError, FetchUserUseCase},
    list_users::{ListUsersError, ListUsersUseCase},
};

#[derive(Default, Clone)]
pub struct StubAddUserUseCase;

#[async_trait]
impl AddUserUseCase for StubAddUserUseCase {
    async fn execute(&self, _payload: &serde_json::Value) -> Result<User, AddUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchUserUseCase;

#[async_trait]
impl FetchUserUseCase for StubFetchUserUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<User, FetchUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListUsersUseCase;

#[async_trait]
impl ListUsersUseCase for StubListUsersUseCase {
    async fn execute(&self) -> Result<Vec<User>, ListUsersError> {
        unimplemented!("Not used in this test")
    }
}
