use crate::modules::users::application::services::{
    AddUserService, FetchUserService, ListUsersService,
};
use crate::modules::users::application::use_cases::{
    add_user::AddUserUseCase, fetch_user::FetchUserUseCase, list_users::ListUsersUseCase,
};
use crate::tests::support::in_memory_user_store::InMemoryUserStore;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    add_user: Option<Arc<dyn AddUserUseCase + Send + Sync>>,
    fetch_user: Option<Arc<dyn FetchUserUseCase + Send + Sync>>,
    list_users: Option<Arc<dyn ListUsersUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            add_user: Some(Arc::new(StubAddUserUseCase)),
            fetch_user: Some(Arc::new(StubFetchUserUseCase)),
            list_users: Some(Arc::new(StubListUsersUseCase)),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_add_user(mut self, uc: impl AddUserUseCase + Send + Sync + 'static) -> Self {
        self.add_user = Some(Arc::new(uc));
        self
    }

    pub fn with_fetch_user(mut self, uc: impl FetchUserUseCase + Send + Sync + 'static) -> Self {
        self.fetch_user = Some(Arc::new(uc));
        self
    }

    pub fn with_list_users(mut self, uc: impl ListUsersUseCase + Send + Sync + 'static) -> Self {
        self.list_users = Some(Arc::new(uc));
        self
    }

    /// Wires the real services on top of one shared in-memory store.
    pub fn with_user_store(self, store: InMemoryUserStore) -> Self {
        self.with_add_user(AddUserService::new(store.clone()))
            .with_fetch_user(FetchUserService::new(store.clone()))
            .with_list_users(ListUsersService::new(store))
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            add_user_use_case: self.add_user.expect("add_user use case not set"),
            fetch_user_use_case: self.fetch_user.expect("fetch_user use case not set"),
            list_users_use_case: self.list_users.expect("list_users use case not set"),
        })
    }
}
