use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};

use crate::modules::users::application::domain::{NewUser, User, UserId};
use crate::modules::users::application::ports::outgoing::{
    UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};

#[derive(Default)]
struct StoreState {
    users: Vec<User>,
    next_id: i32,
}

/// Stands in for the `users` table. The uniqueness check and the insert
/// happen under one lock, like the table's unique constraint.
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts directly, bypassing validation.
    pub fn seed(&self, username: &str, email: &str) -> User {
        let mut state = self.state.lock().unwrap();
        Self::insert(&mut state, username.to_string(), email.to_string())
    }

    pub fn count_by_email(&self, email: &str) -> usize {
        let state = self.state.lock().unwrap();
        state.users.iter().filter(|u| u.email == email).count()
    }

    pub fn user_count(&self) -> usize {
        self.state.lock().unwrap().users.len()
    }

    fn insert(state: &mut StoreState, username: String, email: String) -> User {
        state.next_id += 1;
        let user = User {
            id: UserId::new(state.next_id),
            username,
            email,
            created_at: Utc::now(),
        };
        state.users.push(user.clone());
        user
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if state.users.iter().any(|u| u.email == user.email) {
            return Err(UserRepositoryError::EmailAlreadyExists);
        }
        Ok(Self::insert(&mut state, user.username, user.email))
    }
}

#[async_trait]
impl UserQuery for InMemoryUserStore {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, UserQueryError> {
        Ok(self.state.lock().unwrap().users.clone())
    }
}
