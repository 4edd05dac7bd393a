use async_trait::async_trait;

use crate::modules::users::application::{
    domain::User,
    ports::outgoing::UserQuery,
    use_cases::list_users::{ListUsersError, ListUsersUseCase},
};

pub struct ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    user_query: Q,
}

impl<Q> ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { user_query: query }
    }
}

#[async_trait]
impl<Q> ListUsersUseCase for ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<User>, ListUsersError> {
        Ok(self.user_query.list_users().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::users::application::{domain::UserId, ports::outgoing::UserQueryError};
    use chrono::Utc;

    struct MockUserQuery {
        result: Result<Vec<User>, UserQueryError>,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_by_id(&self, _user_id: UserId) -> Result<Option<User>, UserQueryError> {
            unimplemented!()
        }

        async fn list_users(&self) -> Result<Vec<User>, UserQueryError> {
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn test_execute_returns_every_user() {
        let users = vec![
            User {
                id: UserId::new(1),
                username: "first".to_string(),
                email: "first@test.com".to_string(),
                created_at: Utc::now(),
            },
            User {
                id: UserId::new(2),
                username: "second".to_string(),
                email: "second@test.com".to_string(),
                created_at: Utc::now(),
            },
        ];

        let service = ListUsersService::new(MockUserQuery {
            result: Ok(users.clone()),
        });

        assert_eq!(service.execute().await.unwrap(), users);
    }

    #[tokio::test]
    async fn test_execute_empty_store() {
        let service = ListUsersService::new(MockUserQuery { result: Ok(vec![]) });
        assert!(service.execute().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_execute_query_error() {
        let service = ListUsersService::new(MockUserQuery {
            result: Err(UserQueryError::DatabaseError("timeout".to_string())),
        });

        assert!(matches!(
            service.execute().await,
            Err(ListUsersError::QueryError(UserQueryError::DatabaseError(_)))
        ));
    }
}
