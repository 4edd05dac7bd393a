use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set, SqlErr};
use std::sync::Arc;

use crate::modules::users::application::domain::{NewUser, User};
use crate::modules::users::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::users::ActiveModel as UserActiveModel;

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // `email` is the only unique column besides the primary key
    fn map_insert_error(err: DbErr) -> UserRepositoryError {
        if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
            return UserRepositoryError::EmailAlreadyExists;
        }

        let err_str = err.to_string().to_lowercase();
        if err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            return UserRepositoryError::EmailAlreadyExists;
        }
        UserRepositoryError::DatabaseError(err.to_string())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: NotSet,
            username: Set(user.username),
            email: Set(user.email),
            created_at: NotSet,
        };

        // Single INSERT ... RETURNING, a rejected row leaves nothing behind
        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_insert_error)?;

        Ok(inserted.into())
    }
}
