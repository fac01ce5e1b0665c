use crate::db::{get_connection, DbPool};
use crate::errors::{DatabaseError, Error, Result};
use crate::users::users_model::{NewUser, User, UserSettingsUpdate};
use crate::users::users_traits::UserRepositoryTrait;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;

use std::sync::Arc;
use uuid::Uuid;

pub struct UserRepository {
    pool: Arc<DbPool>,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        UserRepository { pool }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    fn get_by_id(&self, user_id: &str) -> Result<User> {
        use crate::schema::users::dsl::*;
        let mut conn = get_connection(&self.pool)?;
        users
            .find(user_id)
            .first::<User>(&mut conn)
            .optional()?
            .ok_or_else(|| {
                Error::Database(DatabaseError::NotFound(format!("User {}", user_id)))
            })
    }

    fn get_by_email(&self, user_email: &str) -> Result<Option<User>> {
        use crate::schema::users::dsl::*;
        let mut conn = get_connection(&self.pool)?;
        Ok(users
            .filter(email.eq(user_email))
            .first::<User>(&mut conn)
            .optional()?)
    }

    async fn create(&self, mut new_user: NewUser) -> Result<User> {
        use crate::schema::users;
        let mut conn = get_connection(&self.pool)?;

        new_user.id = Some(Uuid::new_v4().to_string());

        Ok(diesel::insert_into(users::table)
            .values(&new_user)
            .returning(users::all_columns)
            .get_result(&mut conn)?)
    }

    async fn update_settings(&self, user_id: &str, update: UserSettingsUpdate) -> Result<User> {
        use crate::schema::users::dsl::*;
        let mut conn = get_connection(&self.pool)?;

        let affected = diesel::update(users.find(user_id))
            .set((&update, updated_at.eq(Some(Utc::now().naive_utc()))))
            .execute(&mut conn)?;
        if affected == 0 {
            return Err(Error::Database(DatabaseError::NotFound(format!(
                "User {}",
                user_id
            ))));
        }

        Ok(users.find(user_id).first(&mut conn)?)
    }
}
