use log::debug;
use std::sync::Arc;

use super::users_model::{NewUser, User, UserSettingsUpdate};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::errors::{Error, Result};

/// Service for managing user identities and profile settings.
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        UserService { repository }
    }
}

#[async_trait::async_trait]
impl UserServiceTrait for UserService {
    fn get_user(&self, user_id: &str) -> Result<User> {
        self.repository.get_by_id(user_id)
    }

    fn get_user_by_email(&self, user_email: &str) -> Result<Option<User>> {
        self.repository.get_by_email(user_email)
    }

    /// Registers a new user. The email is a unique, case-sensitive key.
    async fn register_user(&self, new_user: NewUser) -> Result<User> {
        debug!("Registering user with email: {}", new_user.email);

        if self.repository.get_by_email(&new_user.email)?.is_some() {
            return Err(Error::ConstraintViolation(
                "Email already registered".to_string(),
            ));
        }

        self.repository.create(new_user).await
    }

    async fn update_settings(&self, user_id: &str, update: UserSettingsUpdate) -> Result<User> {
        self.repository.update_settings(user_id, update).await
    }
}
