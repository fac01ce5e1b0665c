use crate::errors::Result;
use crate::users::users_model::{NewUser, User, UserSettingsUpdate};
use async_trait::async_trait;

/// Trait for user repository operations
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn get_by_id(&self, user_id: &str) -> Result<User>;
    fn get_by_email(&self, user_email: &str) -> Result<Option<User>>;
    async fn create(&self, new_user: NewUser) -> Result<User>;
    async fn update_settings(&self, user_id: &str, update: UserSettingsUpdate) -> Result<User>;
}

/// Trait for user service operations
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    fn get_user(&self, user_id: &str) -> Result<User>;
    fn get_user_by_email(&self, user_email: &str) -> Result<Option<User>>;
    async fn register_user(&self, new_user: NewUser) -> Result<User>;
    async fn update_settings(&self, user_id: &str, update: UserSettingsUpdate) -> Result<User>;
}
