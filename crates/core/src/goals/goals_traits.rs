use crate::errors::Result;
use crate::goals::goals_model::{Goal, NewGoal};
use async_trait::async_trait;

/// Trait for goal repository operations. Every query is scoped to the owning
/// user's id.
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn list(&self, owner_id: &str) -> Result<Vec<Goal>>;
    async fn create(&self, owner_id: &str, new_goal: NewGoal) -> Result<Goal>;
    async fn update(
        &self,
        owner_id: &str,
        goal_id: &str,
        update: NewGoal,
    ) -> Result<Option<Goal>>;
    async fn delete(&self, owner_id: &str, goal_id: &str) -> Result<usize>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self, owner_id: &str) -> Result<Vec<Goal>>;
    async fn create_goal(&self, owner_id: &str, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(&self, owner_id: &str, goal_id: &str, update: NewGoal) -> Result<Goal>;
    async fn delete_goal(&self, owner_id: &str, goal_id: &str) -> Result<()>;
}
