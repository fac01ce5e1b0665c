use log::debug;
use std::sync::Arc;

use super::goals_model::{Goal, NewGoal};
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::errors::{DatabaseError, Error, Result};

/// Service for managing savings goals.
pub struct GoalService {
    repository: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    pub fn new(repository: Arc<dyn GoalRepositoryTrait>) -> Self {
        GoalService { repository }
    }
}

#[async_trait::async_trait]
impl GoalServiceTrait for GoalService {
    fn get_goals(&self, owner_id: &str) -> Result<Vec<Goal>> {
        self.repository.list(owner_id)
    }

    async fn create_goal(&self, owner_id: &str, new_goal: NewGoal) -> Result<Goal> {
        debug!("Creating goal: {}", new_goal.name);
        self.repository.create(owner_id, new_goal).await
    }

    async fn update_goal(&self, owner_id: &str, goal_id: &str, update: NewGoal) -> Result<Goal> {
        self.repository
            .update(owner_id, goal_id, update)
            .await?
            .ok_or_else(|| {
                Error::Database(DatabaseError::NotFound(format!("Goal {}", goal_id)))
            })
    }

    async fn delete_goal(&self, owner_id: &str, goal_id: &str) -> Result<()> {
        let deleted = self.repository.delete(owner_id, goal_id).await?;
        if deleted == 0 {
            return Err(Error::Database(DatabaseError::NotFound(format!(
                "Goal {}",
                goal_id
            ))));
        }
        Ok(())
    }
}
