use crate::db::{get_connection, DbPool};
use crate::errors::Result;
use crate::goals::goals_model::{Goal, NewGoal};
use crate::goals::goals_traits::GoalRepositoryTrait;
use crate::schema::goals;
use crate::schema::goals::dsl::*;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;

use std::sync::Arc;
use uuid::Uuid;

pub struct GoalRepository {
    pool: Arc<DbPool>,
}

impl GoalRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        GoalRepository { pool }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn list(&self, owner_id: &str) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(goals
            .filter(user_id.eq(owner_id))
            .order(deadline.asc())
            .load::<Goal>(&mut conn)?)
    }

    async fn create(&self, owner_id: &str, new_goal: NewGoal) -> Result<Goal> {
        let mut conn = get_connection(&self.pool)?;

        Ok(diesel::insert_into(goals::table)
            .values((
                id.eq(Uuid::new_v4().to_string()),
                user_id.eq(owner_id),
                name.eq(new_goal.name),
                target_amount.eq(new_goal.target_amount),
                current_saved.eq(new_goal.current_saved),
                deadline.eq(new_goal.deadline),
                description.eq(new_goal.description),
                status.eq(new_goal.status),
            ))
            .returning(goals::all_columns)
            .get_result(&mut conn)?)
    }

    async fn update(
        &self,
        owner_id: &str,
        goal_id: &str,
        update: NewGoal,
    ) -> Result<Option<Goal>> {
        let mut conn = get_connection(&self.pool)?;

        let affected =
            diesel::update(goals.filter(id.eq(goal_id).and(user_id.eq(owner_id))))
                .set((
                    name.eq(update.name),
                    target_amount.eq(update.target_amount),
                    current_saved.eq(update.current_saved),
                    deadline.eq(update.deadline),
                    description.eq(update.description),
                    status.eq(update.status),
                    updated_at.eq(Some(Utc::now().naive_utc())),
                ))
                .execute(&mut conn)?;

        if affected == 0 {
            return Ok(None);
        }

        Ok(goals.filter(id.eq(goal_id)).first(&mut conn).optional()?)
    }

    async fn delete(&self, owner_id: &str, goal_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(
            diesel::delete(goals.filter(id.eq(goal_id).and(user_id.eq(owner_id))))
                .execute(&mut conn)?,
        )
    }
}
