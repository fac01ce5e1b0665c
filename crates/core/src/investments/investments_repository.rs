use crate::db::{get_connection, DbPool};
use crate::errors::Result;
use crate::investments::investments_model::{Investment, NewInvestment};
use crate::investments::investments_traits::InvestmentRepositoryTrait;
use crate::schema::investments;
use crate::schema::investments::dsl::*;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;

use std::sync::Arc;
use uuid::Uuid;

pub struct InvestmentRepository {
    pool: Arc<DbPool>,
}

impl InvestmentRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        InvestmentRepository { pool }
    }
}

#[async_trait]
impl InvestmentRepositoryTrait for InvestmentRepository {
    fn list(&self, owner_id: &str) -> Result<Vec<Investment>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(investments
            .filter(user_id.eq(owner_id))
            .order(date_enrolled.desc())
            .load::<Investment>(&mut conn)?)
    }

    async fn create(&self, owner_id: &str, new_investment: NewInvestment) -> Result<Investment> {
        let mut conn = get_connection(&self.pool)?;

        Ok(diesel::insert_into(investments::table)
            .values((
                id.eq(Uuid::new_v4().to_string()),
                user_id.eq(owner_id),
                kind.eq(new_investment.kind),
                name.eq(new_investment.name),
                initial_amount.eq(new_investment.initial_amount),
                current_value.eq(new_investment.current_value),
                date_enrolled.eq(new_investment.date_enrolled),
                description.eq(new_investment.description),
            ))
            .returning(investments::all_columns)
            .get_result(&mut conn)?)
    }

    async fn update(
        &self,
        owner_id: &str,
        investment_id: &str,
        update: NewInvestment,
    ) -> Result<Option<Investment>> {
        let mut conn = get_connection(&self.pool)?;

        let affected = diesel::update(
            investments.filter(id.eq(investment_id).and(user_id.eq(owner_id))),
        )
        .set((
            kind.eq(update.kind),
            name.eq(update.name),
            initial_amount.eq(update.initial_amount),
            current_value.eq(update.current_value),
            date_enrolled.eq(update.date_enrolled),
            description.eq(update.description),
            updated_at.eq(Some(Utc::now().naive_utc())),
        ))
        .execute(&mut conn)?;

        if affected == 0 {
            return Ok(None);
        }

        Ok(investments
            .filter(id.eq(investment_id))
            .first(&mut conn)
            .optional()?)
    }

    async fn delete(&self, owner_id: &str, investment_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(
            diesel::delete(investments.filter(id.eq(investment_id).and(user_id.eq(owner_id))))
                .execute(&mut conn)?,
        )
    }
}
