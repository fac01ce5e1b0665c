use crate::db::{get_connection, DbPool};
use crate::errors::Result;
use crate::incomes::incomes_model::{Income, NewIncome};
use crate::incomes::incomes_traits::IncomeRepositoryTrait;
use crate::schema::incomes;
use crate::schema::incomes::dsl::*;
use async_trait::async_trait;
use diesel::prelude::*;

use std::sync::Arc;
use uuid::Uuid;

pub struct IncomeRepository {
    pool: Arc<DbPool>,
}

impl IncomeRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        IncomeRepository { pool }
    }
}

#[async_trait]
impl IncomeRepositoryTrait for IncomeRepository {
    fn list(&self, owner_id: &str) -> Result<Vec<Income>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(incomes
            .filter(user_id.eq(owner_id))
            .order(date.desc())
            .load::<Income>(&mut conn)?)
    }

    async fn create(&self, owner_id: &str, new_income: NewIncome) -> Result<Income> {
        let mut conn = get_connection(&self.pool)?;

        Ok(diesel::insert_into(incomes::table)
            .values((
                id.eq(Uuid::new_v4().to_string()),
                user_id.eq(owner_id),
                source.eq(new_income.source),
                amount.eq(new_income.amount),
                date.eq(new_income.date),
                notes.eq(new_income.notes),
            ))
            .returning(incomes::all_columns)
            .get_result(&mut conn)?)
    }

    async fn delete(&self, owner_id: &str, income_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(
            diesel::delete(incomes.filter(id.eq(income_id).and(user_id.eq(owner_id))))
                .execute(&mut conn)?,
        )
    }
}
