use crate::db::{get_connection, DbPool};
use crate::errors::Result;
use crate::expenses::expenses_model::{Expense, NewExpense};
use crate::expenses::expenses_traits::ExpenseRepositoryTrait;
use crate::schema::expenses;
use crate::schema::expenses::dsl::*;
use async_trait::async_trait;
use diesel::prelude::*;

use std::sync::Arc;
use uuid::Uuid;

pub struct ExpenseRepository {
    pool: Arc<DbPool>,
}

impl ExpenseRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        ExpenseRepository { pool }
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for ExpenseRepository {
    fn list(&self, owner_id: &str) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(expenses
            .filter(user_id.eq(owner_id))
            .order(date.desc())
            .load::<Expense>(&mut conn)?)
    }

    async fn create(&self, owner_id: &str, new_expense: NewExpense) -> Result<Expense> {
        let mut conn = get_connection(&self.pool)?;

        Ok(diesel::insert_into(expenses::table)
            .values((
                id.eq(Uuid::new_v4().to_string()),
                user_id.eq(owner_id),
                category.eq(new_expense.category),
                amount.eq(new_expense.amount),
                date.eq(new_expense.date),
                description.eq(new_expense.description),
                notes.eq(new_expense.notes),
            ))
            .returning(expenses::all_columns)
            .get_result(&mut conn)?)
    }

    async fn delete(&self, owner_id: &str, expense_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(
            diesel::delete(expenses.filter(id.eq(expense_id).and(user_id.eq(owner_id))))
                .execute(&mut conn)?,
        )
    }
}
