use log::debug;
use std::sync::Arc;

use super::expenses_model::{Expense, NewExpense};
use super::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
use crate::errors::{DatabaseError, Error, Result};

/// Service for managing expense records.
pub struct ExpenseService {
    repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl ExpenseService {
    pub fn new(repository: Arc<dyn ExpenseRepositoryTrait>) -> Self {
        ExpenseService { repository }
    }
}

#[async_trait::async_trait]
impl ExpenseServiceTrait for ExpenseService {
    fn get_expenses(&self, owner_id: &str) -> Result<Vec<Expense>> {
        self.repository.list(owner_id)
    }

    async fn create_expense(&self, owner_id: &str, new_expense: NewExpense) -> Result<Expense> {
        debug!("Recording expense in category: {}", new_expense.category);
        self.repository.create(owner_id, new_expense).await
    }

    async fn delete_expense(&self, owner_id: &str, expense_id: &str) -> Result<()> {
        let deleted = self.repository.delete(owner_id, expense_id).await?;
        if deleted == 0 {
            return Err(Error::Database(DatabaseError::NotFound(format!(
                "Expense {}",
                expense_id
            ))));
        }
        Ok(())
    }
}
