use log::debug;
use std::sync::Arc;

use super::incomes_model::{Income, NewIncome};
use super::incomes_traits::{IncomeRepositoryTrait, IncomeServiceTrait};
use crate::errors::{DatabaseError, Error, Result};

/// Service for managing income records.
pub struct IncomeService {
    repository: Arc<dyn IncomeRepositoryTrait>,
}

impl IncomeService {
    pub fn new(repository: Arc<dyn IncomeRepositoryTrait>) -> Self {
        IncomeService { repository }
    }
}

#[async_trait::async_trait]
impl IncomeServiceTrait for IncomeService {
    fn get_incomes(&self, owner_id: &str) -> Result<Vec<Income>> {
        self.repository.list(owner_id)
    }

    async fn create_income(&self, owner_id: &str, new_income: NewIncome) -> Result<Income> {
        debug!("Recording income from source: {}", new_income.source);
        self.repository.create(owner_id, new_income).await
    }

    /// Deletes one of the owner's incomes. A record that does not exist and a
    /// record owned by someone else are indistinguishable to the caller.
    async fn delete_income(&self, owner_id: &str, income_id: &str) -> Result<()> {
        let deleted = self.repository.delete(owner_id, income_id).await?;
        if deleted == 0 {
            return Err(Error::Database(DatabaseError::NotFound(format!(
                "Income {}",
                income_id
            ))));
        }
        Ok(())
    }
}
