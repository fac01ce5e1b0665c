use log::debug;
use std::sync::Arc;

use super::investments_model::{Investment, NewInvestment};
use super::investments_traits::{InvestmentRepositoryTrait, InvestmentServiceTrait};
use crate::errors::{DatabaseError, Error, Result};

/// Service for managing investment holdings.
pub struct InvestmentService {
    repository: Arc<dyn InvestmentRepositoryTrait>,
}

impl InvestmentService {
    pub fn new(repository: Arc<dyn InvestmentRepositoryTrait>) -> Self {
        InvestmentService { repository }
    }
}

#[async_trait::async_trait]
impl InvestmentServiceTrait for InvestmentService {
    fn get_investments(&self, owner_id: &str) -> Result<Vec<Investment>> {
        self.repository.list(owner_id)
    }

    async fn create_investment(
        &self,
        owner_id: &str,
        new_investment: NewInvestment,
    ) -> Result<Investment> {
        debug!("Creating investment: {}", new_investment.name);
        self.repository.create(owner_id, new_investment).await
    }

    async fn update_investment(
        &self,
        owner_id: &str,
        investment_id: &str,
        update: NewInvestment,
    ) -> Result<Investment> {
        self.repository
            .update(owner_id, investment_id, update)
            .await?
            .ok_or_else(|| {
                Error::Database(DatabaseError::NotFound(format!(
                    "Investment {}",
                    investment_id
                )))
            })
    }

    async fn delete_investment(&self, owner_id: &str, investment_id: &str) -> Result<()> {
        let deleted = self.repository.delete(owner_id, investment_id).await?;
        if deleted == 0 {
            return Err(Error::Database(DatabaseError::NotFound(format!(
                "Investment {}",
                investment_id
            ))));
        }
        Ok(())
    }
}
