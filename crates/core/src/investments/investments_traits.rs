use crate::errors::Result;
use crate::investments::investments_model::{Investment, NewInvestment};
use async_trait::async_trait;

/// Trait for investment repository operations. Every query is scoped to the
/// owning user's id.
#[async_trait]
pub trait InvestmentRepositoryTrait: Send + Sync {
    fn list(&self, owner_id: &str) -> Result<Vec<Investment>>;
    async fn create(&self, owner_id: &str, new_investment: NewInvestment) -> Result<Investment>;
    async fn update(
        &self,
        owner_id: &str,
        investment_id: &str,
        update: NewInvestment,
    ) -> Result<Option<Investment>>;
    async fn delete(&self, owner_id: &str, investment_id: &str) -> Result<usize>;
}

/// Trait for investment service operations
#[async_trait]
pub trait InvestmentServiceTrait: Send + Sync {
    fn get_investments(&self, owner_id: &str) -> Result<Vec<Investment>>;
    async fn create_investment(
        &self,
        owner_id: &str,
        new_investment: NewInvestment,
    ) -> Result<Investment>;
    async fn update_investment(
        &self,
        owner_id: &str,
        investment_id: &str,
        update: NewInvestment,
    ) -> Result<Investment>;
    async fn delete_investment(&self, owner_id: &str, investment_id: &str) -> Result<()>;
}
