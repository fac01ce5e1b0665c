use crate::errors::Result;
use crate::incomes::incomes_model::{Income, NewIncome};
use async_trait::async_trait;

/// Trait for income repository operations. Every query is scoped to the
/// owning user's id.
#[async_trait]
pub trait IncomeRepositoryTrait: Send + Sync {
    fn list(&self, owner_id: &str) -> Result<Vec<Income>>;
    async fn create(&self, owner_id: &str, new_income: NewIncome) -> Result<Income>;
    async fn delete(&self, owner_id: &str, income_id: &str) -> Result<usize>;
}

/// Trait for income service operations
#[async_trait]
pub trait IncomeServiceTrait: Send + Sync {
    fn get_incomes(&self, owner_id: &str) -> Result<Vec<Income>>;
    async fn create_income(&self, owner_id: &str, new_income: NewIncome) -> Result<Income>;
    async fn delete_income(&self, owner_id: &str, income_id: &str) -> Result<()>;
}
