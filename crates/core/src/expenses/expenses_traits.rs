use crate::errors::Result;
use crate::expenses::expenses_model::{Expense, NewExpense};
use async_trait::async_trait;

/// Trait for expense repository operations. Every query is scoped to the
/// owning user's id.
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    fn list(&self, owner_id: &str) -> Result<Vec<Expense>>;
    async fn create(&self, owner_id: &str, new_expense: NewExpense) -> Result<Expense>;
    async fn delete(&self, owner_id: &str, expense_id: &str) -> Result<usize>;
}

/// Trait for expense service operations
#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    fn get_expenses(&self, owner_id: &str) -> Result<Vec<Expense>>;
    async fn create_expense(&self, owner_id: &str, new_expense: NewExpense) -> Result<Expense>;
    async fn delete_expense(&self, owner_id: &str, expense_id: &str) -> Result<()>;
}
