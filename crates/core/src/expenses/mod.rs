//! Expenses module - owner-scoped expense records.

mod expenses_model;
mod expenses_repository;
mod expenses_service;
mod expenses_traits;

pub use expenses_model::{Expense, NewExpense};
pub use expenses_repository::ExpenseRepository;
pub use expenses_service::ExpenseService;
pub use expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
