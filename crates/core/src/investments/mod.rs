//! Investments module - owner-scoped investment holdings.

mod investments_model;
mod investments_repository;
mod investments_service;
mod investments_traits;

#[cfg(test)]
mod investments_model_tests;

pub use investments_model::{Investment, NewInvestment};
pub use investments_repository::InvestmentRepository;
pub use investments_service::InvestmentService;
pub use investments_traits::{InvestmentRepositoryTrait, InvestmentServiceTrait};
