//! Dashboard module - derives the financial summary for one user.

mod dashboard_model;
mod dashboard_repository;
mod dashboard_service;
mod dashboard_traits;

#[cfg(test)]
mod dashboard_service_tests;

pub use dashboard_model::{
    CategoryBreakdown, DashboardSummary, LedgerSnapshot, RecentTransaction, TransactionKind,
};
pub use dashboard_repository::DashboardRepository;
pub use dashboard_service::DashboardService;
pub use dashboard_traits::{DashboardRepositoryTrait, DashboardServiceTrait};
