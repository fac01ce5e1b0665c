use crate::dashboard::dashboard_model::{DashboardSummary, LedgerSnapshot};
use crate::errors::Result;
use chrono::NaiveDateTime;

/// Trait for dashboard ledger access. Implementations must return all three
/// record kinds from one consistent view of the store.
pub trait DashboardRepositoryTrait: Send + Sync {
    fn load_ledger(&self, owner_id: &str) -> Result<LedgerSnapshot>;
}

/// Trait for dashboard service operations
pub trait DashboardServiceTrait: Send + Sync {
    fn get_dashboard(&self, owner_id: &str, as_of: NaiveDateTime) -> Result<DashboardSummary>;
}
