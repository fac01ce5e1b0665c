use crate::dashboard::dashboard_model::LedgerSnapshot;
use crate::dashboard::dashboard_traits::DashboardRepositoryTrait;
use crate::db::{get_connection, DbPool};
use crate::errors::Result;
use crate::expenses::Expense;
use crate::incomes::Income;
use crate::investments::Investment;
use diesel::prelude::*;

use std::sync::Arc;

pub struct DashboardRepository {
    pool: Arc<DbPool>,
}

impl DashboardRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        DashboardRepository { pool }
    }
}

impl DashboardRepositoryTrait for DashboardRepository {
    /// Reads the user's incomes, expenses, and investments inside one
    /// transaction so the aggregation sees a single snapshot of the ledger.
    fn load_ledger(&self, owner_id: &str) -> Result<LedgerSnapshot> {
        use crate::schema::{expenses, incomes, investments};

        let mut conn = get_connection(&self.pool)?;

        let snapshot = conn.transaction::<LedgerSnapshot, diesel::result::Error, _>(|conn| {
            let income_rows = incomes::table
                .filter(incomes::user_id.eq(owner_id))
                .load::<Income>(conn)?;
            let expense_rows = expenses::table
                .filter(expenses::user_id.eq(owner_id))
                .load::<Expense>(conn)?;
            let investment_rows = investments::table
                .filter(investments::user_id.eq(owner_id))
                .load::<Investment>(conn)?;

            Ok(LedgerSnapshot {
                incomes: income_rows,
                expenses: expense_rows,
                investments: investment_rows,
            })
        })?;

        Ok(snapshot)
    }
}
