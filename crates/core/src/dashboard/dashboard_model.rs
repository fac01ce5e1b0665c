//! Dashboard domain models.
//!
//! The summary is computed on demand for a single user and never persisted.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::expenses::Expense;
use crate::incomes::Income;
use crate::investments::Investment;

/// A consistent snapshot of one user's ledger, read in a single transaction.
#[derive(Debug, Clone, Default)]
pub struct LedgerSnapshot {
    pub incomes: Vec<Income>,
    pub expenses: Vec<Expense>,
    pub investments: Vec<Investment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// One row of the merged recent-transactions feed. Expense amounts are
/// signed negative; the id is a synthetic composite of kind and record id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentTransaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDateTime,
    pub category: String,
}

/// Current-month expense total for one category, with its share of the
/// month's spending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub category: String,
    pub amount: f64,
    pub percentage: f64,
}

/// The computed dashboard for one user as of a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub total_savings: f64,
    pub net_worth: f64,
    pub recent_transactions: Vec<RecentTransaction>,
    pub expense_breakdown: Vec<CategoryBreakdown>,
    pub savings_rate: f64,
}
