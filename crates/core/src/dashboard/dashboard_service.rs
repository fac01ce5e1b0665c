use chrono::{Datelike, NaiveDateTime};
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

use super::dashboard_model::{
    CategoryBreakdown, DashboardSummary, LedgerSnapshot, RecentTransaction, TransactionKind,
};
use super::dashboard_traits::{DashboardRepositoryTrait, DashboardServiceTrait};
use crate::constants::{PERCENT_DECIMALS, RECENT_PER_KIND, RECENT_TRANSACTIONS_LIMIT};
use crate::errors::Result;

/// Service that derives the dashboard summary from one user's ledger.
///
/// All arithmetic is total: every division is guarded by a zero check, so an
/// empty ledger yields an all-zero summary rather than an error.
pub struct DashboardService {
    repository: Arc<dyn DashboardRepositoryTrait>,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn DashboardRepositoryTrait>) -> Self {
        DashboardService { repository }
    }

    fn round_percent(value: f64) -> f64 {
        let factor = 10f64.powi(PERCENT_DECIMALS as i32);
        (value * factor).round() / factor
    }

    fn in_month(date: &NaiveDateTime, as_of: &NaiveDateTime) -> bool {
        date.year() == as_of.year() && date.month() == as_of.month()
    }

    /// Merges the most recent incomes and expenses into one feed, newest
    /// first. Incomes are pushed ahead of expenses before the stable sort,
    /// so on equal dates an income ranks before an expense.
    fn recent_transactions(snapshot: &LedgerSnapshot) -> Vec<RecentTransaction> {
        let mut incomes = snapshot.incomes.clone();
        incomes.sort_by(|a, b| b.date.cmp(&a.date));
        let mut expenses = snapshot.expenses.clone();
        expenses.sort_by(|a, b| b.date.cmp(&a.date));

        let mut merged: Vec<RecentTransaction> = Vec::new();
        for income in incomes.iter().take(RECENT_PER_KIND) {
            merged.push(RecentTransaction {
                id: format!("income_{}", income.id),
                kind: TransactionKind::Income,
                description: income.source.clone(),
                amount: income.amount,
                date: income.date,
                category: "Income".to_string(),
            });
        }
        for expense in expenses.iter().take(RECENT_PER_KIND) {
            merged.push(RecentTransaction {
                id: format!("expense_{}", expense.id),
                kind: TransactionKind::Expense,
                description: expense.description.clone(),
                amount: -expense.amount,
                date: expense.date,
                category: expense.category.clone(),
            });
        }

        merged.sort_by(|a, b| b.date.cmp(&a.date));
        merged.truncate(RECENT_TRANSACTIONS_LIMIT);
        merged
    }

    fn expense_breakdown(
        snapshot: &LedgerSnapshot,
        as_of: &NaiveDateTime,
        monthly_expenses: f64,
    ) -> Vec<CategoryBreakdown> {
        let mut totals: HashMap<String, f64> = HashMap::new();
        for expense in snapshot
            .expenses
            .iter()
            .filter(|e| Self::in_month(&e.date, as_of))
        {
            *totals.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
        }

        let mut breakdown: Vec<CategoryBreakdown> = totals
            .into_iter()
            .map(|(cat, total)| {
                let percentage = if monthly_expenses > 0.0 {
                    Self::round_percent(total / monthly_expenses * 100.0)
                } else {
                    0.0
                };
                CategoryBreakdown {
                    category: cat,
                    amount: total,
                    percentage,
                }
            })
            .collect();

        // Largest categories first; name breaks ties so output is stable.
        breakdown.sort_by(|a, b| {
            b.amount
                .partial_cmp(&a.amount)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.category.cmp(&b.category))
        });
        breakdown
    }
}

impl DashboardServiceTrait for DashboardService {
    fn get_dashboard(&self, owner_id: &str, as_of: NaiveDateTime) -> Result<DashboardSummary> {
        debug!("Building dashboard summary for user {}", owner_id);

        let snapshot = self.repository.load_ledger(owner_id)?;

        let monthly_income: f64 = snapshot
            .incomes
            .iter()
            .filter(|i| Self::in_month(&i.date, &as_of))
            .map(|i| i.amount)
            .sum();

        let monthly_expenses: f64 = snapshot
            .expenses
            .iter()
            .filter(|e| Self::in_month(&e.date, &as_of))
            .map(|e| e.amount)
            .sum();

        let total_income: f64 = snapshot.incomes.iter().map(|i| i.amount).sum();
        let total_expenses: f64 = snapshot.expenses.iter().map(|e| e.amount).sum();
        let total_savings = total_income - total_expenses;

        let investment_value: f64 = snapshot.investments.iter().map(|i| i.current_value).sum();
        let net_worth = total_savings + investment_value;

        let recent_transactions = Self::recent_transactions(&snapshot);
        let expense_breakdown = Self::expense_breakdown(&snapshot, &as_of, monthly_expenses);

        let savings_rate = if monthly_income > 0.0 {
            Self::round_percent((monthly_income - monthly_expenses) / monthly_income * 100.0)
        } else {
            0.0
        };

        Ok(DashboardSummary {
            monthly_income,
            monthly_expenses,
            total_savings,
            net_worth,
            recent_transactions,
            expense_breakdown,
            savings_rate,
        })
    }
}
