//! Unit tests for the dashboard service.

use super::*;
use crate::errors::Result;
use crate::expenses::Expense;
use crate::incomes::Income;
use crate::investments::Investment;
use chrono::NaiveDateTime;
use std::sync::Arc;

// ============================================================================
// Mock Implementations
// ============================================================================

struct MockDashboardRepository {
    snapshot: LedgerSnapshot,
}

impl MockDashboardRepository {
    fn new(snapshot: LedgerSnapshot) -> Self {
        Self { snapshot }
    }
}

impl DashboardRepositoryTrait for MockDashboardRepository {
    fn load_ledger(&self, _owner_id: &str) -> Result<LedgerSnapshot> {
        Ok(self.snapshot.clone())
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn income(id: &str, amount: f64, date: &str) -> Income {
    Income {
        id: id.to_string(),
        user_id: "u-1".to_string(),
        source: format!("Source {}", id),
        amount,
        date: dt(date),
        notes: None,
        created_at: dt(date),
    }
}

fn expense(id: &str, category: &str, amount: f64, date: &str) -> Expense {
    Expense {
        id: id.to_string(),
        user_id: "u-1".to_string(),
        category: category.to_string(),
        amount,
        date: dt(date),
        description: format!("Expense {}", id),
        notes: None,
        created_at: dt(date),
    }
}

fn investment(id: &str, initial: f64, current: f64) -> Investment {
    Investment {
        id: id.to_string(),
        user_id: "u-1".to_string(),
        kind: "Stock".to_string(),
        name: format!("Holding {}", id),
        initial_amount: initial,
        current_value: current,
        date_enrolled: dt("2024-01-01 00:00:00"),
        description: None,
        created_at: dt("2024-01-01 00:00:00"),
        updated_at: None,
    }
}

fn service_with(snapshot: LedgerSnapshot) -> DashboardService {
    DashboardService::new(Arc::new(MockDashboardRepository::new(snapshot)))
}

const AS_OF: &str = "2025-08-15 12:00:00";

// ============================================================================
// Empty-ledger behavior
// ============================================================================

#[test]
fn test_empty_ledger_yields_all_zero_summary() {
    let service = service_with(LedgerSnapshot::default());

    let summary = service.get_dashboard("u-1", dt(AS_OF)).unwrap();

    assert_eq!(summary.monthly_income, 0.0);
    assert_eq!(summary.monthly_expenses, 0.0);
    assert_eq!(summary.total_savings, 0.0);
    assert_eq!(summary.net_worth, 0.0);
    assert_eq!(summary.savings_rate, 0.0);
    assert!(summary.recent_transactions.is_empty());
    assert!(summary.expense_breakdown.is_empty());
}

#[test]
fn test_expenses_without_income_keep_savings_rate_at_zero() {
    let snapshot = LedgerSnapshot {
        expenses: vec![expense("e1", "Food", 300.0, "2025-08-02 09:00:00")],
        ..Default::default()
    };
    let service = service_with(snapshot);

    let summary = service.get_dashboard("u-1", dt(AS_OF)).unwrap();

    assert_eq!(summary.monthly_expenses, 300.0);
    assert_eq!(summary.savings_rate, 0.0);
    assert!(summary.savings_rate.is_finite());
    assert_eq!(summary.expense_breakdown[0].percentage, 100.0);
}

// ============================================================================
// Reference scenario
// ============================================================================

#[test]
fn test_single_income_and_rent_expense_scenario() {
    let snapshot = LedgerSnapshot {
        incomes: vec![income("i1", 5000.0, "2025-08-01 09:00:00")],
        expenses: vec![expense("e1", "Rent", 2000.0, "2025-08-03 09:00:00")],
        investments: vec![],
    };
    let service = service_with(snapshot);

    let summary = service.get_dashboard("u-1", dt(AS_OF)).unwrap();

    assert_eq!(summary.monthly_income, 5000.0);
    assert_eq!(summary.monthly_expenses, 2000.0);
    assert_eq!(summary.total_savings, 3000.0);
    assert_eq!(summary.net_worth, 3000.0);
    assert_eq!(summary.savings_rate, 60.0);

    assert_eq!(summary.expense_breakdown.len(), 1);
    let rent = &summary.expense_breakdown[0];
    assert_eq!(rent.category, "Rent");
    assert_eq!(rent.amount, 2000.0);
    assert_eq!(rent.percentage, 100.0);

    assert_eq!(summary.recent_transactions.len(), 2);
    assert_eq!(summary.recent_transactions[0].id, "expense_e1");
    assert_eq!(summary.recent_transactions[0].amount, -2000.0);
    assert_eq!(summary.recent_transactions[1].id, "income_i1");
    assert_eq!(summary.recent_transactions[1].amount, 5000.0);
}

// ============================================================================
// Month scoping vs lifetime totals
// ============================================================================

#[test]
fn test_out_of_month_records_count_only_toward_lifetime() {
    let snapshot = LedgerSnapshot {
        incomes: vec![
            income("i1", 4000.0, "2025-08-05 09:00:00"),
            income("i2", 1000.0, "2025-07-05 09:00:00"),
            // Same calendar month, previous year.
            income("i3", 500.0, "2024-08-05 09:00:00"),
        ],
        expenses: vec![
            expense("e1", "Food", 1000.0, "2025-08-06 09:00:00"),
            expense("e2", "Food", 2500.0, "2025-06-06 09:00:00"),
        ],
        investments: vec![],
    };
    let service = service_with(snapshot);

    let summary = service.get_dashboard("u-1", dt(AS_OF)).unwrap();

    assert_eq!(summary.monthly_income, 4000.0);
    assert_eq!(summary.monthly_expenses, 1000.0);
    assert_eq!(summary.total_savings, 5500.0 - 3500.0);
    assert_eq!(summary.savings_rate, 75.0);
    // Breakdown only covers the current month.
    assert_eq!(summary.expense_breakdown.len(), 1);
    assert_eq!(summary.expense_breakdown[0].amount, 1000.0);
}

#[test]
fn test_investments_roll_into_net_worth() {
    let snapshot = LedgerSnapshot {
        incomes: vec![income("i1", 2000.0, "2025-08-01 09:00:00")],
        expenses: vec![expense("e1", "Transport", 500.0, "2025-08-02 09:00:00")],
        investments: vec![
            investment("v1", 1000.0, 1500.0),
            investment("v2", 800.0, 700.0),
        ],
    };
    let service = service_with(snapshot);

    let summary = service.get_dashboard("u-1", dt(AS_OF)).unwrap();

    assert_eq!(summary.total_savings, 1500.0);
    assert_eq!(summary.net_worth, 1500.0 + 2200.0);
}

// ============================================================================
// Recent-transactions feed
// ============================================================================

#[test]
fn test_recent_transactions_capped_and_sorted() {
    let mut incomes = Vec::new();
    let mut expenses = Vec::new();
    for day in 1..=8 {
        incomes.push(income(
            &format!("i{}", day),
            100.0,
            &format!("2025-08-{:02} 10:00:00", day),
        ));
        expenses.push(expense(
            &format!("e{}", day),
            "Food",
            50.0,
            &format!("2025-08-{:02} 11:00:00", day),
        ));
    }
    let service = service_with(LedgerSnapshot {
        incomes,
        expenses,
        investments: vec![],
    });

    let summary = service.get_dashboard("u-1", dt(AS_OF)).unwrap();

    let feed = &summary.recent_transactions;
    assert_eq!(feed.len(), 10);
    for pair in feed.windows(2) {
        assert!(pair[0].date >= pair[1].date);
    }
    // Only the five freshest of each kind are eligible.
    assert!(feed.iter().all(|t| t.date >= dt("2025-08-04 10:00:00")));
}

#[test]
fn test_recent_transactions_tie_breaks_income_before_expense() {
    let snapshot = LedgerSnapshot {
        incomes: vec![income("i1", 100.0, "2025-08-10 09:00:00")],
        expenses: vec![expense("e1", "Food", 40.0, "2025-08-10 09:00:00")],
        investments: vec![],
    };
    let service = service_with(snapshot);

    let summary = service.get_dashboard("u-1", dt(AS_OF)).unwrap();

    assert_eq!(summary.recent_transactions.len(), 2);
    assert_eq!(summary.recent_transactions[0].kind, TransactionKind::Income);
    assert_eq!(summary.recent_transactions[1].kind, TransactionKind::Expense);
}

#[test]
fn test_recent_transactions_use_source_and_description() {
    let snapshot = LedgerSnapshot {
        incomes: vec![Income {
            source: "Salary".to_string(),
            ..income("i1", 100.0, "2025-08-10 09:00:00")
        }],
        expenses: vec![Expense {
            description: "Groceries run".to_string(),
            ..expense("e1", "Food", 40.0, "2025-08-09 09:00:00")
        }],
        investments: vec![],
    };
    let service = service_with(snapshot);

    let summary = service.get_dashboard("u-1", dt(AS_OF)).unwrap();

    assert_eq!(summary.recent_transactions[0].description, "Salary");
    assert_eq!(summary.recent_transactions[0].category, "Income");
    assert_eq!(summary.recent_transactions[1].description, "Groceries run");
    assert_eq!(summary.recent_transactions[1].category, "Food");
}

// ============================================================================
// Category breakdown
// ============================================================================

#[test]
fn test_expense_breakdown_percentages() {
    let snapshot = LedgerSnapshot {
        expenses: vec![
            expense("e1", "Rent", 1500.0, "2025-08-01 09:00:00"),
            expense("e2", "Food", 750.0, "2025-08-05 09:00:00"),
            expense("e3", "Food", 250.0, "2025-08-07 09:00:00"),
            expense("e4", "Transport", 500.0, "2025-08-09 09:00:00"),
        ],
        ..Default::default()
    };
    let service = service_with(snapshot);

    let summary = service.get_dashboard("u-1", dt(AS_OF)).unwrap();

    assert_eq!(summary.monthly_expenses, 3000.0);
    let breakdown = &summary.expense_breakdown;
    assert_eq!(breakdown.len(), 3);
    assert_eq!(breakdown[0].category, "Rent");
    assert_eq!(breakdown[0].percentage, 50.0);
    assert_eq!(breakdown[1].category, "Food");
    assert_eq!(breakdown[1].amount, 1000.0);
    assert_eq!(breakdown[1].percentage, 33.3);
    assert_eq!(breakdown[2].category, "Transport");
    assert_eq!(breakdown[2].percentage, 16.7);

    for entry in breakdown {
        assert!(entry.percentage >= 0.0 && entry.percentage <= 100.0);
    }
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn test_summarize_is_idempotent_for_a_fixed_snapshot() {
    let snapshot = LedgerSnapshot {
        incomes: vec![
            income("i1", 5000.0, "2025-08-01 09:00:00"),
            income("i2", 1200.0, "2025-07-15 09:00:00"),
        ],
        expenses: vec![
            expense("e1", "Rent", 2000.0, "2025-08-03 09:00:00"),
            expense("e2", "Food", 450.0, "2025-08-04 09:00:00"),
        ],
        investments: vec![investment("v1", 1000.0, 1500.0)],
    };
    let service = service_with(snapshot);

    let first = service.get_dashboard("u-1", dt(AS_OF)).unwrap();
    let second = service.get_dashboard("u-1", dt(AS_OF)).unwrap();

    assert_eq!(first, second);
}
