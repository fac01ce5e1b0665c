//! Tests for investment derived metrics.

use crate::investments::Investment;
use chrono::NaiveDateTime;

fn investment(initial: f64, current: f64) -> Investment {
    Investment {
        id: "inv-1".to_string(),
        user_id: "u-1".to_string(),
        kind: "Mutual Fund".to_string(),
        name: "Index Fund".to_string(),
        initial_amount: initial,
        current_value: current,
        date_enrolled: NaiveDateTime::parse_from_str("2024-06-01 00:00:00", "%Y-%m-%d %H:%M:%S")
            .unwrap(),
        description: None,
        created_at: NaiveDateTime::parse_from_str("2024-06-01 00:00:00", "%Y-%m-%d %H:%M:%S")
            .unwrap(),
        updated_at: None,
    }
}

#[test]
fn test_growth_percentage_gain() {
    let inv = investment(1000.0, 1500.0);
    assert_eq!(inv.growth_percentage(), 50.0);
    assert!(inv.is_positive());
}

#[test]
fn test_growth_percentage_loss() {
    let inv = investment(1000.0, 750.0);
    assert_eq!(inv.growth_percentage(), -25.0);
    assert!(!inv.is_positive());
}

#[test]
fn test_growth_percentage_zero_initial() {
    let inv = investment(0.0, 500.0);
    assert_eq!(inv.growth_percentage(), 0.0);
    assert!(inv.is_positive());
}

#[test]
fn test_growth_percentage_flat() {
    let inv = investment(1200.0, 1200.0);
    assert_eq!(inv.growth_percentage(), 0.0);
    assert!(inv.is_positive());
}
