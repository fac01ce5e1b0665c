//! Tests for goal derived metrics.

use crate::goals::Goal;
use chrono::NaiveDateTime;

fn goal(target: f64, saved: f64) -> Goal {
    Goal {
        id: "g-1".to_string(),
        user_id: "u-1".to_string(),
        name: "Emergency Fund".to_string(),
        target_amount: target,
        current_saved: saved,
        deadline: NaiveDateTime::parse_from_str("2026-12-31 00:00:00", "%Y-%m-%d %H:%M:%S")
            .unwrap(),
        description: None,
        status: "on_track".to_string(),
        created_at: NaiveDateTime::parse_from_str("2025-01-01 00:00:00", "%Y-%m-%d %H:%M:%S")
            .unwrap(),
        updated_at: None,
    }
}

#[test]
fn test_progress_percentage_partial() {
    assert_eq!(goal(10000.0, 2500.0).progress_percentage(), 25.0);
}

#[test]
fn test_progress_percentage_clamped_at_100() {
    assert_eq!(goal(1000.0, 1500.0).progress_percentage(), 100.0);
}

#[test]
fn test_progress_percentage_zero_target() {
    assert_eq!(goal(0.0, 500.0).progress_percentage(), 0.0);
}

#[test]
fn test_progress_percentage_exact_target() {
    assert_eq!(goal(800.0, 800.0).progress_percentage(), 100.0);
}
