//! Goal domain models.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::Queryable;
use diesel::Selectable;
use serde::{Deserialize, Serialize};

/// A savings goal, owned by exactly one user.
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub target_amount: f64,
    pub current_saved: f64,
    pub deadline: NaiveDateTime,
    pub description: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl Goal {
    /// Percentage of the target already saved, clamped to 100. Zero when the
    /// target amount is zero or negative.
    pub fn progress_percentage(&self) -> f64 {
        if self.target_amount > 0.0 {
            (self.current_saved / self.target_amount * 100.0).min(100.0)
        } else {
            0.0
        }
    }
}

/// Input model for creating or replacing a goal.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub current_saved: f64,
    pub deadline: NaiveDateTime,
    pub description: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "on_track".to_string()
}
