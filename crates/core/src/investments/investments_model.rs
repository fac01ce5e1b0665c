//! Investment domain models.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::Queryable;
use diesel::Selectable;
use serde::{Deserialize, Serialize};

/// An investment holding, owned by exactly one user.
///
/// Growth figures are derived from the stored amounts on read and are never
/// persisted.
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::investments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    pub user_id: String,
    pub kind: String,
    pub name: String,
    pub initial_amount: f64,
    pub current_value: f64,
    pub date_enrolled: NaiveDateTime,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl Investment {
    /// Percentage gained or lost against the initial amount. Zero when the
    /// initial amount is zero or negative, regardless of current value.
    pub fn growth_percentage(&self) -> f64 {
        if self.initial_amount > 0.0 {
            (self.current_value - self.initial_amount) / self.initial_amount * 100.0
        } else {
            0.0
        }
    }

    pub fn is_positive(&self) -> bool {
        self.current_value >= self.initial_amount
    }
}

/// Input model for creating or replacing an investment.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestment {
    pub kind: String,
    pub name: String,
    pub initial_amount: f64,
    pub current_value: f64,
    pub date_enrolled: NaiveDateTime,
    pub description: Option<String>,
}
