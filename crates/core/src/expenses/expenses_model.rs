//! Expense domain models.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::Queryable;
use diesel::Selectable;
use serde::{Deserialize, Serialize};

/// An expense record, owned by exactly one user.
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::expenses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub user_id: String,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDateTime,
    pub description: String,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Input model for recording an expense.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub category: String,
    pub amount: f64,
    pub date: NaiveDateTime,
    pub description: String,
    pub notes: Option<String>,
}
