//! Income domain models.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::Queryable;
use diesel::Selectable;
use serde::{Deserialize, Serialize};

/// An income record, owned by exactly one user.
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::incomes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct Income {
    pub id: String,
    pub user_id: String,
    pub source: String,
    pub amount: f64,
    pub date: NaiveDateTime,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Input model for recording an income. The owner is supplied by the caller
/// at the repository seam, never by the payload.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewIncome {
    pub source: String,
    pub amount: f64,
    pub date: NaiveDateTime,
    pub notes: Option<String>,
}
