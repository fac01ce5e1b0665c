//! API response models. Derived figures (growth, progress) are computed here
//! at serialization time from the stored fields; they are never persisted.

use chrono::NaiveDateTime;
use fintrack_core::goals as core_goals;
use fintrack_core::investments as core_investments;
use fintrack_core::users as core_users;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub preferred_currency: String,
    pub theme_mode: String,
    pub family_mode: bool,
    pub created_at: NaiveDateTime,
}

impl From<core_users::User> for UserResponse {
    fn from(u: core_users::User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            preferred_currency: u.preferred_currency,
            theme_mode: u.theme_mode,
            family_mode: u.family_mode,
            created_at: u.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentResponse {
    pub id: String,
    pub user_id: String,
    pub kind: String,
    pub name: String,
    pub initial_amount: f64,
    pub current_value: f64,
    pub date_enrolled: NaiveDateTime,
    pub description: Option<String>,
    pub growth_percentage: f64,
    pub is_positive: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl From<core_investments::Investment> for InvestmentResponse {
    fn from(inv: core_investments::Investment) -> Self {
        let growth_percentage = inv.growth_percentage();
        let is_positive = inv.is_positive();
        Self {
            id: inv.id,
            user_id: inv.user_id,
            kind: inv.kind,
            name: inv.name,
            initial_amount: inv.initial_amount,
            current_value: inv.current_value,
            date_enrolled: inv.date_enrolled,
            description: inv.description,
            growth_percentage,
            is_positive,
            created_at: inv.created_at,
            updated_at: inv.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GoalResponse {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub target_amount: f64,
    pub current_saved: f64,
    pub deadline: NaiveDateTime,
    pub description: Option<String>,
    pub status: String,
    pub progress_percentage: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl From<core_goals::Goal> for GoalResponse {
    fn from(g: core_goals::Goal) -> Self {
        let progress_percentage = g.progress_percentage();
        Self {
            id: g.id,
            user_id: g.user_id,
            name: g.name,
            target_amount: g.target_amount,
            current_saved: g.current_saved,
            deadline: g.deadline,
            description: g.description,
            status: g.status,
            progress_percentage,
            created_at: g.created_at,
            updated_at: g.updated_at,
        }
    }
}
