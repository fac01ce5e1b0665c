use std::sync::Arc;

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};
use axum::{extract::State, Extension, Json};
use fintrack_core::dashboard::DashboardSummary;

pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<DashboardSummary>> {
    let summary = state
        .dashboard_service
        .get_dashboard(&user.id, chrono::Utc::now().naive_utc())?;
    Ok(Json(summary))
}
