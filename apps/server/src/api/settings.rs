use std::sync::Arc;

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState, models::UserResponse};
use axum::{extract::State, Extension, Json};
use fintrack_core::users::UserSettingsUpdate;

pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<UserSettingsUpdate>,
) -> ApiResult<Json<UserResponse>> {
    let updated = state.user_service.update_settings(&user.id, payload).await?;
    Ok(Json(UserResponse::from(updated)))
}
