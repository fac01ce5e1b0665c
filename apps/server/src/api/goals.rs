use std::sync::Arc;

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState, models::GoalResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};
use fintrack_core::goals::NewGoal;

async fn list_goals(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<GoalResponse>>> {
    let goals = state.goal_service.get_goals(&user.id)?;
    Ok(Json(goals.into_iter().map(GoalResponse::from).collect()))
}

async fn create_goal(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<NewGoal>,
) -> ApiResult<Json<GoalResponse>> {
    let goal = state.goal_service.create_goal(&user.id, payload).await?;
    Ok(Json(GoalResponse::from(goal)))
}

async fn update_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<NewGoal>,
) -> ApiResult<Json<GoalResponse>> {
    let goal = state
        .goal_service
        .update_goal(&user.id, &id, payload)
        .await?;
    Ok(Json(GoalResponse::from(goal)))
}

async fn delete_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<StatusCode> {
    state.goal_service.delete_goal(&user.id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals", get(list_goals).post(create_goal))
        .route("/goals/{id}", put(update_goal).delete(delete_goal))
}
