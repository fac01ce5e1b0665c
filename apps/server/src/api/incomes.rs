use std::sync::Arc;

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Extension, Json, Router,
};
use fintrack_core::incomes::{Income, NewIncome};

async fn list_incomes(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<Income>>> {
    let incomes = state.income_service.get_incomes(&user.id)?;
    Ok(Json(incomes))
}

async fn create_income(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<NewIncome>,
) -> ApiResult<Json<Income>> {
    let income = state.income_service.create_income(&user.id, payload).await?;
    Ok(Json(income))
}

async fn delete_income(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<StatusCode> {
    state.income_service.delete_income(&user.id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/incomes", get(list_incomes).post(create_income))
        .route("/incomes/{id}", delete(delete_income))
}
