use std::sync::Arc;

use crate::{
    auth::CurrentUser, error::ApiResult, main_lib::AppState, models::InvestmentResponse,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};
use fintrack_core::investments::NewInvestment;

async fn list_investments(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<InvestmentResponse>>> {
    let investments = state.investment_service.get_investments(&user.id)?;
    Ok(Json(
        investments
            .into_iter()
            .map(InvestmentResponse::from)
            .collect(),
    ))
}

async fn create_investment(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<NewInvestment>,
) -> ApiResult<Json<InvestmentResponse>> {
    let investment = state
        .investment_service
        .create_investment(&user.id, payload)
        .await?;
    Ok(Json(InvestmentResponse::from(investment)))
}

async fn update_investment(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<NewInvestment>,
) -> ApiResult<Json<InvestmentResponse>> {
    let investment = state
        .investment_service
        .update_investment(&user.id, &id, payload)
        .await?;
    Ok(Json(InvestmentResponse::from(investment)))
}

async fn delete_investment(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<StatusCode> {
    state
        .investment_service
        .delete_investment(&user.id, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/investments", get(list_investments).post(create_investment))
        .route(
            "/investments/{id}",
            put(update_investment).delete(delete_investment),
        )
}
