use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{error::ApiResult, main_lib::AppState};
use stockledger_core::portfolio::{HistoricalInr, PortfolioSummary, TodayRewards, UserStats};

pub async fn get_portfolio(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PortfolioSummary>> {
    Ok(Json(state.portfolio_service.get_portfolio(&user_id)?))
}

pub async fn get_stats(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<UserStats>> {
    Ok(Json(state.portfolio_service.get_stats(&user_id)?))
}

pub async fn get_historical_inr(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<HistoricalInr>> {
    Ok(Json(state.portfolio_service.get_historical_inr(&user_id)?))
}

pub async fn get_today_stocks(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<TodayRewards>> {
    Ok(Json(state.portfolio_service.get_today_rewards(&user_id)?))
}
