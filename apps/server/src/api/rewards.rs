use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{error::ApiResult, main_lib::AppState};
use stockledger_core::charges::CompanyCharges;
use stockledger_core::ledger::LedgerEntry;
use stockledger_core::rewards::{NewStockReward, StockReward};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardResponse {
    pub success: bool,
    pub message: String,
    pub reward: StockReward,
    pub inr_value: Decimal,
    pub company_charges: CompanyCharges,
}

pub async fn post_reward(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewStockReward>,
) -> ApiResult<(StatusCode, Json<RewardResponse>)> {
    let posting = state.reward_service.post_reward(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(RewardResponse {
            success: true,
            message: "Stock reward recorded successfully".to_string(),
            reward: posting.reward,
            inr_value: posting.inr_value,
            company_charges: posting.charges,
        }),
    ))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardWithLedger {
    pub reward: StockReward,
    pub ledger_entries: Vec<LedgerEntry>,
}

pub async fn get_reward(
    Path(reward_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<RewardWithLedger>> {
    let reward = state.reward_service.get_reward(&reward_id)?;
    let ledger_entries = state.ledger_repository.get_entries_for_reward(&reward_id)?;
    Ok(Json(RewardWithLedger {
        reward,
        ledger_entries,
    }))
}
