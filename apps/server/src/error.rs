use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use stockledger_core::errors::{DatabaseError, Error as CoreError};
use stockledger_core::rewards::RewardError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::Core(e) = &self;
        let (status, msg) = match e {
            CoreError::Validation(_) => (StatusCode::BAD_REQUEST, e.to_string()),
            CoreError::Reward(RewardError::DuplicateReward(_)) => {
                (StatusCode::CONFLICT, e.to_string())
            }
            CoreError::Reward(RewardError::NotFound(_)) => (StatusCode::NOT_FOUND, e.to_string()),
            CoreError::Database(DatabaseError::UniqueViolation(_)) => {
                (StatusCode::CONFLICT, e.to_string())
            }
            CoreError::Database(DatabaseError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, e.to_string())
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: msg,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
