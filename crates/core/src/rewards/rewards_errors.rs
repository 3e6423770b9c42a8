use thiserror::Error;

/// Errors for reward posting operations.
#[derive(Error, Debug)]
pub enum RewardError {
    /// The reward ID has already been posted. Never overwrites.
    #[error("Reward with ID '{0}' has already been processed")]
    DuplicateReward(String),

    #[error("Reward not found: {0}")]
    NotFound(String),
}
