use thiserror::Error;

use crate::api::ApiError;
use crate::status::PreconditionError;

/// Top-level error for callers that drive the full status-change flow.
#[derive(Debug, Error)]
pub enum DealflowError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("CRM API error: {0}")]
    Api(#[from] ApiError),

    #[error("Blocked status change: {0}")]
    Precondition(#[from] PreconditionError),
}
