use thiserror::Error;

/// Failures from a single CRM API call.
///
/// Action execution catches these per action; one failed request never
/// aborts or rolls back its siblings.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Request timed out")]
    Timeout,

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to parse API response: {0}")]
    Parse(String),
}

impl ApiError {
    /// The HTTP status code, when the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
