// Tue Jan 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeatureError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
    #[error("Scan was cancelled")]
    Cancelled,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FeatureError {
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, FeatureError::InvalidConfig(_))
    }

    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, FeatureError::InvalidOperation(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, FeatureError::Cancelled)
    }
}

pub type FeatureResult<T> = Result<T, FeatureError>;
