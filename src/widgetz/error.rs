use crate::model::{Version, WidgetId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WidgetzError {
    #[error("Widget not found: {0}")]
    NotFound(WidgetId),

    #[error("Version conflict: expected {expected}, stored version is {actual}")]
    Conflict { expected: String, actual: Version },

    #[error("Missing If-Match header")]
    MissingPrecondition,

    #[error("Invalid concurrency token: {0:?}")]
    InvalidToken(String),

    #[error("Invalid location reference: {0}")]
    InvalidLocation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, WidgetzError>;
