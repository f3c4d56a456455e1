use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Card index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Column index {index} out of range for board with {len} columns")]
    ColumnIndexOutOfRange { index: usize, len: usize },

    #[error("Transfer source and destination are the same list; use reorder instead")]
    SameListTransfer,

    #[error("Invalid identifier: {0:?}")]
    InvalidId(String),

    #[error("Board invariant violated: {0}")]
    InvariantViolation(String),

    #[error("Notification failed: {0}")]
    Notification(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
