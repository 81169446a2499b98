use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("unknown priority name: {0}")]
    UnknownPriority(String),

    #[error("unknown status name: {0}")]
    UnknownStatus(String),

    #[error("invalid task id: {0}")]
    InvalidTaskId(String),

    #[error("invalid timestamp in '{field}': {message}")]
    InvalidTimestamp {
        field: &'static str,
        message: String,
    },
}
