use thiserror::Error;

/// Failure during save or load. Every underlying cause that is not the
/// recoverable missing-file condition surfaces as one of these variants,
/// carrying the original error's description.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("core error: {0}")]
    Core(#[from] taskforge_core::error::CoreError),
}
