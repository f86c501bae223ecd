use thiserror::Error;

/// Dtop error types
#[derive(Error, Debug)]
pub enum DtopError {
    #[error("Prompt error: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("Registry error: {0}")]
    Registry(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for dtop operations
pub type Result<T> = std::result::Result<T, DtopError>;
