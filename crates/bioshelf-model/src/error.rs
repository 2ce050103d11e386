use thiserror::Error;

#[derive(Debug, Error)]
pub enum BioshelfError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("material not found: {id}")]
    NotFound { id: String },
    #[error("invalid material: {0}")]
    InvalidDraft(String),
    #[error("corrupt database: {0}")]
    Corrupt(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, BioshelfError>;
