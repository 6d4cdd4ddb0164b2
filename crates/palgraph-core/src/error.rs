use thiserror::Error;

pub type Result<T> = std::result::Result<T, PalError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PalError {
    #[error("format error: {0}")]
    Format(String),

    #[error("range error: {0}")]
    Range(String),

    #[error("not found: {0}")]
    NotFound(String),
}
