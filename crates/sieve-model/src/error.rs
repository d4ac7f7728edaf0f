use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid tag name: {0}")]
    InvalidTag(String),

    #[error("invalid mode name: {0}")]
    InvalidMode(String),

    #[error("invalid case spec: {0}")]
    Invalid(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
