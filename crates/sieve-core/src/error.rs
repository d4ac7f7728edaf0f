use thiserror::Error;

use sieve_model::ModelError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown case: {0}")]
    UnknownCase(String),

    #[error("duplicate case: {0}")]
    DuplicateCase(String),

    #[error("invalid case spec: {0}")]
    InvalidSpec(#[from] ModelError),
}

pub type CoreResult<T> = Result<T, CoreError>;
