use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaseError {
    #[error("assertion failed: {0}")]
    Assertion(String),

    #[error("case cancelled")]
    Cancelled,

    #[error("io error: {0}")]
    Io(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<std::io::Error> for CaseError {
    fn from(e: std::io::Error) -> Self {
        CaseError::Io(e.to_string())
    }
}
