use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid display token {token:?}: {reason}")]
    InvalidToken { token: String, reason: &'static str },

    #[error("invalid label set: {0}")]
    InvalidLabels(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
