use thiserror::Error;

use nsel_model::ModelError;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

pub type EditorResult<T> = Result<T, EditorError>;
