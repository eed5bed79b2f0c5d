use alexandria_extract::error::ExtractError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("turn dropped: {0}")]
    Extraction(#[from] ExtractError),
}
