use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("narrative must be a string, got {found}")]
    InvalidInputType { found: &'static str },
}
