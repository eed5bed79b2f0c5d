use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("duplicate catalog phrase: {0}")]
    DuplicatePhrase(String),

    #[error("invalid catalog phrase '{0}': must be non-empty lowercase text")]
    InvalidPhrase(String),

    #[error("invalid code '{code}' for phrase '{phrase}': must be a non-empty digit string")]
    InvalidCode { phrase: String, code: String },
}
