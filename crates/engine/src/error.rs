use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Document serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
