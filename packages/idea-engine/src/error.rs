/// Error types for the idea generation engine
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdeaEngineError {
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Suggestion request failed: {0}")]
    RequestFailed(String),

    #[error("Model returned no usable ideas")]
    EmptyResponse,

    #[error("Request timed out after {0}ms")]
    Timeout(u64),

    #[error("Registry error: {0}")]
    Registry(#[from] crate::registry::RegistryError),
}

pub type Result<T> = std::result::Result<T, IdeaEngineError>;
