use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Entity of type '{0}' did not serialize to a JSON object")]
    NotAnObject(String),

    #[error("Unknown entity type: {0}")]
    UnknownEntityType(String),
}

pub type Result<T> = std::result::Result<T, Error>;
