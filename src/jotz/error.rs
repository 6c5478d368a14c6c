use crate::model::Area;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JotzError {
    #[error("file '{name}' already exists in the {area} area")]
    AlreadyExists { area: Area, name: String },

    #[error("file '{name}' does not exist in the {area} area")]
    NotFound { area: Area, name: String },

    #[error("could not create file '{name}': {source}")]
    CreateFailed {
        name: String,
        source: std::io::Error,
    },

    #[error("write to file '{name}' failed: {source}")]
    WriteFailed {
        name: String,
        source: std::io::Error,
    },

    #[error("read from file '{name}' failed: {source}")]
    ReadFailed {
        name: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, JotzError>;
