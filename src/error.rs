use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP status error: {0}")]
    HttpStatus(u16),

    #[error("Response decode error: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
