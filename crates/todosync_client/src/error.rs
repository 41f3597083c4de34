//! Errors raised when a transport call cannot be completed.

use thiserror::Error;

/// The call never produced an envelope: the request failed, the server answered with a
/// non-success HTTP status, or the body could not be decoded.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Configuration error (missing env vars, invalid values)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request could not be sent or the connection failed
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Request failed with status code {status}: {body}")]
    Http { status: u16, body: String },

    /// Response body did not match the expected shape
    #[error("Serialization error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Read call whose body carried an error message instead of data
    #[error("{0}")]
    Rejected(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TransportError>;
