use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cache encode error: {0}")]
    CacheEncode(#[from] bincode::error::EncodeError),

    #[error("Cache decode error: {0}")]
    CacheDecode(#[from] bincode::error::DecodeError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unrecognized reference: {0}")]
    UnknownReference(String),
}

impl Error {
    /// Short sentence suitable for showing to an end user.
    pub fn user_message(&self) -> String {
        match self {
            Error::Http(e) if e.is_timeout() => {
                "The request timed out. The scripture service might be slow right now.".to_string()
            }
            Error::Http(e) if e.is_connect() || e.is_request() => {
                "Connection Error. Please check your internet connection and try again".to_string()
            }
            Error::Http(e) if e.is_decode() => {
                "Received an unexpected response format from the server.".to_string()
            }
            Error::Json(_) => "Received an unexpected response format from the server.".to_string(),
            Error::Http(_) | Error::Status { .. } => {
                "A network error occurred. Please try again later.".to_string()
            }
            Error::UnknownReference(text) => format!("No passage found for '{}'", text),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
