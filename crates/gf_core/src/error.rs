use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Error response code: {0}")]
    HttpStatus(u16),

    #[error("Timed out after {0}ms")]
    Timeout(u128),

    #[error("No value for {0}")]
    MissingField(String),

    #[error("Value at {key} is not {expected}")]
    TypeMismatch { key: String, expected: &'static str },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
