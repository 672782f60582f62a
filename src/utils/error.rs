use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordsError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status} {status_text} from {url}")]
    HttpStatus {
        status: u16,
        status_text: String,
        url: String,
    },

    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// Coarse classification of a [`RecordsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network failure or non-2xx status.
    Transport,
    /// Response body was not the expected JSON.
    Parse,
    /// Bad endpoint, config file or option value.
    Config,
}

impl RecordsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RecordsError::Transport(_) | RecordsError::HttpStatus { .. } => ErrorKind::Transport,
            RecordsError::Decode(_) => ErrorKind::Parse,
            RecordsError::InvalidUrl(_)
            | RecordsError::Io(_)
            | RecordsError::ConfigError { .. }
            | RecordsError::ConfigValidationError { .. }
            | RecordsError::InvalidConfigValueError { .. } => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, RecordsError>;
