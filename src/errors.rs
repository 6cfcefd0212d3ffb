use std::fmt;

#[derive(Debug)]
#[allow(dead_code)]
pub enum AppError {
    /// Network request failed
    NetworkError(String),
    /// Failed to decode the bulletin document or serialize a report
    ParseError(String),
    /// Invalid URL format
    UrlError(String),
    /// Date bound validation failed
    DateValidationError { date: String, reason: String },
    /// Invalid input format
    InvalidInput(String),
    /// IO operation failed
    IoError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NetworkError(msg) => write!(f, "Network error: {msg}"),
            AppError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            AppError::UrlError(msg) => write!(f, "Invalid URL: {msg}"),
            AppError::DateValidationError { date, reason } => {
                write!(f, "Date '{date}' is not valid: {reason}")
            }
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            AppError::IoError(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

// Conversion implementations for common errors
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::NetworkError(err.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::UrlError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

// Custom type alias for Results in this application
pub type AppResult<T> = Result<T, AppError>;
