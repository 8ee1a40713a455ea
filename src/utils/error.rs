use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("No equipments found: {message}")]
    EmptyResult { message: String },

    #[error("Catalog request failed: {0}")]
    Catalog(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Render error: {message}")]
    Render { message: String },
}

impl CompareError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn empty_result(message: impl Into<String>) -> Self {
        Self::EmptyResult {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// True for malformed requests (a 400-equivalent at the transport layer).
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// True when well-formed ids resolved to nothing (a 404-equivalent).
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::EmptyResult { .. })
    }
}

pub type Result<T> = std::result::Result<T, CompareError>;
