//! Error types for the console controller

/// Errors that can occur in the console controller
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Result type alias for console operations
pub type Result<T> = std::result::Result<T, ConsoleError>;
