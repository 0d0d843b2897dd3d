//! Error types for the Folio core library.

use thiserror::Error;

/// Result type alias using `FolioError`.
pub type Result<T> = std::result::Result<T, FolioError>;

/// Errors raised while wiring or driving the page components.
#[derive(Error, Debug)]
pub enum FolioError {
    /// A selector from the markup contract matched nothing.
    #[error("Missing element: no match for `{selector}`")]
    MissingElement { selector: String },

    /// A browser API call failed.
    #[error("JavaScript error: {0}")]
    Js(String),

    /// Configuration validation error.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Error reported by the config crate while layering sources.
    #[error("Config crate error: {0}")]
    ConfigCrate(#[from] config::ConfigError),
}

/// Failures surfaced by the mail-sending collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MailError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("Mail service rejected the request: HTTP {status} {text}")]
    Status { status: u16, text: String },

    /// The request body could not be encoded.
    #[error("Encode error: {0}")]
    Encode(String),
}

impl FolioError {
    /// Create a missing element error for a selector.
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement {
            selector: selector.into(),
        }
    }

    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a browser API error.
    pub fn js(message: impl Into<String>) -> Self {
        Self::Js(message.into())
    }
}
