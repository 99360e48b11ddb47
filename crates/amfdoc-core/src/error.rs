//! Error handling for the amfdoc library.
//!
//! This module defines the main error type `Error` used by the loaders and
//! lookups of the library, along with a convenient `Result` type alias. The
//! label and snippet computations themselves never fail; they degrade to
//! `None` or empty output instead.
//!
//! # Examples
//!
//! ```
//! use amfdoc_core::error::{Error, Result};
//!
//! fn find_operation(id: &str) -> Result<()> {
//!     Err(Error::model(format!("Operation '{}' not found", id)))
//! }
//!
//! assert!(find_operation("missing").is_err());
//! ```

use thiserror::Error;

/// Result type for amfdoc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for amfdoc operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API model could not be loaded or does not contain a requested node
    #[error("API model error: {0}")]
    Model(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new API model error
    pub fn model<S: Into<String>>(msg: S) -> Self {
        Self::Model(msg.into())
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Config(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Config(s)
    }
}
