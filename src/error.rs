//! Error types for print-divider

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for print-divider
#[derive(Debug, Error)]
pub enum PrintDividerError {
    #[error("No active editor found!")]
    NoActiveEditor,

    #[error("Invalid cursor position: {0}")]
    InvalidPosition(String),

    #[error("Cannot open document {}: {}", .path.display(), .source)]
    Document {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl PrintDividerError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PrintDividerError::NoActiveEditor => 2,
            PrintDividerError::InvalidPosition(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            PrintDividerError::InvalidPosition(msg) => format!(
                "Invalid cursor position: {}\n\n\
                Lines and columns are 1-based, e.g. --line 12 --column 5\n\
                Omit both to insert at the end of the document",
                msg
            ),
            PrintDividerError::Config(msg) if msg.contains("parse") => {
                format!(
                    "{}\n\n\
                    Expected a TOML file such as:\n\
                    token = \"=\"",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using PrintDividerError
pub type Result<T> = std::result::Result<T, PrintDividerError>;
