//! Error handling for scan conversion.
//!
//! The ingestion core is permissive and absorbs malformed lines; the variants
//! here cover the few conditions that must stop a conversion.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Metadata invalid in file: {path} - {reason}")]
    MetadataInvalid { path: PathBuf, reason: String },

    #[error("Invalid field dimensions: {points} points x {profiles} profiles")]
    InvalidDimensions { points: usize, profiles: usize },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Writing output failed for file: {path} - {reason}")]
    Output { path: PathBuf, reason: String },
}

impl ConvertError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an output error, keeping the underlying cause as text
    pub fn output(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        Self::Output {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
