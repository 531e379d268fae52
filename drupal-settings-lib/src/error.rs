//! Error handling for settings resolution and generation.
//!
//! This module defines an error type covering the ways settings generation
//! can fail, from malformed hook arguments to filesystem problems.

use std::fmt;

/// Main error type for settings generation operations.
///
/// File-exists-on-create and file-absent-on-delete are deliberately not
/// represented here: those are informational outcomes, not failures.
#[derive(Debug, Clone)]
pub enum SettingsError {
    /// A CLI override token that starts with `--` but has no `=` separator
    MalformedArgument { token: String },

    /// Configuration errors (required key missing from the resolved set)
    ConfigError { message: String },

    /// File I/O errors when creating directories or writing/removing files
    FileError { path: String, message: String },
}

impl SettingsError {
    /// Create a new malformed argument error.
    pub fn malformed_argument<T: Into<String>>(token: T) -> Self {
        Self::MalformedArgument {
            token: token.into(),
        }
    }

    /// Create a new configuration error.
    pub fn config<M: Into<String>>(message: M) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a new file error.
    pub fn file_error<P: Into<String>, M: Into<String>>(path: P, message: M) -> Self {
        Self::FileError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedArgument { token } => {
                write!(f, "Malformed argument '{}': expected --name=value", token)
            }
            Self::ConfigError { message } => {
                write!(f, "Configuration error: {}", message)
            }
            Self::FileError { path, message } => {
                write!(f, "File error at '{}': {}", path, message)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
