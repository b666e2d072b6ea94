//! Error types for the harness.
//!
//! Configuration errors are fatal and reported before any request is made.
//! Transport errors mean no HTTP response was received; a response with a
//! non-2xx status is not an error here, it is an `ApiResponse` the caller
//! asserts against.

use std::fmt;

/// Main error type for harness operations.
#[derive(Debug, Clone, PartialEq)]
pub enum HarnessError {
    /// Settings file could not be read.
    SettingsIo {
        context: String,
        reason: String,
    },
    /// Settings file contents could not be parsed as a flat key-value map.
    InvalidSettings {
        context: String,
        reason: String,
    },
    /// A required setting is absent from both the environment and the file.
    SettingMissing {
        key: String,
    },
    /// The request never produced an HTTP response (connect, DNS, timeout).
    Transport {
        context: String,
        reason: String,
    },
    /// A received response body could not be decoded as JSON.
    InvalidBody {
        context: String,
        reason: String,
    },
}

/// Error type for the stub server's in-memory user directory.
#[derive(Debug, Clone, PartialEq)]
pub enum UserStoreError {
    UserNotFound { id: u64 },
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessError::SettingsIo { context, reason } => {
                write!(f, "Settings I/O error in {context}: {reason}")
            }
            HarnessError::InvalidSettings { context, reason } => {
                write!(f, "Invalid settings in {context}: {reason}")
            }
            HarnessError::SettingMissing { key } => {
                write!(
                    f,
                    "Setting '{key}' not set in environment or settings file"
                )
            }
            HarnessError::Transport { context, reason } => {
                write!(f, "Transport error in {context}: {reason}")
            }
            HarnessError::InvalidBody { context, reason } => {
                write!(f, "Invalid response body in {context}: {reason}")
            }
        }
    }
}

impl fmt::Display for UserStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserStoreError::UserNotFound { id } => write!(f, "User {id} not found"),
        }
    }
}

impl std::error::Error for HarnessError {}
impl std::error::Error for UserStoreError {}

impl HarnessError {
    /// True for errors that abort the harness before any request is issued.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            HarnessError::SettingsIo { .. }
                | HarnessError::InvalidSettings { .. }
                | HarnessError::SettingMissing { .. }
        )
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, HarnessError::Transport { .. })
    }

    pub fn from_io_error(e: std::io::Error, context: &str) -> Self {
        HarnessError::SettingsIo {
            context: context.to_string(),
            reason: e.to_string(),
        }
    }

    pub fn from_parse_error(e: impl fmt::Display, context: &str) -> Self {
        HarnessError::InvalidSettings {
            context: context.to_string(),
            reason: e.to_string(),
        }
    }

    pub fn from_transport_error(e: impl fmt::Display, context: &str) -> Self {
        HarnessError::Transport {
            context: context.to_string(),
            reason: e.to_string(),
        }
    }

    pub fn from_decode_error(e: impl fmt::Display, context: &str) -> Self {
        HarnessError::InvalidBody {
            context: context.to_string(),
            reason: e.to_string(),
        }
    }
}
