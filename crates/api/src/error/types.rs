//! Error type definitions for cipher and configuration operations

use thiserror::Error;

/// Primary error type for teacrypt operations
///
/// The variants mirror the failure kinds a caller can act on: bad key or
/// length input to the engine, malformed configuration text, and missing
/// resources such as the configuration file or the input image.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key error
    #[error("Invalid key: {context}: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Malformed or missing configuration (mode, key, IV, line count)
    #[error("Configuration error: {context}: {message}")]
    Configuration {
        context: &'static str,
        message: String,
    },

    /// Missing or unreadable input resource
    #[error("Resource error: {context}: {message}")]
    Resource {
        context: &'static str,
        message: String,
    },

    /// Other error
    #[error("{context}: {message}")]
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for teacrypt operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create a configuration error
    pub fn config(context: &'static str, message: impl Into<String>) -> Self {
        Self::Configuration {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create a resource error
    pub fn resource(context: &'static str, message: impl Into<String>) -> Self {
        Self::Resource {
            context,
            message: message.into(),
        }
    }

    /// Returns true for errors caused by user-supplied configuration
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. } | Self::InvalidKey { .. })
    }

    /// Replace the context of an existing error, keeping its payload
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::Configuration { message, .. } => Self::Configuration { context, message },
            Self::Resource { message, .. } => Self::Resource { context, message },
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }
}
