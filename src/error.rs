use std::fmt;

/// Result type for Tensorbridge operations
pub type Result<T> = std::result::Result<T, TensorbridgeError>;

/// Main error type for the Tensorbridge library
///
/// The tracker layer defines no failure modes of its own: everything a
/// tracker returns originates in the underlying summary writer and is
/// passed through unmodified.
#[derive(Debug, Clone)]
pub enum TensorbridgeError {
    /// IO errors (file operations)
    IoError(String),

    /// Serialization/deserialization errors
    SerializationError(String),

    /// Invalid parameter value
    InvalidParameter {
        name: String,
        reason: String,
    },
}

impl fmt::Display for TensorbridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TensorbridgeError::IoError(msg) => write!(f, "IO error: {}", msg),
            TensorbridgeError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            TensorbridgeError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
        }
    }
}

impl std::error::Error for TensorbridgeError {}

// Conversion from std::io::Error
impl From<std::io::Error> for TensorbridgeError {
    fn from(err: std::io::Error) -> Self {
        TensorbridgeError::IoError(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for TensorbridgeError {
    fn from(err: serde_json::Error) -> Self {
        TensorbridgeError::SerializationError(err.to_string())
    }
}

// Helper functions for common error patterns
impl TensorbridgeError {
    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        TensorbridgeError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
