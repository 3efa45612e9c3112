//! Error handling for Clipcheck

use thiserror::Error;

/// Result type alias for Clipcheck operations
pub type Result<T> = std::result::Result<T, ClipcheckError>;

/// Main error type for Clipcheck operations
#[derive(Error, Debug)]
pub enum ClipcheckError {
    // File Errors
    #[error("File not found: {path}")]
    FileNotFound {
        path: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Invalid audio file: {reason}")]
    InvalidAudio {
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Unsupported audio format: {format}")]
    UnsupportedFormat { format: String },

    // Audio Validation Errors
    #[error("Audio contains no samples")]
    EmptyAudio,

    #[error("Unsupported bit depth: {bits} bits per sample")]
    UnsupportedBitDepth { bits: u16 },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClipcheckError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            ClipcheckError::FileNotFound { .. } => "FILE_NOT_FOUND",
            ClipcheckError::InvalidAudio { .. } => "INVALID_AUDIO",
            ClipcheckError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            ClipcheckError::EmptyAudio => "EMPTY_AUDIO",
            ClipcheckError::UnsupportedBitDepth { .. } => "UNSUPPORTED_BIT_DEPTH",
            ClipcheckError::Io(_) => "IO_ERROR",
            ClipcheckError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Whether retrying with corrected input can succeed
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ClipcheckError::FileNotFound { .. }
                | ClipcheckError::InvalidAudio { .. }
                | ClipcheckError::UnsupportedFormat { .. }
                | ClipcheckError::UnsupportedBitDepth { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = ClipcheckError::FileNotFound {
            path: "test.wav".to_string(),
            source: None,
        };
        assert_eq!(err.error_code(), "FILE_NOT_FOUND");
        assert_eq!(ClipcheckError::EmptyAudio.error_code(), "EMPTY_AUDIO");
    }

    #[test]
    fn test_recoverable() {
        let err = ClipcheckError::UnsupportedFormat {
            format: "float WAV".to_string(),
        };
        assert!(err.is_recoverable());
        assert!(!ClipcheckError::EmptyAudio.is_recoverable());
    }

    #[test]
    fn test_display_messages() {
        let err = ClipcheckError::UnsupportedBitDepth { bits: 12 };
        assert_eq!(err.to_string(), "Unsupported bit depth: 12 bits per sample");
    }
}
