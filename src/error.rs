use std::path::PathBuf;

/// Errors that can occur while parsing, extracting, or normalizing Rock-Eval data
#[derive(Debug, thiserror::Error)]
pub enum RockEvalError {
    /// Bad instrument version, unsupported file type, or missing/invalid
    /// metadata required for normalization
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Raw content does not have the shape the extractor expects
    #[error("Structural error in [{section}]: {message}")]
    Structural {
        /// Section (or file) where the problem was found
        section: String,
        /// Human-readable description, including row or line index
        message: String,
    },

    /// A value that must be numeric could not be parsed as a float
    #[error("Malformed value in [{section}] at {location}: '{value}' is not a number")]
    MalformedValue {
        /// Section holding the value
        section: String,
        /// Field name, or row/column position for curve cells
        location: String,
        /// The offending text
        value: String,
    },

    /// I/O error reading a source file
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// I/O error while writing an export
    #[error("Write error: {0}")]
    Write(#[from] std::io::Error),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RockEvalError {
    pub(crate) fn structural(section: impl Into<String>, message: impl Into<String>) -> Self {
        RockEvalError::Structural {
            section: section.into(),
            message: message.into(),
        }
    }

    pub(crate) fn malformed(
        section: impl Into<String>,
        location: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        RockEvalError::MalformedValue {
            section: section.into(),
            location: location.into(),
            value: value.into(),
        }
    }
}

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, RockEvalError>;
