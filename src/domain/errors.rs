//! Domain error types
//!
//! This module defines the error hierarchy for Surveyor. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Surveyor error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum SurveyorError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Survey platform errors (transport, polling, archive)
    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    /// Tabular materialization errors
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// Artifact writing errors
    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Survey-platform specific errors
///
/// Errors that occur while talking to the remote survey platform.
/// These errors don't expose the HTTP client's types.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Failed to reach the platform at all
    #[error("Failed to connect to survey platform: {0}")]
    ConnectionFailed(String),

    /// Non-success HTTP status from the platform
    #[error("Platform returned status {status}: {body}")]
    Transport { status: u16, body: String },

    /// Export job did not complete within the polling deadline
    #[error("Export job incomplete after {waited_ms}ms ({percent_complete}% complete)")]
    Timeout {
        waited_ms: u64,
        percent_complete: f64,
    },

    /// Response body did not have the expected shape
    #[error("Invalid response from platform: {0}")]
    InvalidResponse(String),

    /// Result archive was not a single-entry zip
    #[error("Malformed result archive: {0}")]
    ArchiveFormat(String),
}

/// Tabular materializer errors
#[derive(Debug, Error)]
pub enum TableError {
    /// Payload shape the materializer cannot convert
    #[error("Unsupported payload: {0}")]
    UnsupportedPayload(String),
}

/// Artifact writer errors
#[derive(Debug, Error)]
pub enum OutputError {
    /// Serialization or I/O failure while writing an artifact
    #[error("Failed to write {path}: {reason}")]
    Write { path: String, reason: String },
}

// Conversion from std::io::Error
impl From<std::io::Error> for SurveyorError {
    fn from(err: std::io::Error) -> Self {
        SurveyorError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for SurveyorError {
    fn from(err: serde_json::Error) -> Self {
        SurveyorError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for SurveyorError {
    fn from(err: toml::de::Error) -> Self {
        SurveyorError::Configuration(format!("TOML parse error: {err}"))
    }
}
