//! Configuration schema types
//!
//! This module defines the configuration structure that maps to the
//! `surveyor.toml` file, one struct per section with validation on each.

use crate::config::SecretString;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

/// Main Surveyor configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyorConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Survey platform connection settings
    pub platform: PlatformConfig,

    /// Project settings (output grouping)
    pub project: ProjectConfig,

    /// Export polling and filter defaults
    #[serde(default)]
    pub export: ExportSettings,

    /// Output artifact settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SurveyorConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.platform.validate()?;
        self.project.validate()?;
        self.export.validate()?;
        self.output.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Survey platform connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Base URL of the platform API (normalized to a trailing `/` by the client)
    pub base_url: String,

    /// API token sent in the `x-api-token` header
    /// Stored securely in memory and automatically zeroized on drop
    pub api_token: SecretString,

    /// Endpoint suffix for response exports, appended to the base URL
    #[serde(default = "default_response_endpoint")]
    pub response_endpoint: String,

    /// Content type subtype for request bodies ("json" is the only supported value)
    #[serde(default = "default_content_type")]
    pub content_type: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl PlatformConfig {
    fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("platform.base_url cannot be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("platform.base_url must start with http:// or https://".to_string());
        }

        if self.api_token.expose_secret().is_empty() {
            return Err("platform.api_token cannot be empty".to_string());
        }

        if self.response_endpoint.trim().is_empty()
            || self.response_endpoint.contains(char::is_whitespace)
        {
            return Err(format!(
                "platform.response_endpoint must be a non-empty path segment, got '{}'",
                self.response_endpoint
            ));
        }

        if self.content_type != "json" {
            return Err(format!(
                "platform.content_type must be 'json' (got '{}'); other formats are not supported",
                self.content_type
            ));
        }

        if self.timeout_seconds == 0 {
            return Err("platform.timeout_seconds must be > 0".to_string());
        }

        Ok(())
    }
}

/// Project configuration
///
/// The project name groups related surveys under a single output subfolder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name (output subfolder under the output directory)
    pub name: String,
}

impl ProjectConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("project.name cannot be empty".to_string());
        }
        if self.name.contains('/') || self.name.contains('\\') {
            return Err(format!(
                "project.name must be a single path component, got '{}'",
                self.name
            ));
        }
        Ok(())
    }
}

/// Export polling and filter defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Result format requested from the platform ("json" is the only supported value)
    #[serde(default = "default_result_format")]
    pub result_format: String,

    /// Maximum total time to wait for job completion, in milliseconds
    #[serde(default = "default_max_wait_ms")]
    pub max_wait_ms: u64,

    /// Delay between status polls, in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Render answers as labels rather than numeric codes
    #[serde(default = "default_true")]
    pub use_labels: bool,

    /// Render timestamps in the survey's local time zone
    #[serde(default)]
    pub use_local_time: bool,
}

impl ExportSettings {
    fn validate(&self) -> Result<(), String> {
        if self.result_format.to_lowercase() != "json" {
            return Err(format!(
                "export.result_format must be 'json' (got '{}'); other formats are not supported",
                self.result_format
            ));
        }

        if self.poll_interval_ms == 0 {
            return Err("export.poll_interval_ms must be >= 1".to_string());
        }

        Ok(())
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            result_format: default_result_format(),
            max_wait_ms: default_max_wait_ms(),
            poll_interval_ms: default_poll_interval_ms(),
            use_labels: true,
            use_local_time: false,
        }
    }
}

/// Output artifact configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Base output directory; artifacts land in `<directory>/<project.name>/`
    #[serde(default = "default_output_directory")]
    pub directory: String,

    /// Write artifacts to disk (disable to only fetch and report)
    #[serde(default = "default_true")]
    pub write_to_disk: bool,

    /// Include HHMMSS in artifact filenames
    #[serde(default)]
    pub timestamped_filenames: bool,

    /// Also keep the raw response JSON next to the tabular artifact
    #[serde(default)]
    pub keep_raw_json: bool,
}

impl OutputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.directory.trim().is_empty() {
            return Err("output.directory cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            write_to_disk: true,
            timestamped_filenames: false,
            keep_raw_json: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log file path
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy ("daily" or "hourly")
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_response_endpoint() -> String {
    "responseexports".to_string()
}

fn default_content_type() -> String {
    "json".to_string()
}

fn default_timeout_seconds() -> u64 {
    60
}

fn default_result_format() -> String {
    "json".to_string()
}

fn default_max_wait_ms() -> u64 {
    20_000
}

fn default_poll_interval_ms() -> u64 {
    500
}

fn default_true() -> bool {
    true
}

fn default_output_directory() -> String {
    "./data_out".to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
