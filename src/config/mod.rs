//! Configuration management for Surveyor.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation with support for:
//!
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `SURVEYOR_*` environment overrides
//! - Default values for optional settings
//! - Type-safe configuration structs with validation
//!
//! # Example Configuration
//!
//! ```toml
//! [platform]
//! base_url = "https://example.co1.survey.test/API/v3/"
//! api_token = "${SURVEYOR_API_TOKEN}"
//! response_endpoint = "responseexports"
//!
//! [project]
//! name = "customer_feedback"
//!
//! [export]
//! max_wait_ms = 20000
//! poll_interval_ms = 500
//!
//! [output]
//! directory = "./data_out"
//! timestamped_filenames = false
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use surveyor::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("surveyor.toml")?;
//! println!("Platform: {}", config.platform.base_url);
//! println!("Project: {}", config.project.name);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, ExportSettings, LoggingConfig, OutputConfig, PlatformConfig, ProjectConfig,
    SurveyorConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
