//! Init command implementation
//!
//! Generates a sample configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "surveyor.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Surveyor configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Set SURVEYOR_API_TOKEN in your environment (or a .env file)");
                println!("  3. Validate configuration: surveyor validate-config");
                println!("  4. Run an export: surveyor export --survey-id SV_...");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Surveyor Configuration File
# Survey platform export tool

[application]
log_level = "info"

[platform]
base_url = "https://example.co1.survey.test/API/v3/"
api_token = "${SURVEYOR_API_TOKEN}"
response_endpoint = "responseexports"

[project]
name = "my_project"

[export]
max_wait_ms = 20000
poll_interval_ms = 500
use_labels = true
use_local_time = false

[output]
directory = "./data_out"
write_to_disk = true
timestamped_filenames = false

[logging]
local_enabled = false
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# Surveyor Configuration File
#
# This file contains all configuration options with examples and
# explanations. Values of the form ${VAR} are substituted from the
# environment at load time, and every key can also be overridden with a
# SURVEYOR_<SECTION>_<KEY> environment variable.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# Survey Platform
# ============================================================================
[platform]
# Base URL of the platform API; a trailing slash is added if missing
base_url = "https://example.co1.survey.test/API/v3/"

# API token sent in the x-api-token header (use an environment variable)
api_token = "${SURVEYOR_API_TOKEN}"

# Endpoint suffix for response exports, appended to the base URL
response_endpoint = "responseexports"

# Request body content type; "json" is the only supported value
content_type = "json"

# Per-request timeout in seconds
timeout_seconds = 60

# ============================================================================
# Project
# ============================================================================
[project]
# Groups related surveys under a single output subfolder
name = "my_project"

# ============================================================================
# Export Polling
# ============================================================================
[export]
# Result format requested from the platform; "json" is the only supported value
result_format = "json"

# Maximum total time to wait for export job completion
max_wait_ms = 20000

# Delay between job status polls
poll_interval_ms = 500

# Render answers as labels rather than numeric codes
use_labels = true

# Render timestamps in the survey's local time zone
use_local_time = false

# ============================================================================
# Output
# ============================================================================
[output]
# Base output directory; artifacts land in <directory>/<project name>/
directory = "./data_out"

# Write artifacts to disk (disable to only fetch and report)
write_to_disk = true

# Include HHMMSS in artifact filenames; without it, same-day exports of the
# same survey overwrite each other (last write wins)
timestamped_filenames = false

# Also keep the raw response JSON next to the tabular artifact
keep_raw_json = false

# ============================================================================
# Logging
# ============================================================================
[logging]
# Enable local JSON file logging in addition to console output
local_enabled = false

# Local log file path
local_path = "./logs"

# Log rotation (daily or hourly)
local_rotation = "daily"
"#
        .to_string()
    }
}
