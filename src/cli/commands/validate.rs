//! Validate config command implementation

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates after parsing, so a successful load means a
        // valid configuration
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Platform: {}", config.platform.base_url);
        println!("  Response Endpoint: {}", config.platform.response_endpoint);
        println!("  Project: {}", config.project.name);
        println!("  Output Directory: {}", config.output.directory);
        println!("  Write To Disk: {}", config.output.write_to_disk);
        println!(
            "  Timestamped Filenames: {}",
            config.output.timestamped_filenames
        );
        println!("  Result Format: {}", config.export.result_format);
        println!("  Max Wait: {}ms", config.export.max_wait_ms);
        println!("  Poll Interval: {}ms", config.export.poll_interval_ms);
        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args_creation() {
        let args = ValidateArgs {};
        let _ = format!("{args:?}");
    }
}
