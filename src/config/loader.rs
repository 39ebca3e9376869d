//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::SurveyorConfig;
use super::secret::secret_string;
use crate::domain::errors::SurveyorError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`SurveyorConfig`]
/// 4. Applies environment variable overrides (`SURVEYOR_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, TOML parsing fails, a
/// referenced environment variable is not set, or validation fails.
pub fn load_config(path: impl AsRef<Path>) -> Result<SurveyorConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SurveyorError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        SurveyorError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: SurveyorConfig = toml::from_str(&contents)
        .map_err(|e| SurveyorError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        SurveyorError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// Comment lines are passed through untouched. Returns an error naming every
/// referenced variable that is not set.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("static regex");
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        // Skip comment lines - don't process env vars in comments
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(SurveyorError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the `SURVEYOR_*` prefix
///
/// Environment variables follow the pattern `SURVEYOR_<SECTION>_<KEY>`,
/// for example `SURVEYOR_PLATFORM_BASE_URL` or `SURVEYOR_OUTPUT_DIRECTORY`.
fn apply_env_overrides(config: &mut SurveyorConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("SURVEYOR_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Platform overrides
    if let Ok(val) = std::env::var("SURVEYOR_PLATFORM_BASE_URL") {
        config.platform.base_url = val;
    }
    if let Ok(val) = std::env::var("SURVEYOR_PLATFORM_API_TOKEN") {
        config.platform.api_token = secret_string(val);
    }
    if let Ok(val) = std::env::var("SURVEYOR_PLATFORM_RESPONSE_ENDPOINT") {
        config.platform.response_endpoint = val;
    }
    if let Ok(val) = std::env::var("SURVEYOR_PLATFORM_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.platform.timeout_seconds = timeout;
        }
    }

    // Project overrides
    if let Ok(val) = std::env::var("SURVEYOR_PROJECT_NAME") {
        config.project.name = val;
    }

    // Export overrides
    if let Ok(val) = std::env::var("SURVEYOR_EXPORT_MAX_WAIT_MS") {
        if let Ok(ms) = val.parse() {
            config.export.max_wait_ms = ms;
        }
    }
    if let Ok(val) = std::env::var("SURVEYOR_EXPORT_POLL_INTERVAL_MS") {
        if let Ok(ms) = val.parse() {
            config.export.poll_interval_ms = ms;
        }
    }
    if let Ok(val) = std::env::var("SURVEYOR_EXPORT_USE_LABELS") {
        config.export.use_labels = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("SURVEYOR_EXPORT_USE_LOCAL_TIME") {
        config.export.use_local_time = val.parse().unwrap_or(false);
    }

    // Output overrides
    if let Ok(val) = std::env::var("SURVEYOR_OUTPUT_DIRECTORY") {
        config.output.directory = val;
    }
    if let Ok(val) = std::env::var("SURVEYOR_OUTPUT_WRITE_TO_DISK") {
        config.output.write_to_disk = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("SURVEYOR_OUTPUT_TIMESTAMPED_FILENAMES") {
        config.output.timestamped_filenames = val.parse().unwrap_or(false);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("SURVEYOR_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("SURVEYOR_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("SURVEYOR_TEST_VAR", "test_value");
        let input = "api_token = \"${SURVEYOR_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "api_token = \"test_value\"\n");
        std::env::remove_var("SURVEYOR_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("SURVEYOR_MISSING_VAR");
        let input = "api_token = \"${SURVEYOR_MISSING_VAR}\"";
        let result = substitute_env_vars(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("SURVEYOR_COMMENTED_VAR");
        let input = "# api_token = \"${SURVEYOR_COMMENTED_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${SURVEYOR_COMMENTED_VAR}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "info"

[platform]
base_url = "https://example.co1.survey.test/API/v3/"
api_token = "tok-123"

[project]
name = "customer_feedback"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(
            config.platform.base_url,
            "https://example.co1.survey.test/API/v3/"
        );
        assert_eq!(config.project.name, "customer_feedback");
        assert_eq!(config.platform.response_endpoint, "responseexports");
        assert_eq!(config.export.max_wait_ms, 20_000);
    }

    #[test]
    fn test_load_config_invalid_values_rejected() {
        let toml_content = r#"
[platform]
base_url = "not-a-url"
api_token = "tok-123"

[project]
name = "p"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let result = load_config(temp_file.path());
        assert!(result.is_err());
    }
}
