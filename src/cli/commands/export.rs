//! Export command implementation
//!
//! Drives the full response-export flow: submit and poll the export job,
//! materialize the payload into a table, and write the artifacts.

use crate::adapters::platform::{ExportFilters, ExportRequest, PlatformClient};
use crate::cli::commands::definition::fetch_and_write_definition;
use crate::config::{load_config, secret_string, SurveyorConfig};
use crate::core::output::{artifact_path, write_frame, write_json};
use crate::core::table::TableSource;
use crate::domain::{PlatformError, SurveyId, SurveyorError};
use chrono::Local;
use clap::Args;
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Survey id to export (e.g. SV_0abcdef123456789)
    #[arg(long, env = "SURVEYOR_SURVEY_ID")]
    pub survey_id: String,

    /// Display name used in artifact filenames (defaults to the survey id)
    #[arg(long)]
    pub survey_name: Option<String>,

    /// Also fetch and write the survey definition
    #[arg(long)]
    pub include_definition: bool,

    /// Fetch and report only; write nothing to disk
    #[arg(long)]
    pub no_write: bool,

    /// Include HHMMSS in artifact filenames
    #[arg(long)]
    pub timestamps: bool,

    /// Override the platform base URL from the config file
    #[arg(long)]
    pub base_url: Option<String>,

    /// Override the response-export endpoint suffix
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Override the platform API token
    #[arg(long, env = "SURVEYOR_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Override the project name (output subfolder)
    #[arg(long)]
    pub project: Option<String>,

    /// Override the output directory
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Cursor: only responses recorded after this response id
    #[arg(long)]
    pub last_response_id: Option<String>,

    /// Only responses recorded at or after this instant (ISO 8601)
    #[arg(long)]
    pub start_date: Option<String>,

    /// Only responses recorded before this instant (ISO 8601)
    #[arg(long)]
    pub end_date: Option<String>,

    /// Maximum number of responses to export
    #[arg(long)]
    pub limit: Option<u64>,

    /// Restrict the export to these question ids (comma-separated)
    #[arg(long)]
    pub included_question_ids: Option<String>,

    /// Render answers as numeric codes instead of labels
    #[arg(long)]
    pub use_codes: bool,

    /// Render timestamps in the survey's local time zone
    #[arg(long)]
    pub local_time: bool,

    /// Override the polling deadline in milliseconds
    #[arg(long)]
    pub max_wait_ms: Option<u64>,

    /// Override the poll interval in milliseconds
    #[arg(long)]
    pub poll_interval_ms: Option<u64>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(survey_id = %self.survey_id, "Starting export command");

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };
        self.apply_overrides(&mut config);

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        let survey_id = match SurveyId::new(&self.survey_id) {
            Ok(id) => id,
            Err(e) => {
                eprintln!("Invalid survey id: {e}");
                return Ok(2);
            }
        };
        let survey_name = self
            .survey_name
            .clone()
            .unwrap_or_else(|| survey_id.to_string());

        let client = match PlatformClient::new(&config.platform) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create platform client");
                eprintln!("Failed to initialize platform client: {e}");
                return Ok(4);
            }
        };

        let request = self.build_request(&config, survey_id.clone());

        println!("🚀 Exporting responses for '{survey_name}' ({survey_id})...");

        let responses = match client.fetch_responses(&request).await {
            Ok(r) => r,
            Err(SurveyorError::Platform(PlatformError::ConnectionFailed(msg))) => {
                tracing::error!(error = %msg, "Could not reach the platform");
                eprintln!("Could not reach the platform: {msg}");
                return Ok(4);
            }
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                eprintln!("Export failed: {e}");
                return Ok(5);
            }
        };

        println!("✅ Retrieved {} responses", responses.len());

        let write_to_disk = config.output.write_to_disk && !self.no_write;
        if write_to_disk {
            if let Err(e) = self.write_artifacts(&config, &survey_name, &responses) {
                tracing::error!(error = %e, "Failed to write artifacts");
                eprintln!("Failed to write artifacts: {e}");
                return Ok(5);
            }
        } else {
            tracing::info!(
                survey_name = %survey_name,
                count = responses.len(),
                "Write-to-disk disabled; responses not persisted"
            );
        }

        if self.include_definition {
            let timestamped = config.output.timestamped_filenames || self.timestamps;
            if let Err(e) = fetch_and_write_definition(
                &client,
                &config,
                &survey_id,
                &survey_name,
                write_to_disk,
                timestamped,
            )
            .await
            {
                tracing::error!(error = %e, "Failed to fetch survey definition");
                eprintln!("Failed to fetch survey definition: {e}");
                return Ok(5);
            }
        }

        Ok(0)
    }

    /// Apply CLI overrides onto the file configuration
    fn apply_overrides(&self, config: &mut SurveyorConfig) {
        if let Some(base_url) = &self.base_url {
            tracing::info!(base_url = %base_url, "Overriding base URL from CLI");
            config.platform.base_url = base_url.clone();
        }
        if let Some(endpoint) = &self.endpoint {
            tracing::info!(endpoint = %endpoint, "Overriding response endpoint from CLI");
            config.platform.response_endpoint = endpoint.clone();
        }
        if let Some(token) = &self.api_token {
            config.platform.api_token = secret_string(token.clone());
        }
        if let Some(project) = &self.project {
            config.project.name = project.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output.directory = dir.clone();
        }
        if self.timestamps {
            config.output.timestamped_filenames = true;
        }
        if let Some(ms) = self.max_wait_ms {
            config.export.max_wait_ms = ms;
        }
        if let Some(ms) = self.poll_interval_ms {
            config.export.poll_interval_ms = ms;
        }
    }

    /// Build the export request from configuration plus CLI filters
    fn build_request(&self, config: &SurveyorConfig, survey_id: SurveyId) -> ExportRequest {
        let included_question_ids = self.included_question_ids.as_ref().map(|ids| {
            ids.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        ExportRequest {
            survey_id,
            result_format: config.export.result_format.clone(),
            filters: ExportFilters {
                last_response_id: self.last_response_id.clone(),
                start_date: self.start_date.clone(),
                end_date: self.end_date.clone(),
                limit: self.limit,
                included_question_ids,
                use_labels: Some(if self.use_codes {
                    false
                } else {
                    config.export.use_labels
                }),
                use_local_time: Some(self.local_time || config.export.use_local_time),
            },
            max_wait: Duration::from_millis(config.export.max_wait_ms),
            poll_interval: Duration::from_millis(config.export.poll_interval_ms),
        }
    }

    /// Materialize the responses and write the tabular (and optionally raw
    /// JSON) artifacts
    fn write_artifacts(
        &self,
        config: &SurveyorConfig,
        survey_name: &str,
        responses: &[Value],
    ) -> crate::domain::Result<()> {
        let frame = TableSource::Records(responses.to_vec()).materialize()?;

        let base_dir = PathBuf::from(&config.output.directory);
        let artifact_type = response_artifact_type(&config.platform.response_endpoint);
        let timestamped = config.output.timestamped_filenames || self.timestamps;
        let now = Local::now().naive_local();

        let path = artifact_path(
            &base_dir,
            &config.project.name,
            survey_name,
            artifact_type,
            "feather",
            timestamped,
            now,
        )?;
        let written = write_frame(&frame, &path)?;
        println!("  {} written to disk", written.display());

        if config.output.keep_raw_json {
            let raw_path = artifact_path(
                &base_dir,
                &config.project.name,
                survey_name,
                artifact_type,
                "json",
                timestamped,
                now,
            )?;
            let written = write_json(&Value::Array(responses.to_vec()), &raw_path)?;
            println!("  {} written to disk", written.display());
        }

        Ok(())
    }
}

/// Artifact type tag derived from the endpoint suffix (its first path
/// segment), e.g. `responseexports`
fn response_artifact_type(endpoint: &str) -> &str {
    endpoint
        .trim_matches('/')
        .split('/')
        .next()
        .unwrap_or("responseexports")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        ApplicationConfig, ExportSettings, LoggingConfig, OutputConfig, PlatformConfig,
        ProjectConfig,
    };

    fn args() -> ExportArgs {
        ExportArgs {
            survey_id: "SV_1".to_string(),
            survey_name: None,
            include_definition: false,
            no_write: false,
            timestamps: false,
            base_url: None,
            endpoint: None,
            api_token: None,
            project: None,
            output_dir: None,
            last_response_id: None,
            start_date: None,
            end_date: None,
            limit: None,
            included_question_ids: None,
            use_codes: false,
            local_time: false,
            max_wait_ms: None,
            poll_interval_ms: None,
        }
    }

    fn config() -> SurveyorConfig {
        SurveyorConfig {
            application: ApplicationConfig::default(),
            platform: PlatformConfig {
                base_url: "https://example.test/API/v3/".to_string(),
                api_token: secret_string("tok".to_string()),
                response_endpoint: "responseexports".to_string(),
                content_type: "json".to_string(),
                timeout_seconds: 30,
            },
            project: ProjectConfig {
                name: "proj".to_string(),
            },
            export: ExportSettings::default(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_response_artifact_type() {
        assert_eq!(response_artifact_type("responseexports"), "responseexports");
        assert_eq!(response_artifact_type("responseexports/"), "responseexports");
        assert_eq!(response_artifact_type("exports/v2"), "exports");
    }

    #[test]
    fn test_build_request_defaults() {
        let request = args().build_request(&config(), SurveyId::new("SV_1").unwrap());

        assert_eq!(request.result_format, "json");
        assert_eq!(request.max_wait, Duration::from_millis(20_000));
        assert_eq!(request.poll_interval, Duration::from_millis(500));
        assert_eq!(request.filters.use_labels, Some(true));
        assert_eq!(request.filters.use_local_time, Some(false));
    }

    #[test]
    fn test_build_request_use_codes_flag() {
        let mut args = args();
        args.use_codes = true;
        let request = args.build_request(&config(), SurveyId::new("SV_1").unwrap());
        assert_eq!(request.filters.use_labels, Some(false));
    }

    #[test]
    fn test_build_request_splits_question_ids() {
        let mut args = args();
        args.included_question_ids = Some("QID1, QID2 ,,QID3".to_string());
        let request = args.build_request(&config(), SurveyId::new("SV_1").unwrap());
        assert_eq!(
            request.filters.included_question_ids,
            Some(vec![
                "QID1".to_string(),
                "QID2".to_string(),
                "QID3".to_string()
            ])
        );
    }

    #[test]
    fn test_apply_overrides() {
        let mut args = args();
        args.base_url = Some("https://other.test/API/v3/".to_string());
        args.project = Some("other_project".to_string());
        args.max_wait_ms = Some(5);
        args.timestamps = true;

        let mut config = config();
        args.apply_overrides(&mut config);

        assert_eq!(config.platform.base_url, "https://other.test/API/v3/");
        assert_eq!(config.project.name, "other_project");
        assert_eq!(config.export.max_wait_ms, 5);
        assert!(config.output.timestamped_filenames);
    }
}
