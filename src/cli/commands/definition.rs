//! Definition command implementation
//!
//! Fetches a survey's definition (questions, answer choices) and writes it
//! to disk as pretty-printed JSON. Also used by the export command's
//! `--include-definition` flag.

use crate::adapters::platform::PlatformClient;
use crate::config::{load_config, secret_string, SurveyorConfig};
use crate::core::output::{artifact_path, write_json};
use crate::domain::{PlatformError, Result, SurveyId, SurveyorError};
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the definition command
#[derive(Args, Debug)]
pub struct DefinitionArgs {
    /// Survey id to fetch (e.g. SV_0abcdef123456789)
    #[arg(long, env = "SURVEYOR_SURVEY_ID")]
    pub survey_id: String,

    /// Display name used in artifact filenames (defaults to the survey id)
    #[arg(long)]
    pub survey_name: Option<String>,

    /// Fetch and report only; write nothing to disk
    #[arg(long)]
    pub no_write: bool,

    /// Include HHMMSS in artifact filenames
    #[arg(long)]
    pub timestamps: bool,

    /// Override the platform base URL from the config file
    #[arg(long)]
    pub base_url: Option<String>,

    /// Override the platform API token
    #[arg(long, env = "SURVEYOR_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Override the project name (output subfolder)
    #[arg(long)]
    pub project: Option<String>,

    /// Override the output directory
    #[arg(long)]
    pub output_dir: Option<String>,
}

impl DefinitionArgs {
    /// Execute the definition command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(survey_id = %self.survey_id, "Starting definition command");

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        if let Some(base_url) = &self.base_url {
            config.platform.base_url = base_url.clone();
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
                eprintln!("Failed to initialize platform client: {e}");
                return Ok(4);
            }
        };

        let write = config.output.write_to_disk && !self.no_write;
        let timestamped = config.output.timestamped_filenames || self.timestamps;

        match fetch_and_write_definition(
            &client,
            &config,
            &survey_id,
            &survey_name,
            write,
            timestamped,
        )
        .await
        {
            Ok(_) => Ok(0),
            Err(SurveyorError::Platform(PlatformError::ConnectionFailed(msg))) => {
                eprintln!("Could not reach the platform: {msg}");
                Ok(4)
            }
            Err(e) => {
                tracing::error!(error = %e, "Definition fetch failed");
                eprintln!("Definition fetch failed: {e}");
                Ok(5)
            }
        }
    }
}

/// Fetches the survey definition and, when requested, writes it as a JSON
/// artifact with type tag `survey`
///
/// Returns the written path, or `None` when writing is disabled.
pub(crate) async fn fetch_and_write_definition(
    client: &PlatformClient,
    config: &SurveyorConfig,
    survey_id: &SurveyId,
    survey_name: &str,
    write: bool,
    timestamped: bool,
) -> Result<Option<PathBuf>> {
    let definition = client.fetch_survey_definition(survey_id).await?;
    println!("✅ Retrieved definition for '{survey_name}'");

    if !write {
        tracing::info!(
            survey_name = %survey_name,
            "Write-to-disk disabled; definition not persisted"
        );
        return Ok(None);
    }

    let base_dir = PathBuf::from(&config.output.directory);
    let path = artifact_path(
        &base_dir,
        &config.project.name,
        survey_name,
        "survey",
        "json",
        timestamped,
        Local::now().naive_local(),
    )?;

    let written = write_json(&definition, &path)?;
    println!("  {} written to disk", written.display());
    Ok(Some(written))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_args_defaults() {
        let args = DefinitionArgs {
            survey_id: "SV_1".to_string(),
            survey_name: None,
            no_write: false,
            timestamps: false,
            base_url: None,
            api_token: None,
            project: None,
            output_dir: None,
        };

        assert_eq!(args.survey_id, "SV_1");
        assert!(!args.no_write);
        assert!(args.survey_name.is_none());
    }
}
