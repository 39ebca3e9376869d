//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Surveyor using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Surveyor - survey platform export tool
#[derive(Parser, Debug)]
#[command(name = "surveyor")]
#[command(version, about, long_about = None)]
#[command(author = "Surveyor Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "surveyor.toml", env = "SURVEYOR_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SURVEYOR_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export survey responses to a tabular artifact
    Export(commands::export::ExportArgs),

    /// Fetch a survey's definition (questions, answer choices)
    Definition(commands::definition::DefinitionArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from(["surveyor", "export", "--survey-id", "SV_1"]);
        assert_eq!(cli.config, "surveyor.toml");
        assert!(matches!(cli.command, Commands::Export(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from([
            "surveyor",
            "--config",
            "custom.toml",
            "export",
            "--survey-id",
            "SV_1",
        ]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from([
            "surveyor",
            "--log-level",
            "debug",
            "definition",
            "--survey-id",
            "SV_1",
        ]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
        assert!(matches!(cli.command, Commands::Definition(_)));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["surveyor", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["surveyor", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }

    #[test]
    fn test_cli_parse_export_filters() {
        let cli = Cli::parse_from([
            "surveyor",
            "export",
            "--survey-id",
            "SV_1",
            "--limit",
            "100",
            "--use-codes",
            "--include-definition",
        ]);
        let Commands::Export(args) = cli.command else {
            panic!("expected export command");
        };
        assert_eq!(args.limit, Some(100));
        assert!(args.use_codes);
        assert!(args.include_definition);
    }
}
