// Surveyor - survey platform export tool
// Copyright (c) 2025 Surveyor Contributors
// Licensed under the MIT License

//! # Surveyor - survey platform export tool
//!
//! Surveyor pulls survey responses and definitions from a survey platform's
//! HTTP API and persists them as local datasets: responses as Arrow IPC
//! (Feather V2) tables, definitions as pretty-printed JSON.
//!
//! ## Overview
//!
//! A single invocation exports one survey:
//!
//! 1. **Submit** an asynchronous export job for the survey's responses
//! 2. **Poll** the job status until the platform reports completion (bounded
//!    by a configurable deadline)
//! 3. **Download** the single-entry zip archive and parse the contained JSON
//! 4. **Materialize** the response records into a rectangular table
//! 5. **Write** the artifacts into `<output>/<project>/<date>_<survey>_<type>.<ext>`
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`adapters`] - Survey platform HTTP integration
//! - [`core`] - Tabular materialization and artifact output
//! - [`domain`] - Core domain types and the error hierarchy
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use surveyor::adapters::platform::{ExportRequest, PlatformClient};
//! use surveyor::config::load_config;
//! use surveyor::core::table::TableSource;
//! use surveyor::domain::SurveyId;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("surveyor.toml")?;
//!     let client = PlatformClient::new(&config.platform)?;
//!
//!     let survey_id = SurveyId::new("SV_0abcdef123456789")?;
//!     let responses = client
//!         .fetch_responses(&ExportRequest::new(survey_id))
//!         .await?;
//!
//!     let frame = TableSource::Records(responses).materialize()?;
//!     println!("{} rows, {} columns", frame.num_rows(), frame.num_columns());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`domain::Result`], which wraps
//! [`domain::SurveyorError`]. Failures are fatal for the operation — nothing
//! is retried automatically, and wrapped errors carry the original cause:
//!
//! ```rust,no_run
//! use surveyor::domain::{PlatformError, SurveyorError};
//!
//! # fn example(err: SurveyorError) {
//! match err {
//!     SurveyorError::Platform(PlatformError::Timeout { waited_ms, .. }) => {
//!         eprintln!("export job incomplete after {waited_ms}ms");
//!     }
//!     other => eprintln!("{other}"),
//! }
//! # }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
