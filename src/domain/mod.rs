//! Domain models and types for Surveyor.
//!
//! This module contains the core domain models, types, and error hierarchy:
//!
//! - **Strongly-typed identifiers** ([`SurveyId`])
//! - **Domain models** ([`ExportJob`])
//! - **Error types** ([`SurveyorError`], [`PlatformError`], [`TableError`], [`OutputError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`]:
//!
//! ```rust
//! use surveyor::domain::{Result, SurveyorError};
//!
//! fn example() -> Result<()> {
//!     Err(SurveyorError::Configuration("missing api token".to_string()))
//! }
//! ```

pub mod errors;
pub mod export_job;
pub mod ids;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{OutputError, PlatformError, SurveyorError, TableError};
pub use export_job::ExportJob;
pub use ids::SurveyId;
pub use result::Result;
