//! Result type alias for Surveyor

use super::errors::SurveyorError;

/// Result type alias for Surveyor operations
///
/// This is a convenience type alias that uses `SurveyorError` as the error
/// type. Use this throughout the codebase for fallible operations.
pub type Result<T> = std::result::Result<T, SurveyorError>;
