//! Domain identifier types with validation
//!
//! Newtype wrapper for the survey identifier so it cannot be confused with
//! other strings (project names, job ids) flowing through the same calls.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Survey identifier newtype wrapper
///
/// Represents the platform-assigned identifier of a survey (e.g.
/// `SV_0abcdef123456789`). The platform treats it as opaque; the only
/// validation applied here is non-emptiness.
///
/// # Examples
///
/// ```
/// use surveyor::domain::ids::SurveyId;
/// use std::str::FromStr;
///
/// let survey_id = SurveyId::from_str("SV_0abcdef123456789").unwrap();
/// assert_eq!(survey_id.as_str(), "SV_0abcdef123456789");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurveyId(String);

impl SurveyId {
    /// Creates a new SurveyId from a string
    ///
    /// Returns `Ok(SurveyId)` if the id is non-empty, `Err` otherwise.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Survey ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the survey id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SurveyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SurveyId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for SurveyId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
