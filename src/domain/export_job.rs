//! Export job model
//!
//! An export job identifies a pending asynchronous extraction on the survey
//! platform. The server owns the job state; the client only observes it
//! through polling and discards the job once the result archive has been
//! downloaded. Nothing here is persisted across process runs.

use crate::domain::ids::SurveyId;
use serde::{Deserialize, Serialize};

/// Snapshot of a server-side export job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportJob {
    /// Server-assigned job identifier (opaque)
    pub id: String,

    /// Survey the job was submitted for
    pub survey_id: SurveyId,

    /// Requested result format (e.g. "json")
    pub format: String,

    /// Completion percentage as last observed (0-100)
    pub percent_complete: f64,

    /// Result download URL, present only once the job is complete
    pub file: Option<String>,
}

impl ExportJob {
    /// Creates a freshly submitted job (nothing observed yet)
    pub fn submitted(id: impl Into<String>, survey_id: SurveyId, format: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            survey_id,
            format: format.into(),
            percent_complete: 0.0,
            file: None,
        }
    }

    /// Returns a copy updated with the latest observed status
    pub fn observed(&self, percent_complete: f64, file: Option<String>) -> Self {
        Self {
            percent_complete,
            file,
            ..self.clone()
        }
    }

    /// Whether the server has reported the job complete
    pub fn is_complete(&self) -> bool {
        self.percent_complete >= 100.0
    }
}
