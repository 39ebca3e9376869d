//! Survey definition operation
//!
//! Fetches the static schema of a survey (questions, answer choices) as raw
//! JSON. One GET, no polling, no retry. The HTTP status is validated before
//! the body is parsed; a non-2xx answer surfaces as a transport error with
//! the upstream status and body.

use super::client::{connection_error, PlatformClient};
use crate::domain::{PlatformError, Result, SurveyId};
use serde_json::Value;

impl PlatformClient {
    /// Fetches a survey's definition (questions and response options)
    ///
    /// Returns the `result` field of the platform response verbatim; no
    /// transformation is applied.
    pub async fn fetch_survey_definition(&self, survey_id: &SurveyId) -> Result<Value> {
        let url = self.endpoint_url(&format!("surveys/{survey_id}"));

        let response = self
            .authorized(self.http().get(&url))
            .send()
            .await
            .map_err(connection_error)?;

        let status = response.status();
        tracing::debug!(url = %url, status = status.as_u16(), "survey definition fetch");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlatformError::Transport {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let parsed: Value = response.json().await.map_err(|e| {
            PlatformError::InvalidResponse(format!("malformed survey response: {e}"))
        })?;

        match parsed.get("result") {
            Some(result) => {
                tracing::info!(survey_id = %survey_id, "survey definition fetched");
                Ok(result.clone())
            }
            None => Err(PlatformError::InvalidResponse(
                "survey response is missing the `result` field".to_string(),
            )
            .into()),
        }
    }
}
