//! Response export operation
//!
//! Drives the platform's asynchronous export protocol: submit a job, poll
//! its status until the server reports 100% completion, download the result
//! archive, and parse the contained JSON. The polling loop carries an
//! explicit deadline — an incomplete job is never treated as complete; once
//! the accumulated wait exceeds `max_wait` the operation fails with a typed
//! timeout.
//!
//! Nothing here retries: a transport failure, malformed payload, or timeout
//! is fatal for the invocation.

use super::archive;
use super::client::{connection_error, PlatformClient};
use super::models::{ExportStatus, ResultEnvelope, SubmittedExport};
use crate::domain::{ExportJob, PlatformError, Result, SurveyId};
use serde_json::{json, Map, Value};
use std::time::Duration;

/// Filter parameters passed through verbatim to the platform
#[derive(Debug, Clone, Default)]
pub struct ExportFilters {
    /// Cursor: only responses recorded after this response id
    pub last_response_id: Option<String>,

    /// Only responses recorded at or after this instant (ISO 8601)
    pub start_date: Option<String>,

    /// Only responses recorded before this instant (ISO 8601)
    pub end_date: Option<String>,

    /// Maximum number of responses to export
    pub limit: Option<u64>,

    /// Restrict the export to these question ids
    pub included_question_ids: Option<Vec<String>>,

    /// Render answers as labels rather than numeric codes (platform default
    /// is codes; this client defaults to labels)
    pub use_labels: Option<bool>,

    /// Render timestamps in the survey's local time zone (defaults to false)
    pub use_local_time: Option<bool>,
}

/// A single response-export request
#[derive(Debug, Clone)]
pub struct ExportRequest {
    /// Survey to export
    pub survey_id: SurveyId,

    /// Result format requested from the platform
    pub result_format: String,

    /// Pass-through filter parameters
    pub filters: ExportFilters,

    /// Maximum total time to wait for job completion
    pub max_wait: Duration,

    /// Delay between status polls
    pub poll_interval: Duration,
}

impl ExportRequest {
    /// Creates a request with the default format and polling cadence
    pub fn new(survey_id: SurveyId) -> Self {
        Self {
            survey_id,
            result_format: "json".to_string(),
            filters: ExportFilters::default(),
            max_wait: Duration::from_millis(20_000),
            poll_interval: Duration::from_millis(500),
        }
    }
}

impl PlatformClient {
    /// Submits an export job, waits for completion, and returns the
    /// exported response records
    ///
    /// The returned records are exactly the `responses` array of the JSON
    /// file inside the result archive.
    ///
    /// # Errors
    ///
    /// - `PlatformError::Transport` on any non-success HTTP status (no
    ///   polling is attempted after a failed submission)
    /// - `PlatformError::Timeout` if the job stays incomplete past `max_wait`
    /// - `PlatformError::ArchiveFormat` if the result is not a single-entry zip
    /// - `PlatformError::InvalidResponse` on malformed payloads
    pub async fn fetch_responses(&self, request: &ExportRequest) -> Result<Vec<Value>> {
        let job = self.submit_export(request).await?;
        tracing::info!(
            job_id = %job.id,
            survey_id = %job.survey_id,
            "export job submitted"
        );

        let completed = self
            .poll_until_complete(&job, request.max_wait, request.poll_interval)
            .await?;

        let file_url = completed.file.ok_or_else(|| {
            PlatformError::InvalidResponse(
                "job reported complete without a result file URL".to_string(),
            )
        })?;

        let archive_bytes = self.download_archive(&file_url).await?;
        let payload = archive::extract_single_entry(&archive_bytes)?;

        let parsed: Value = serde_json::from_slice(&payload).map_err(|e| {
            PlatformError::InvalidResponse(format!("result archive is not valid JSON: {e}"))
        })?;

        match parsed.get("responses") {
            Some(Value::Array(responses)) => {
                tracing::info!(
                    job_id = %completed.id,
                    count = responses.len(),
                    "export job downloaded"
                );
                Ok(responses.clone())
            }
            _ => Err(PlatformError::InvalidResponse(
                "export payload is missing the `responses` array".to_string(),
            )
            .into()),
        }
    }

    /// Submits the export request and returns the created job
    async fn submit_export(&self, request: &ExportRequest) -> Result<ExportJob> {
        let url = self.endpoint_url(self.response_endpoint());
        let body = submission_body(request);

        let response = self
            .authorized(self.http().post(&url).json(&body))
            .send()
            .await
            .map_err(connection_error)?;

        let status = response.status();
        tracing::debug!(url = %url, status = status.as_u16(), "export submission");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlatformError::Transport {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let submitted: ResultEnvelope<SubmittedExport> = response.json().await.map_err(|e| {
            PlatformError::InvalidResponse(format!("malformed submission response: {e}"))
        })?;

        Ok(ExportJob::submitted(
            submitted.result.id,
            request.survey_id.clone(),
            request.result_format.to_lowercase(),
        ))
    }

    /// Polls the job status until completion or the deadline
    async fn poll_until_complete(
        &self,
        job: &ExportJob,
        max_wait: Duration,
        poll_interval: Duration,
    ) -> Result<ExportJob> {
        let url = self.job_status_url(&job.id);
        // A zero interval would stall the deadline accounting
        let step = poll_interval.max(Duration::from_millis(1));
        let mut waited = Duration::ZERO;

        loop {
            let observed = self.fetch_job_status(&url, job).await?;

            if observed.is_complete() {
                return Ok(observed);
            }

            if waited >= max_wait {
                return Err(PlatformError::Timeout {
                    waited_ms: waited.as_millis() as u64,
                    percent_complete: observed.percent_complete,
                }
                .into());
            }

            tracing::debug!(
                job_id = %job.id,
                percent_complete = observed.percent_complete,
                waited_ms = waited.as_millis() as u64,
                "export job still in progress"
            );

            tokio::time::sleep(step).await;
            waited += step;
        }
    }

    /// One status GET; returns the job updated with the observed state
    async fn fetch_job_status(&self, url: &str, job: &ExportJob) -> Result<ExportJob> {
        let response = self
            .authorized(self.http().get(url))
            .send()
            .await
            .map_err(connection_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlatformError::Transport {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let envelope: ResultEnvelope<ExportStatus> = response.json().await.map_err(|e| {
            PlatformError::InvalidResponse(format!("malformed status response: {e}"))
        })?;

        Ok(job.observed(envelope.result.percent_complete, envelope.result.file))
    }

    /// Downloads the completed job's result archive
    async fn download_archive(&self, file_url: &str) -> Result<Vec<u8>> {
        let response = self
            .authorized(self.http().get(file_url))
            .send()
            .await
            .map_err(connection_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlatformError::Transport {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let bytes = response.bytes().await.map_err(|e| {
            PlatformError::ConnectionFailed(format!("failed to read result archive: {e}"))
        })?;

        Ok(bytes.to_vec())
    }

    /// Polling URL: the lower-cased submission endpoint plus the job id
    fn job_status_url(&self, job_id: &str) -> String {
        let endpoint = self.response_endpoint().to_lowercase();
        format!(
            "{}/{}",
            self.endpoint_url(endpoint.trim_end_matches('/')),
            job_id
        )
    }
}

/// Builds the submission body, passing filters through verbatim
fn submission_body(request: &ExportRequest) -> Value {
    let filters = &request.filters;
    let mut body = Map::new();

    body.insert(
        "surveyId".to_string(),
        json!(request.survey_id.as_str()),
    );
    body.insert(
        "format".to_string(),
        json!(request.result_format.to_lowercase()),
    );
    body.insert(
        "useLabels".to_string(),
        json!(filters.use_labels.unwrap_or(true)),
    );
    body.insert(
        "useLocalTime".to_string(),
        json!(filters.use_local_time.unwrap_or(false)),
    );

    if let Some(cursor) = &filters.last_response_id {
        body.insert("lastResponseId".to_string(), json!(cursor));
    }
    if let Some(start) = &filters.start_date {
        body.insert("startDate".to_string(), json!(start));
    }
    if let Some(end) = &filters.end_date {
        body.insert("endDate".to_string(), json!(end));
    }
    if let Some(limit) = filters.limit {
        body.insert("limit".to_string(), json!(limit));
    }
    if let Some(questions) = &filters.included_question_ids {
        body.insert("includedQuestionIds".to_string(), json!(questions));
    }

    Value::Object(body)
}
