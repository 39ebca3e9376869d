//! Wire types for the survey platform API
//!
//! Every platform response nests its payload under a `result` field; the
//! envelope is generic over the payload shape. These types stay private to
//! the adapter — the domain only sees [`crate::domain::ExportJob`] and raw
//! JSON values.

use serde::Deserialize;

/// Envelope wrapping every platform response payload
#[derive(Debug, Deserialize)]
pub(crate) struct ResultEnvelope<T> {
    pub result: T,
}

/// Payload of a successful export submission
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SubmittedExport {
    pub id: String,
}

/// Payload of an export status poll
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ExportStatus {
    pub percent_complete: f64,

    /// Download URL, present only once the job is complete
    #[serde(default)]
    pub file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_response_deserialization() {
        let json = r#"{"result": {"id": "ES_abc123"}, "meta": {"httpStatus": "200 - OK"}}"#;
        let envelope: ResultEnvelope<SubmittedExport> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.result.id, "ES_abc123");
    }

    #[test]
    fn test_status_response_in_progress() {
        let json = r#"{"result": {"percentComplete": 37.5}}"#;
        let envelope: ResultEnvelope<ExportStatus> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.result.percent_complete, 37.5);
        assert!(envelope.result.file.is_none());
    }

    #[test]
    fn test_status_response_complete() {
        let json = r#"{
            "result": {
                "percentComplete": 100,
                "file": "https://example.test/API/v3/responseexports/ES_abc123/file"
            }
        }"#;
        let envelope: ResultEnvelope<ExportStatus> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.result.percent_complete, 100.0);
        assert!(envelope.result.file.is_some());
    }

    #[test]
    fn test_missing_result_field_fails() {
        let json = r#"{"id": "ES_abc123"}"#;
        let parsed: Result<ResultEnvelope<SubmittedExport>, _> = serde_json::from_str(json);
        assert!(parsed.is_err());
    }
}
