//! Materializer input variants
//!
//! The conversion path is chosen by the caller through an explicit tagged
//! variant rather than inspected at runtime: record lists, key/value maps,
//! and already-built frames each materialize differently. Callers holding an
//! untagged JSON payload can classify it with [`TableSource::from_value`].

use crate::core::table::frame::TableFrame;
use crate::domain::errors::TableError;
use serde_json::{Map, Value};

/// Input variants accepted by the materializer
#[derive(Debug, Clone)]
pub enum TableSource {
    /// A sequence of response records, one row per record; the column set is
    /// the union of observed keys in first-seen order
    Records(Vec<Value>),

    /// A single mapping, materialized as a two-column (key, value) table
    KeyValue(Map<String, Value>),

    /// An existing frame, passed through unchanged
    Frame(TableFrame),
}

impl TableSource {
    /// Classifies an untagged JSON payload
    ///
    /// Arrays become [`TableSource::Records`], objects become
    /// [`TableSource::KeyValue`]; any other shape is unsupported.
    pub fn from_value(value: Value) -> Result<Self, TableError> {
        match value {
            Value::Array(records) => Ok(TableSource::Records(records)),
            Value::Object(map) => Ok(TableSource::KeyValue(map)),
            other => Err(TableError::UnsupportedPayload(format!(
                "cannot build a table from a JSON {}",
                value_kind(&other)
            ))),
        }
    }

    /// Converts the source into a sanitized [`TableFrame`]
    ///
    /// Every empty-string cell in the result has been replaced with a single
    /// space; no cell of the returned frame is a zero-length string.
    pub fn materialize(self) -> Result<TableFrame, TableError> {
        let mut frame = match self {
            TableSource::Records(records) => records_to_frame(records)?,
            TableSource::KeyValue(map) => key_value_to_frame(map)?,
            TableSource::Frame(frame) => frame,
        };
        frame.sanitize();
        Ok(frame)
    }
}

/// Builds a frame from a list of record objects
///
/// Column set = union of observed keys, in first-seen order. Missing keys
/// become null cells.
fn records_to_frame(records: Vec<Value>) -> Result<TableFrame, TableError> {
    let mut columns: Vec<String> = Vec::new();

    for (i, record) in records.iter().enumerate() {
        let object = record.as_object().ok_or_else(|| {
            TableError::UnsupportedPayload(format!(
                "record {} is a JSON {}, expected an object",
                i,
                value_kind(record)
            ))
        })?;

        for key in object.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }

    let rows = records
        .iter()
        .map(|record| {
            let object = record.as_object().expect("validated above");
            columns
                .iter()
                .map(|column| object.get(column).cloned().unwrap_or(Value::Null))
                .collect()
        })
        .collect();

    TableFrame::new(columns, rows)
}

/// Builds a two-column (key, value) frame from a single mapping
fn key_value_to_frame(map: Map<String, Value>) -> Result<TableFrame, TableError> {
    let rows = map
        .into_iter()
        .map(|(key, value)| vec![Value::String(key), value])
        .collect();

    TableFrame::new(vec!["key".to_string(), "value".to_string()], rows)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_records_union_columns_first_seen_order() {
        let source = TableSource::Records(vec![
            json!({"q1": "a"}),
            json!({"q1": "b", "q2": ""}),
            json!({"q2": "c"}),
        ]);

        let frame = source.materialize().unwrap();
        assert_eq!(frame.num_rows(), 3);
        assert_eq!(frame.columns(), ["q1", "q2"]);
        assert_eq!(frame.cell(0, "q2"), Some(&Value::Null));
        // "" sanitized to " "
        assert_eq!(frame.cell(1, "q2"), Some(&json!(" ")));
        assert_eq!(frame.cell(2, "q1"), Some(&Value::Null));
        assert!(frame.is_sanitized());
    }

    #[test]
    fn test_records_rejects_non_object_entry() {
        let source = TableSource::Records(vec![json!({"q1": "a"}), json!(42)]);
        let err = source.materialize().unwrap_err();
        assert!(err.to_string().contains("record 1"));
    }

    #[test]
    fn test_key_value_frame() {
        let Value::Object(map) = json!({"name": "Survey 1", "questions": 12}) else {
            unreachable!()
        };

        let frame = TableSource::KeyValue(map).materialize().unwrap();
        assert_eq!(frame.columns(), ["key", "value"]);
        assert_eq!(frame.num_rows(), 2);
        assert_eq!(frame.cell(0, "key"), Some(&json!("name")));
        assert_eq!(frame.cell(0, "value"), Some(&json!("Survey 1")));
    }

    #[test]
    fn test_frame_passthrough() {
        let original = TableFrame::new(
            vec!["x".to_string()],
            vec![vec![json!("kept")], vec![json!("")]],
        )
        .unwrap();

        let frame = TableSource::Frame(original).materialize().unwrap();
        assert_eq!(frame.cell(0, "x"), Some(&json!("kept")));
        // sanitization still applies on passthrough
        assert_eq!(frame.cell(1, "x"), Some(&json!(" ")));
    }

    #[test]
    fn test_from_value_classification() {
        assert!(matches!(
            TableSource::from_value(json!([{"a": 1}])),
            Ok(TableSource::Records(_))
        ));
        assert!(matches!(
            TableSource::from_value(json!({"a": 1})),
            Ok(TableSource::KeyValue(_))
        ));
        assert!(TableSource::from_value(json!("scalar")).is_err());
        assert!(TableSource::from_value(json!(3.5)).is_err());
        assert!(TableSource::from_value(Value::Null).is_err());
    }

    #[test]
    fn test_empty_record_list() {
        let frame = TableSource::Records(vec![]).materialize().unwrap();
        assert_eq!(frame.num_rows(), 0);
        assert_eq!(frame.num_columns(), 0);
    }
}
