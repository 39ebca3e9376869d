//! Artifact writers
//!
//! Two on-disk formats: pretty-printed JSON (survey definitions, raw
//! response payloads) and Arrow IPC files (tabular response data). Both
//! writers resolve and return the absolute path written so callers can
//! surface it, and both fail with an [`OutputError::Write`] naming that path.
//!
//! JSON output is deterministic: object keys are sorted and non-ASCII text
//! is escaped as `\uXXXX` sequences (UTF-16 surrogate pairs above the BMP).

use crate::core::table::TableFrame;
use crate::domain::{OutputError, Result};
use arrow::array::{ArrayRef, BooleanArray, Float64Array, Int64Array, RecordBatch, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::ipc::writer::FileWriter;
use serde_json::{Map, Value};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Writes a JSON value to disk, pretty-printed with sorted keys and
/// ASCII-escaped text
///
/// Returns the absolute path written.
pub fn write_json(data: &Value, path: &Path) -> Result<PathBuf> {
    let pretty = serde_json::to_string_pretty(&sorted(data))
        .map_err(|e| write_error(path, format!("JSON serialization failed: {e}")))?;

    fs::write(path, escape_non_ascii(&pretty))
        .map_err(|e| write_error(path, e.to_string()))?;

    let abs = absolute(path);
    tracing::info!(path = %abs.display(), "JSON artifact written");
    Ok(abs)
}

/// Writes a table frame to disk as an Arrow IPC file
///
/// Column types are derived from the cells: all-boolean columns become
/// Boolean, all-integer columns Int64, numeric columns Float64, everything
/// else Utf8 (non-scalar cells are rendered as their JSON text). Null cells
/// become null slots. Returns the absolute path written.
///
/// The frame must be sanitized first; materialization guarantees that.
pub fn write_frame(frame: &TableFrame, path: &Path) -> Result<PathBuf> {
    if frame.num_columns() == 0 {
        return Err(write_error(path, "table has no columns".to_string()).into());
    }

    let mut fields = Vec::with_capacity(frame.num_columns());
    let mut arrays: Vec<ArrayRef> = Vec::with_capacity(frame.num_columns());

    for (idx, name) in frame.columns().iter().enumerate() {
        let cells: Vec<&Value> = frame.rows().iter().map(|row| &row[idx]).collect();
        let kind = derive_kind(&cells);
        fields.push(Field::new(name, kind.data_type(), true));
        arrays.push(build_array(kind, &cells));
    }

    let schema = Arc::new(Schema::new(fields));
    let batch = RecordBatch::try_new(schema.clone(), arrays)
        .map_err(|e| write_error(path, format!("failed to assemble record batch: {e}")))?;

    let file = File::create(path).map_err(|e| write_error(path, e.to_string()))?;
    let mut writer = FileWriter::try_new(file, &schema)
        .map_err(|e| write_error(path, format!("failed to open IPC writer: {e}")))?;
    writer
        .write(&batch)
        .map_err(|e| write_error(path, format!("failed to write record batch: {e}")))?;
    writer
        .finish()
        .map_err(|e| write_error(path, format!("failed to finalize IPC file: {e}")))?;

    let abs = absolute(path);
    tracing::info!(
        path = %abs.display(),
        rows = frame.num_rows(),
        columns = frame.num_columns(),
        "tabular artifact written"
    );
    Ok(abs)
}

/// Column type chosen for the Arrow schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Bool,
    Int,
    Float,
    Utf8,
}

impl ColumnKind {
    fn data_type(self) -> DataType {
        match self {
            ColumnKind::Bool => DataType::Boolean,
            ColumnKind::Int => DataType::Int64,
            ColumnKind::Float => DataType::Float64,
            ColumnKind::Utf8 => DataType::Utf8,
        }
    }
}

/// Derives the narrowest column type that holds every non-null cell
fn derive_kind(cells: &[&Value]) -> ColumnKind {
    let mut kind: Option<ColumnKind> = None;

    for cell in cells {
        let cell_kind = match cell {
            Value::Null => continue,
            Value::Bool(_) => ColumnKind::Bool,
            Value::Number(n) if n.as_i64().is_some() => ColumnKind::Int,
            Value::Number(_) => ColumnKind::Float,
            _ => ColumnKind::Utf8,
        };

        kind = Some(match (kind, cell_kind) {
            (None, k) => k,
            (Some(k), new) if k == new => k,
            (Some(ColumnKind::Int), ColumnKind::Float)
            | (Some(ColumnKind::Float), ColumnKind::Int) => ColumnKind::Float,
            _ => return ColumnKind::Utf8,
        });
    }

    // All-null columns carry no type information; Utf8 holds the nulls.
    kind.unwrap_or(ColumnKind::Utf8)
}

fn build_array(kind: ColumnKind, cells: &[&Value]) -> ArrayRef {
    match kind {
        ColumnKind::Bool => {
            let values: Vec<Option<bool>> = cells.iter().map(|v| v.as_bool()).collect();
            Arc::new(BooleanArray::from(values))
        }
        ColumnKind::Int => {
            let values: Vec<Option<i64>> = cells.iter().map(|v| v.as_i64()).collect();
            Arc::new(Int64Array::from(values))
        }
        ColumnKind::Float => {
            let values: Vec<Option<f64>> = cells.iter().map(|v| v.as_f64()).collect();
            Arc::new(Float64Array::from(values))
        }
        ColumnKind::Utf8 => {
            let values: Vec<Option<String>> = cells.iter().map(|v| cell_text(v)).collect();
            Arc::new(StringArray::from(values))
        }
    }
}

/// Renders a cell for a Utf8 column; nulls stay null, strings stay verbatim,
/// anything else becomes its JSON text
fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Rebuilds the value with object keys in sorted order at every depth
fn sorted(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut out = Map::new();
            for key in keys {
                out.insert(key.clone(), sorted(&map[key]));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(sorted).collect()),
        other => other.clone(),
    }
}

/// Escapes every non-ASCII character as `\uXXXX` (surrogate pairs above the
/// BMP); the input is JSON text, so such characters only occur inside string
/// literals
fn escape_non_ascii(s: &str) -> String {
    use std::fmt::Write;

    let mut out = String::with_capacity(s.len());
    let mut units = [0u16; 2];
    for c in s.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            for unit in c.encode_utf16(&mut units) {
                write!(out, "\\u{:04x}", unit).expect("writing to a String cannot fail");
            }
        }
    }
    out
}

fn write_error(path: &Path, reason: String) -> OutputError {
    OutputError::Write {
        path: absolute(path).display().to_string(),
        reason,
    }
}

/// Best-effort absolute form of the path (the file may not exist yet)
fn absolute(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    })
}
