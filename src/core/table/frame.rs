//! Rectangular in-memory table
//!
//! [`TableFrame`] is the pre-write representation of response data: named
//! columns plus row-major cells. Cells are raw JSON values; a missing key in
//! a source record becomes `Value::Null`.
//!
//! The frame owns the columnar-safety invariant: the binary columnar output
//! format cannot round-trip zero-length strings, so [`TableFrame::sanitize`]
//! replaces every empty-string cell with a single space. Sanitization is
//! idempotent.

use crate::domain::errors::TableError;
use serde_json::Value;

/// Rectangular table with named columns
#[derive(Debug, Clone, PartialEq)]
pub struct TableFrame {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl TableFrame {
    /// Creates a frame from columns and row-major cells
    ///
    /// # Errors
    ///
    /// Returns `TableError::UnsupportedPayload` if any row's width differs
    /// from the column count.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self, TableError> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(TableError::UnsupportedPayload(format!(
                    "row {} has {} cells but the table has {} columns",
                    i,
                    row.len(),
                    columns.len()
                )));
            }
        }
        Ok(Self { columns, rows })
    }

    /// Column names, in order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Row-major cells
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Looks up a cell by row index and column name
    pub fn cell(&self, row: usize, column: &str) -> Option<&Value> {
        let col = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.get(col)
    }

    /// Replaces every empty-string cell with a single space
    ///
    /// Returns the number of cells replaced. Running this on an already
    /// sanitized frame is a no-op.
    pub fn sanitize(&mut self) -> usize {
        let mut replaced = 0;
        for row in &mut self.rows {
            for cell in row.iter_mut() {
                if matches!(cell, Value::String(s) if s.is_empty()) {
                    *cell = Value::String(" ".to_string());
                    replaced += 1;
                }
            }
        }
        replaced
    }

    /// Whether the frame contains no empty-string cell
    pub fn is_sanitized(&self) -> bool {
        self.rows
            .iter()
            .flatten()
            .all(|cell| !matches!(cell, Value::String(s) if s.is_empty()))
    }
}
