//! Named-column rows and tables.

use crate::{ResultsError, ResultsResult};

/// One row: ordered `(column name, value)` pairs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    cells: Vec<(String, f64)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cell, builder style.
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: f64) {
        self.cells.push((name.into(), value));
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.cells.iter().find(|(n, _)| n == name).map(|(_, v)| *v)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(n, _)| n.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.cells.iter().map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Rows sharing one header.
///
/// The header is taken from the first row; later rows must carry the same
/// column names in the same order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row.
    ///
    /// # Errors
    /// `ColumnMismatch` when the row's names differ from the header.
    pub fn push(&mut self, row: Row) -> ResultsResult<()> {
        if self.header.is_empty() && self.rows.is_empty() {
            self.header = row.names().map(str::to_string).collect();
        } else if !row.names().eq(self.header.iter().map(String::as_str)) {
            return Err(ResultsError::ColumnMismatch {
                row: self.rows.len(),
                expected: self.header.clone(),
                found: row.names().map(str::to_string).collect(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All values of one column, in row order.
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let idx = self.header.iter().position(|h| h == name)?;
        Some(
            self.rows
                .iter()
                .filter_map(|r| r.values().nth(idx))
                .collect(),
        )
    }
}
