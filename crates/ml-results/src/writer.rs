//! Delimited-text rendering of tables.

use crate::table::Table;
use crate::{ResultsError, ResultsResult};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Renders a [`Table`] as delimited text with a header line.
///
/// Rounding happens only while formatting; table values are never modified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableWriter {
    delimiter: char,
    precision: Option<usize>,
}

impl Default for TableWriter {
    fn default() -> Self {
        Self {
            delimiter: ',',
            precision: None,
        }
    }
}

impl TableWriter {
    pub fn csv() -> Self {
        Self::default()
    }

    /// # Errors
    /// `InvalidDelimiter` for characters that can appear in a number or
    /// line break.
    pub fn with_delimiter(mut self, delimiter: char) -> ResultsResult<Self> {
        if delimiter.is_alphanumeric() || matches!(delimiter, '.' | '-' | '+' | '\n' | '\r') {
            return Err(ResultsError::InvalidDelimiter(delimiter));
        }
        self.delimiter = delimiter;
        Ok(self)
    }

    /// Decimal places shown for every value. `None` prints full precision.
    pub fn with_precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn precision(&self) -> Option<usize> {
        self.precision
    }

    fn format_value(&self, v: f64) -> String {
        match self.precision {
            Some(p) if v.is_finite() => format!("{:.*}", p, v),
            _ => format!("{}", v),
        }
    }

    pub fn write<W: Write>(&self, table: &Table, out: &mut W) -> ResultsResult<()> {
        if table.header().is_empty() {
            return Err(ResultsError::EmptyTable);
        }
        let sep = self.delimiter.to_string();

        writeln!(out, "{}", table.header().join(&sep))?;
        for row in table.rows() {
            let line: Vec<String> = row.values().map(|v| self.format_value(v)).collect();
            writeln!(out, "{}", line.join(&sep))?;
        }
        out.flush()?;
        Ok(())
    }

    pub fn render(&self, table: &Table) -> ResultsResult<String> {
        let mut buf = Vec::new();
        self.write(table, &mut buf)?;
        String::from_utf8(buf)
            .map_err(|e| ResultsError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    /// Write to `path`, creating parent directories as needed.
    pub fn write_to_path(&self, table: &Table, path: &Path) -> ResultsResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let mut file = io::BufWriter::new(fs::File::create(path)?);
        self.write(table, &mut file)
    }
}
