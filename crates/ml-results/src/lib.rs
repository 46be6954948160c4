//! ml-results: tabular output of sweep results.

pub mod columns;
pub mod table;
pub mod writer;

pub use columns::{STANDARD_COLUMNS, performance_row, table_from_sweep};
pub use table::{Row, Table};
pub use writer::TableWriter;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Column mismatch at row {row}: expected {expected:?}, found {found:?}")]
    ColumnMismatch {
        row: usize,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Table has no columns")]
    EmptyTable,

    #[error("Invalid delimiter: {0:?}")]
    InvalidDelimiter(char),
}
