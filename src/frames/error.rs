use crate::types::date_encoding::DateEncoding;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("Required column '{column}' not found in the daily payload (check the column mapping)")]
    MissingColumn { column: String },

    #[error("Column '{column}' holds a non-integer value at row {row}: {value}")]
    NonIntegerValue {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Column '{column}' is null at row {row}")]
    NullValue { column: String, row: usize },

    #[error("Cannot convert {value:?} at row {row} to a date using {encoding} since the epoch")]
    DateConversion {
        row: usize,
        value: Option<i64>,
        encoding: DateEncoding,
    },

    #[error("Failed processing DataFrame: {0}")]
    Polars(#[from] PolarsError),
}
