pub mod cumulative_frame;
pub mod daily_frame;
pub mod error;
pub mod raw;
pub mod tidy;
pub mod weekly_frame;

use crate::frames::error::TransformError;
use crate::types::date_encoding::DateEncoding;
use chrono::NaiveDate;

fn required<T>(value: Option<T>, column: &str, row: usize) -> Result<T, TransformError> {
    value.ok_or_else(|| TransformError::NullValue {
        column: column.to_string(),
        row,
    })
}

// Polars stores `Date` as days since the epoch.
fn date_at(days: Option<i32>, column: &str, row: usize) -> Result<NaiveDate, TransformError> {
    let days = required(days, column, row)? as i64;
    DateEncoding::EpochDays
        .to_date(days)
        .ok_or(TransformError::DateConversion {
            row,
            value: Some(days),
            encoding: DateEncoding::EpochDays,
        })
}
