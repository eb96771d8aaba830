use crate::frames::error::TransformError;
use crate::frames::required;
use crate::types::records::WeeklyRecord;
use polars::prelude::*;

pub const WEEK_ENDING: &str = "week_ending";
pub const YEAR: &str = "year";
pub const WEEK_NUMBER: &str = "week_number";
pub const TOTAL_NEW_CASES: &str = "total_new_cases";
pub const PREVIOUS_WEEK_TOTAL: &str = "previous_week_total";
pub const IMPROVED: &str = "improved";

/// Weekly new-case totals, produced by [`crate::DailyFrame::weekly`].
///
/// Columns: `week_ending` (`Date`, the Sunday), `year`, `week_number`
/// (`Int32`), `total_new_cases`, `previous_week_total` (`Int64`) and
/// `improved` (`Boolean`).
#[derive(Clone)]
pub struct WeeklyFrame {
    pub frame: LazyFrame,
}

impl WeeklyFrame {
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    pub fn collect(&self) -> Result<DataFrame, TransformError> {
        Ok(self.frame.clone().collect()?)
    }

    pub fn collect_weekly(&self) -> Result<Vec<WeeklyRecord>, TransformError> {
        let df = self.collect()?;
        let years = df.column(YEAR)?.i32()?;
        let weeks = df.column(WEEK_NUMBER)?.i32()?;
        let totals = df.column(TOTAL_NEW_CASES)?.i64()?;
        let previous = df.column(PREVIOUS_WEEK_TOTAL)?.i64()?;
        let improved = df.column(IMPROVED)?.bool()?;

        (0..df.height())
            .map(|row| {
                let week_number = required(weeks.get(row), WEEK_NUMBER, row)?;
                Ok(WeeklyRecord {
                    year: required(years.get(row), YEAR, row)?,
                    week_number: week_number.unsigned_abs(),
                    total_new_cases: required(totals.get(row), TOTAL_NEW_CASES, row)?,
                    previous_week_total: required(previous.get(row), PREVIOUS_WEEK_TOTAL, row)?,
                    improved: required(improved.get(row), IMPROVED, row)?,
                })
            })
            .collect()
    }
}
