use crate::frames::error::TransformError;
use crate::frames::{date_at, required};
use crate::types::column_mapping::DATE;
use crate::types::records::CumulativeRecord;
use polars::prelude::*;

pub const ACTIVE_TOTAL: &str = "active_total";
pub const RECOVERED_TOTAL: &str = "recovered_total";
pub const DEATH_TOTAL: &str = "death_total";

/// Running totals per day, produced by [`crate::DailyFrame::cumulative`].
#[derive(Clone)]
pub struct CumulativeFrame {
    pub frame: LazyFrame,
}

impl CumulativeFrame {
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    pub fn collect(&self) -> Result<DataFrame, TransformError> {
        Ok(self.frame.clone().collect()?)
    }

    pub fn collect_cumulative(&self) -> Result<Vec<CumulativeRecord>, TransformError> {
        let df = self.collect()?;
        let dates = df.column(DATE)?.cast(&DataType::Int32)?;
        let dates = dates.i32()?;
        let active = df.column(ACTIVE_TOTAL)?.i64()?;
        let recovered = df.column(RECOVERED_TOTAL)?.i64()?;
        let deaths = df.column(DEATH_TOTAL)?.i64()?;

        (0..df.height())
            .map(|row| {
                Ok(CumulativeRecord {
                    date: date_at(dates.get(row), DATE, row)?,
                    active_total: required(active.get(row), ACTIVE_TOTAL, row)?,
                    recovered_total: required(recovered.get(row), RECOVERED_TOTAL, row)?,
                    death_total: required(deaths.get(row), DEATH_TOTAL, row)?,
                })
            })
            .collect()
    }
}
