//! Contains the `DailyFrame` structure wrapping the tidy daily table.

use crate::frames::cumulative_frame::{
    CumulativeFrame, ACTIVE_TOTAL, DEATH_TOTAL, RECOVERED_TOTAL,
};
use crate::frames::error::TransformError;
use crate::frames::weekly_frame::{
    WeeklyFrame, IMPROVED, PREVIOUS_WEEK_TOTAL, TOTAL_NEW_CASES, WEEK_ENDING, WEEK_NUMBER, YEAR,
};
use crate::frames::{date_at, required};
use crate::types::column_mapping::{DATE, DEATHS, NEW_CASES, RECOVERED};
use crate::types::records::DailyRecord;
use chrono::NaiveDate;
use polars::prelude::*;

/// A wrapper around a Polars `LazyFrame` holding the tidy daily series.
///
/// The frame has the columns `date` (`Date`), `new_cases`, `recovered` and
/// `deaths` (`Int64`), possibly followed by other upstream columns.
///
/// Instances are produced by [`crate::tidy`] or built from records with
/// [`DailyFrame::from_records`].
#[derive(Clone)]
pub struct DailyFrame {
    /// The underlying Polars LazyFrame containing the daily data.
    pub frame: LazyFrame,
}

impl DailyFrame {
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    /// Builds a frame from typed records, keeping their order.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use covid19_indonesia::{DailyFrame, DailyRecord};
    ///
    /// let records = vec![DailyRecord {
    ///     date: NaiveDate::from_ymd_opt(2020, 3, 2).unwrap(),
    ///     new_cases: 2,
    ///     recovered: 0,
    ///     deaths: 0,
    /// }];
    /// let frame = DailyFrame::from_records(&records).unwrap();
    /// assert_eq!(frame.collect_daily().unwrap(), records);
    /// ```
    pub fn from_records(records: &[DailyRecord]) -> Result<Self, TransformError> {
        let df = DataFrame::new(vec![
            Column::new(
                DATE.into(),
                records.iter().map(|r| r.date).collect::<Vec<NaiveDate>>(),
            ),
            Column::new(
                NEW_CASES.into(),
                records.iter().map(|r| r.new_cases).collect::<Vec<i64>>(),
            ),
            Column::new(
                RECOVERED.into(),
                records.iter().map(|r| r.recovered).collect::<Vec<i64>>(),
            ),
            Column::new(
                DEATHS.into(),
                records.iter().map(|r| r.deaths).collect::<Vec<i64>>(),
            ),
        ])?;
        Ok(Self::new(df.lazy()))
    }

    /// Filters the daily data based on a Polars predicate expression.
    pub fn filter(&self, predicate: Expr) -> DailyFrame {
        DailyFrame::new(self.frame.clone().filter(predicate))
    }

    /// Keeps the days between `start` and `end`, both inclusive.
    pub fn get_range(&self, start: NaiveDate, end: NaiveDate) -> DailyFrame {
        self.filter(col(DATE).gt_eq(lit(start)).and(col(DATE).lt_eq(lit(end))))
    }

    /// Keeps the days of one calendar year.
    pub fn get_for_year(&self, year: i32) -> DailyFrame {
        self.filter(col(DATE).dt().year().eq(lit(year)))
    }

    /// Sums `new_cases` per Monday-Sunday week.
    ///
    /// Each week is represented by its Sunday (`week_ending`), whose ISO year
    /// and ISO week number label the row. Weeks are in chronological order
    /// and contiguous: a week without any daily row between the first and
    /// the last one is kept with a total of 0. A partial first or last week
    /// is kept as is. `previous_week_total` is 0 for the first week and
    /// `improved` is a strict `<` comparison with it.
    pub fn weekly(&self) -> Result<WeeklyFrame, TransformError> {
        let days_to_sunday = lit(7) - col(DATE).dt().weekday().cast(DataType::Int32);
        let week_ending = (col(DATE).cast(DataType::Int32) + days_to_sunday)
            .cast(DataType::Date)
            .alias(WEEK_ENDING);

        let totals = self
            .frame
            .clone()
            .select([week_ending, col(NEW_CASES)])
            .group_by_stable([col(WEEK_ENDING)])
            .agg([col(NEW_CASES).sum().alias(TOTAL_NEW_CASES)])
            .sort([WEEK_ENDING], SortMultipleOptions::default())
            .collect()?;

        let frame = fill_missing_weeks(&totals)?
            .lazy()
            .with_columns([
                col(WEEK_ENDING)
                    .dt()
                    .iso_year()
                    .cast(DataType::Int32)
                    .alias(YEAR),
                col(WEEK_ENDING)
                    .dt()
                    .week()
                    .cast(DataType::Int32)
                    .alias(WEEK_NUMBER),
                col(TOTAL_NEW_CASES)
                    .shift(lit(1))
                    .fill_null(lit(0i64))
                    .alias(PREVIOUS_WEEK_TOTAL),
            ])
            .with_column(
                col(TOTAL_NEW_CASES)
                    .lt(col(PREVIOUS_WEEK_TOTAL))
                    .alias(IMPROVED),
            )
            .select([
                col(WEEK_ENDING),
                col(YEAR),
                col(WEEK_NUMBER),
                col(TOTAL_NEW_CASES),
                col(PREVIOUS_WEEK_TOTAL),
                col(IMPROVED),
            ]);
        Ok(WeeklyFrame::new(frame))
    }

    /// Running totals of active, recovered and deceased cases, in date order.
    ///
    /// `active_total` accumulates `new_cases - recovered - deaths`; all three
    /// totals start at the first row with no baseline.
    pub fn cumulative(&self) -> CumulativeFrame {
        let frame = self
            .frame
            .clone()
            .sort([DATE], SortMultipleOptions::default().with_maintain_order(true))
            .select([
                col(DATE),
                (col(NEW_CASES) - col(RECOVERED) - col(DEATHS))
                    .cum_sum(false)
                    .alias(ACTIVE_TOTAL),
                col(RECOVERED).cum_sum(false).alias(RECOVERED_TOTAL),
                col(DEATHS).cum_sum(false).alias(DEATH_TOTAL),
            ]);
        CumulativeFrame::new(frame)
    }

    pub fn collect(&self) -> Result<DataFrame, TransformError> {
        Ok(self.frame.clone().collect()?)
    }

    /// Collects the frame into typed records.
    ///
    /// # Errors
    ///
    /// [`TransformError::NullValue`] if any of the canonical columns is null.
    pub fn collect_daily(&self) -> Result<Vec<DailyRecord>, TransformError> {
        let df = self.collect()?;
        let dates = df.column(DATE)?.cast(&DataType::Int32)?;
        let dates = dates.i32()?;
        let new_cases = df.column(NEW_CASES)?.i64()?;
        let recovered = df.column(RECOVERED)?.i64()?;
        let deaths = df.column(DEATHS)?.i64()?;

        (0..df.height())
            .map(|row| {
                Ok(DailyRecord {
                    date: date_at(dates.get(row), DATE, row)?,
                    new_cases: required(new_cases.get(row), NEW_CASES, row)?,
                    recovered: required(recovered.get(row), RECOVERED, row)?,
                    deaths: required(deaths.get(row), DEATHS, row)?,
                })
            })
            .collect()
    }
}

// Inserts a zero total for every Sunday missing between the first and the
// last week. `totals` is sorted by `week_ending`.
fn fill_missing_weeks(totals: &DataFrame) -> Result<DataFrame, TransformError> {
    let endings = totals.column(WEEK_ENDING)?.cast(&DataType::Int32)?;
    let endings = endings.i32()?;
    let sums = totals.column(TOTAL_NEW_CASES)?.i64()?;

    let mut week_days: Vec<i32> = Vec::with_capacity(totals.height());
    let mut week_totals: Vec<i64> = Vec::with_capacity(totals.height());
    for (ending, total) in endings.into_iter().zip(sums.into_iter()) {
        let Some(ending) = ending else { continue };
        if let Some(&last) = week_days.last() {
            week_days.extend((last + 7..ending).step_by(7));
            week_totals.resize(week_days.len(), 0);
        }
        week_days.push(ending);
        week_totals.push(total.unwrap_or(0));
    }

    let week_ending = Column::new(WEEK_ENDING.into(), week_days).cast(&DataType::Date)?;
    Ok(DataFrame::new(vec![
        week_ending,
        Column::new(TOTAL_NEW_CASES.into(), week_totals),
    ])?)
}
