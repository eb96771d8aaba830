use chrono::{DateTime, NaiveDate};
use polars::prelude::{col, DataType, Expr, TimeUnit};
use std::fmt;
use std::str::FromStr;

/// How the integer date field of the daily payload maps onto a calendar date.
///
/// Both encodings count from the Unix epoch, 1970-01-01 (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateEncoding {
    /// Whole days since the epoch.
    EpochDays,
    /// Milliseconds since the epoch. This is what the live covid19.go.id feed
    /// publishes (e.g. `1583020800000` for 2020-03-01).
    EpochMillis,
}

impl DateEncoding {
    /// Converts a single raw value, returning `None` when it lies outside the
    /// range of representable dates.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use covid19_indonesia::DateEncoding;
    ///
    /// let march_first = NaiveDate::from_ymd_opt(2020, 3, 1);
    /// assert_eq!(DateEncoding::EpochDays.to_date(18322), march_first);
    /// assert_eq!(DateEncoding::EpochMillis.to_date(1_583_020_800_000), march_first);
    /// ```
    pub fn to_date(self, raw: i64) -> Option<NaiveDate> {
        match self {
            DateEncoding::EpochDays => {
                let days = i32::try_from(raw).ok()?;
                NaiveDate::from_ymd_opt(1970, 1, 1)?
                    .checked_add_signed(chrono::Duration::try_days(days as i64)?)
            }
            DateEncoding::EpochMillis => {
                DateTime::from_timestamp_millis(raw).map(|dt| dt.date_naive())
            }
        }
    }

    /// Polars expression turning the integer column `name` into a `Date` column.
    ///
    /// Values that cannot be represented become null, so callers range-check
    /// the raw values with [`DateEncoding::to_date`] first.
    pub(crate) fn to_date_expr(self, name: &str) -> Expr {
        match self {
            DateEncoding::EpochDays => col(name).cast(DataType::Int32).cast(DataType::Date),
            DateEncoding::EpochMillis => col(name)
                .cast(DataType::Datetime(TimeUnit::Milliseconds, None))
                .cast(DataType::Date),
        }
    }
}

impl fmt::Display for DateEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateEncoding::EpochDays => write!(f, "days"),
            DateEncoding::EpochMillis => write!(f, "millis"),
        }
    }
}

impl FromStr for DateEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "days" | "epoch_days" => Ok(DateEncoding::EpochDays),
            "millis" | "ms" | "epoch_millis" => Ok(DateEncoding::EpochMillis),
            other => Err(format!("unknown date encoding '{}'", other)),
        }
    }
}
