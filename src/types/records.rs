use chrono::NaiveDate;

/// One day of new (non-cumulative) counts for a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub new_cases: i64,
    pub recovered: i64,
    pub deaths: i64,
}

/// New cases summed over one Monday-Sunday week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyRecord {
    /// ISO year of the week.
    pub year: i32,
    /// ISO week of the year, 1..=53.
    pub week_number: u32,
    pub total_new_cases: i64,
    /// `total_new_cases` of the preceding week, 0 for the first week.
    pub previous_week_total: i64,
    /// Strictly fewer new cases than the preceding week.
    pub improved: bool,
}

/// Running totals up to and including `date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CumulativeRecord {
    pub date: NaiveDate,
    pub active_total: i64,
    pub recovered_total: i64,
    pub death_total: i64,
}
