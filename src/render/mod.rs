//! Chart rendering for the daily, weekly and cumulative tables.
//!
//! Renderers only read the frames they are given; every chart is built from
//! a derived copy.

pub mod cumulative;
pub mod daily;
pub mod weekly;

use log::info;
use plotlars::{BarPlot, Plot, Rgb, TimeSeriesPlot};
use polars::error::PolarsError;
use polars::prelude::DataFrame;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use cumulative::{active_cases_chart, case_dynamics_chart};
pub use daily::{daily_bar_chart, DailyMetric};
pub use weekly::{weekly_panel, WeeklyPanelLayout};

pub(crate) const SOURCE_NOTE: &str = "Data source: covid19.go.id";

pub(crate) const ORANGE: Rgb = Rgb(255, 165, 0);
pub(crate) const TEAL: Rgb = Rgb(0, 128, 128);
pub(crate) const INDIAN_RED: Rgb = Rgb(205, 92, 92);
pub(crate) const BROWN: Rgb = Rgb(165, 42, 42);
pub(crate) const MEDIUM_SEA_GREEN: Rgb = Rgb(60, 179, 113);
pub(crate) const SALMON: Rgb = Rgb(250, 128, 114);

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed preparing chart data: {0}")]
    Polars(#[from] PolarsError),

    #[error("Failed to create chart output directory '{0}'")]
    OutputDir(PathBuf, #[source] std::io::Error),
}

pub enum ChartPlot {
    Bar(BarPlot),
    TimeSeries(TimeSeriesPlot),
}

/// A rendered chart and the file stem it is written under.
pub struct Chart {
    pub name: String,
    pub plot: ChartPlot,
}

impl Chart {
    pub(crate) fn bar(name: impl Into<String>, plot: BarPlot) -> Self {
        Self {
            name: name.into(),
            plot: ChartPlot::Bar(plot),
        }
    }

    pub(crate) fn time_series(name: impl Into<String>, plot: TimeSeriesPlot) -> Self {
        Self {
            name: name.into(),
            plot: ChartPlot::TimeSeries(plot),
        }
    }

    /// Opens the chart in the default browser.
    pub fn show(&self) {
        match &self.plot {
            ChartPlot::Bar(plot) => plot.plot(),
            ChartPlot::TimeSeries(plot) => plot.plot(),
        }
    }

    /// Writes the chart to `<dir>/<name>.html`, creating `dir` if needed.
    pub fn write_html(&self, dir: &Path) -> Result<PathBuf, RenderError> {
        std::fs::create_dir_all(dir).map_err(|e| RenderError::OutputDir(dir.to_path_buf(), e))?;
        let path = dir.join(format!("{}.html", self.name));
        let target = path.to_string_lossy().to_string();
        match &self.plot {
            ChartPlot::Bar(plot) => plot.write_html(target),
            ChartPlot::TimeSeries(plot) => plot.write_html(target),
        }
        info!("Wrote chart {} to {}", self.name, path.display());
        Ok(path)
    }
}

/// Human readable region name, e.g. `JAWA_BARAT` -> `Jawa Barat`.
pub fn region_label(province: &str) -> String {
    province
        .split(['_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Renders every chart of the analysis, in presentation order: the three
/// daily bar charts, one weekly chart per year, then the two cumulative
/// charts.
pub fn render_all(
    daily: &DataFrame,
    weekly: &DataFrame,
    cumulative: &DataFrame,
    region: &str,
) -> Result<Vec<Chart>, RenderError> {
    let mut charts = vec![
        daily_bar_chart(daily, DailyMetric::NewCases, region)?,
        daily_bar_chart(daily, DailyMetric::Recovered, region)?,
        daily_bar_chart(daily, DailyMetric::Deaths, region)?,
    ];
    charts.extend(weekly_panel(weekly, region)?);
    charts.push(active_cases_chart(cumulative, region)?);
    charts.push(case_dynamics_chart(cumulative, region)?);
    Ok(charts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frames::daily_frame::DailyFrame;
    use crate::types::records::DailyRecord;
    use chrono::{Duration, NaiveDate};

    #[test]
    fn test_region_label() {
        assert_eq!(region_label("JAWA_BARAT"), "Jawa Barat");
        assert_eq!(region_label("DKI JAKARTA"), "Dki Jakarta");
        assert_eq!(region_label("ACEH"), "Aceh");
    }

    #[test]
    fn test_render_all_leaves_tables_untouched() -> Result<(), Box<dyn std::error::Error>> {
        // 2020-12-21 .. 2021-01-09 spans two years.
        let start = NaiveDate::from_ymd_opt(2020, 12, 21).unwrap();
        let records: Vec<DailyRecord> = (0..20)
            .map(|i| DailyRecord {
                date: start + Duration::days(i),
                new_cases: 10 + i % 4,
                recovered: i % 3,
                deaths: i % 2,
            })
            .collect();
        let frame = DailyFrame::from_records(&records)?;
        let daily = frame.collect()?;
        let weekly = frame.weekly()?.collect()?;
        let cumulative = frame.cumulative().collect()?;
        let (daily_before, weekly_before, cumulative_before) =
            (daily.clone(), weekly.clone(), cumulative.clone());

        let charts = render_all(&daily, &weekly, &cumulative, "Jawa Barat")?;

        // 3 daily + 2020 and 2021 weekly + 2 cumulative
        assert_eq!(charts.len(), 7);
        assert!(daily.equals(&daily_before));
        assert!(weekly.equals(&weekly_before));
        assert!(cumulative.equals(&cumulative_before));
        Ok(())
    }
}
