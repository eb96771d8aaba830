use crate::render::{Chart, RenderError, INDIAN_RED, ORANGE, SOURCE_NOTE, TEAL};
use crate::types::column_mapping::{DATE, DEATHS, NEW_CASES, RECOVERED};
use plotlars::{BarPlot, Rgb, Text};
use polars::prelude::*;

const DAY_LABEL: &str = "day";

/// The per-day quantities that get their own bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DailyMetric {
    NewCases,
    Recovered,
    Deaths,
}

impl DailyMetric {
    pub fn column(self) -> &'static str {
        match self {
            DailyMetric::NewCases => NEW_CASES,
            DailyMetric::Recovered => RECOVERED,
            DailyMetric::Deaths => DEATHS,
        }
    }

    fn title(self) -> &'static str {
        match self {
            DailyMetric::NewCases => "Daily Positive Cases of COVID-19",
            DailyMetric::Recovered => "Daily Recovered Cases of COVID-19",
            DailyMetric::Deaths => "Daily Death Cases of COVID-19",
        }
    }

    fn color(self) -> Rgb {
        match self {
            DailyMetric::NewCases => ORANGE,
            DailyMetric::Recovered => TEAL,
            DailyMetric::Deaths => INDIAN_RED,
        }
    }
}

/// One bar per day for `metric`.
pub fn daily_bar_chart(
    daily: &DataFrame,
    metric: DailyMetric,
    region: &str,
) -> Result<Chart, RenderError> {
    let data = daily
        .clone()
        .lazy()
        .select([
            col(DATE).dt().strftime("%Y-%m-%d").alias(DAY_LABEL),
            col(metric.column()),
        ])
        .collect()?;

    let title = format!("{} in {}", metric.title(), region);
    let plot = BarPlot::builder()
        .data(&data)
        .labels(DAY_LABEL)
        .values(metric.column())
        .color(metric.color())
        .plot_title(Text::from(title.as_str()).size(20))
        .x_title(Text::from(SOURCE_NOTE).size(12))
        .y_title(Text::from("Number of cases"))
        .build();

    Ok(Chart::bar(format!("daily_{}", metric.column()), plot))
}
