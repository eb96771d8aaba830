use crate::frames::weekly_frame::{IMPROVED, TOTAL_NEW_CASES, WEEK_NUMBER, YEAR};
use crate::render::{Chart, RenderError, MEDIUM_SEA_GREEN, SALMON, SOURCE_NOTE};
use plotlars::{Axis, BarPlot, Legend, Rgb, Text};
use polars::prelude::*;

const WEEK_LABEL: &str = "week";
const TREND: &str = "trend";
const IMPROVED_LABEL: &str = "improved";
const NOT_IMPROVED_LABEL: &str = "not improved";

/// Axis ranges shared by all sub-charts of the weekly panel, so that years
/// can be compared at a glance.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyPanelLayout {
    /// Distinct years, in the order they first appear (chronological).
    pub years: Vec<i32>,
    /// Covers weeks 1..=52, or 1..=53 when a 53rd week is present.
    pub week_range: (f64, f64),
    /// From 0 up to the largest weekly total over all years.
    pub total_range: (f64, f64),
}

impl WeeklyPanelLayout {
    pub fn from_frame(weekly: &DataFrame) -> Result<Self, PolarsError> {
        let mut years = Vec::new();
        for year in weekly.column(YEAR)?.i32()?.into_iter().flatten() {
            if !years.contains(&year) {
                years.push(year);
            }
        }
        let last_week = weekly
            .column(WEEK_NUMBER)?
            .i32()?
            .into_iter()
            .flatten()
            .max()
            .unwrap_or(0)
            .max(52);
        let max_total = weekly
            .column(TOTAL_NEW_CASES)?
            .i64()?
            .into_iter()
            .flatten()
            .max()
            .unwrap_or(0)
            .max(0);

        Ok(Self {
            years,
            week_range: (0.5, last_week as f64 + 0.5),
            total_range: (0.0, max_total as f64),
        })
    }
}

/// One bar chart per year of weekly totals, bars coloured by whether the
/// week improved on the one before.
pub fn weekly_panel(weekly: &DataFrame, region: &str) -> Result<Vec<Chart>, RenderError> {
    let layout = WeeklyPanelLayout::from_frame(weekly)?;
    let x_axis = Axis::new()
        .value_range(vec![layout.week_range.0, layout.week_range.1])
        .show_grid(false);
    let y_axis = Axis::new()
        .value_range(vec![layout.total_range.0, layout.total_range.1])
        .show_grid(true);

    let mut charts = Vec::with_capacity(layout.years.len());
    for (i, year) in layout.years.iter().copied().enumerate() {
        let data = weekly
            .clone()
            .lazy()
            .filter(col(YEAR).eq(lit(year)))
            .select([
                col(WEEK_NUMBER).cast(DataType::String).alias(WEEK_LABEL),
                col(TOTAL_NEW_CASES),
                when(col(IMPROVED))
                    .then(lit(IMPROVED_LABEL))
                    .otherwise(lit(NOT_IMPROVED_LABEL))
                    .alias(TREND),
            ])
            .collect()?;

        let colors = trend_colors(data.column(TREND)?.str()?);

        let title = if i == 0 {
            format!(
                "Weekly Positive Cases of COVID-19 in {}<br><sup>Green bars: fewer new cases than the previous week</sup>",
                region
            )
        } else {
            format!("Weekly Positive Cases of COVID-19 in {}", region)
        };
        let y_title = format!("Number of cases {}", year);

        let plot = BarPlot::builder()
            .data(&data)
            .labels(WEEK_LABEL)
            .values(TOTAL_NEW_CASES)
            .group(TREND)
            .colors(colors)
            .plot_title(Text::from(title.as_str()).size(16))
            .x_title(Text::from(SOURCE_NOTE).size(12))
            .y_title(Text::from(y_title.as_str()))
            .x_axis(&x_axis)
            .y_axis(&y_axis)
            .legend(&Legend::new().x(0.85).y(0.95))
            .build();
        charts.push(Chart::bar(format!("weekly_{}", year), plot));
    }
    Ok(charts)
}

fn trend_color(label: &str) -> Rgb {
    if label == IMPROVED_LABEL {
        MEDIUM_SEA_GREEN
    } else {
        SALMON
    }
}

// plotlars draws groups in sorted label order and takes one colour per group
// present, so the palette follows the sorted distinct labels.
fn trend_colors(trends: &StringChunked) -> Vec<Rgb> {
    let mut labels: Vec<&str> = trends.into_iter().flatten().collect();
    labels.sort_unstable();
    labels.dedup();
    labels.into_iter().map(trend_color).collect()
}
