use crate::frames::cumulative_frame::{ACTIVE_TOTAL, DEATH_TOTAL, RECOVERED_TOTAL};
use crate::render::{Chart, RenderError, BROWN, INDIAN_RED, ORANGE, SOURCE_NOTE, TEAL};
use crate::types::column_mapping::DATE;
use plotlars::{Axis, Legend, Line, Text, TimeSeriesPlot};
use polars::prelude::DataFrame;

/// Line chart of the running number of active cases.
pub fn active_cases_chart(cumulative: &DataFrame, region: &str) -> Result<Chart, RenderError> {
    let title = format!("Accumulation of Active COVID-19 Cases in {}", region);
    let plot = TimeSeriesPlot::builder()
        .data(cumulative)
        .x(DATE)
        .y(ACTIVE_TOTAL)
        .colors(vec![BROWN])
        .lines(vec![Line::Solid])
        .plot_title(Text::from(title.as_str()).size(20))
        .x_title(Text::from(SOURCE_NOTE).size(12))
        .y_title(Text::from("Active accumulation"))
        .y_axis(&Axis::new().show_grid(true))
        .build();
    Ok(Chart::time_series("cumulative_active", plot))
}

/// Active, recovered and deceased running totals on one chart.
pub fn case_dynamics_chart(cumulative: &DataFrame, region: &str) -> Result<Chart, RenderError> {
    let title = format!("Dynamics of COVID-19 Cases in {}", region);
    let plot = TimeSeriesPlot::builder()
        .data(cumulative)
        .x(DATE)
        .y(ACTIVE_TOTAL)
        .additional_series(vec![RECOVERED_TOTAL, DEATH_TOTAL])
        .colors(vec![ORANGE, TEAL, INDIAN_RED])
        .lines(vec![Line::Solid, Line::Solid, Line::Solid])
        .plot_title(Text::from(title.as_str()).size(20))
        .x_title(Text::from(SOURCE_NOTE).size(12))
        .y_title(Text::from("Accumulated cases"))
        .legend(&Legend::new().x(0.05).y(0.95))
        .y_axis(&Axis::new().show_grid(true))
        .build();
    Ok(Chart::time_series("cumulative_dynamics", plot))
}
