//! Wires the stages together: fetch, tidy, then the weekly and cumulative
//! aggregates. Each stage takes the previous stage's output explicitly.

use crate::config::Config;
use crate::error::Covid19Error;
use crate::fetch::error::FetchError;
use crate::fetch::fetcher::Covid19Fetcher;
use crate::frames::cumulative_frame::CumulativeFrame;
use crate::frames::daily_frame::DailyFrame;
use crate::frames::error::TransformError;
use crate::frames::raw::records_to_dataframe;
use crate::frames::tidy::tidy;
use crate::frames::weekly_frame::WeeklyFrame;
use crate::report::ProvinceSummary;
use crate::types::payload::{NationalSummary, NationalUpdate, ProvinceDetail};
use log::info;

/// Everything derived from one run.
pub struct Analysis {
    pub national: NationalSummary,
    pub province: ProvinceSummary,
    pub daily: DailyFrame,
    pub weekly: WeeklyFrame,
    pub cumulative: CumulativeFrame,
}

/// Tidy daily series plus both aggregates of it.
pub struct ProvinceTables {
    pub daily: DailyFrame,
    pub weekly: WeeklyFrame,
    pub cumulative: CumulativeFrame,
}

/// Downloads the national summary and the province detail concurrently.
pub async fn fetch_sources(
    fetcher: &Covid19Fetcher,
    province: &str,
) -> Result<(NationalUpdate, ProvinceDetail), FetchError> {
    tokio::try_join!(fetcher.national(), fetcher.province(province))
}

/// Reshapes a province payload into the daily, weekly and cumulative tables.
pub fn build_tables(detail: &ProvinceDetail, config: &Config) -> Result<ProvinceTables, TransformError> {
    let raw = records_to_dataframe(&detail.daily)?;
    info!(
        "Province payload has {} days and {} fields",
        raw.height(),
        raw.width()
    );
    let daily = tidy(raw, &config.column_mapping, config.date_encoding)?;
    let weekly = daily.weekly()?;
    let cumulative = daily.cumulative();
    Ok(ProvinceTables {
        daily,
        weekly,
        cumulative,
    })
}

/// Runs the whole analysis for `config.province`.
pub async fn run(config: &Config) -> Result<Analysis, Covid19Error> {
    let fetcher = Covid19Fetcher::new(&config.base_url);
    let (national, detail) = fetch_sources(&fetcher, &config.province).await?;
    let tables = build_tables(&detail, config)?;
    info!("Analysis for {} ready", config.province);

    Ok(Analysis {
        national: national.update,
        province: ProvinceSummary::from_detail(&detail, &config.province),
        daily: tables.daily,
        weekly: tables.weekly,
        cumulative: tables.cumulative,
    })
}
