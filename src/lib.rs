mod config;
mod error;
mod fetch;
mod frames;
pub mod pipeline;
mod report;
mod types;

#[cfg(feature = "charts")]
pub mod render;

pub use config::*;
pub use error::Covid19Error;

pub use fetch::error::FetchError;
pub use fetch::fetcher::*;

pub use frames::cumulative_frame::*;
pub use frames::daily_frame::*;
pub use frames::error::TransformError;
pub use frames::raw::records_to_dataframe;
pub use frames::tidy::tidy;
pub use frames::weekly_frame::*;

pub use report::ProvinceSummary;

pub use types::column_mapping::*;
pub use types::date_encoding::DateEncoding;
pub use types::endpoint::Endpoint;
pub use types::payload::*;
pub use types::records::*;

pub use pipeline::{build_tables, fetch_sources, run, Analysis, ProvinceTables};
