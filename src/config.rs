//! Runtime configuration, built in code or read from the environment.

use crate::fetch::fetcher::DEFAULT_BASE_URL;
use crate::types::column_mapping::ColumnMapping;
use crate::types::date_encoding::DateEncoding;
use bon::Builder;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_PROVINCE: &str = "JAWA_BARAT";

pub const ENV_BASE_URL: &str = "COVID19_BASE_URL";
pub const ENV_PROVINCE: &str = "COVID19_PROVINCE";
pub const ENV_DATE_ENCODING: &str = "COVID19_DATE_ENCODING";
pub const ENV_OUTPUT_DIR: &str = "COVID19_OUTPUT_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Everything a run needs to know. All fields have defaults.
///
/// # Examples
///
/// ```
/// use covid19_indonesia::{Config, DateEncoding};
///
/// let config = Config::builder().province("DKI_JAKARTA").build();
/// assert_eq!(config.province, "DKI_JAKARTA");
/// assert_eq!(config.date_encoding, DateEncoding::EpochMillis);
/// assert!(config.output_dir.is_none());
/// ```
#[derive(Debug, Clone, Builder)]
pub struct Config {
    #[builder(into, default = DEFAULT_BASE_URL.to_string())]
    pub base_url: String,

    /// Province document name, upper case with underscores.
    #[builder(into, default = DEFAULT_PROVINCE.to_string())]
    pub province: String,

    /// The live feed publishes epoch milliseconds.
    #[builder(default = DateEncoding::EpochMillis)]
    pub date_encoding: DateEncoding,

    #[builder(default)]
    pub column_mapping: ColumnMapping,

    /// Where charts are written as HTML. `None` opens them in the browser.
    pub output_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config::builder().build()
    }
}

impl Config {
    /// Reads the configuration from `COVID19_*` environment variables,
    /// loading a `.env` file first if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let date_encoding = non_empty(ENV_DATE_ENCODING)
            .map(|value| {
                value
                    .parse::<DateEncoding>()
                    .map_err(|reason| ConfigError::InvalidValue {
                        key: ENV_DATE_ENCODING,
                        value,
                        reason,
                    })
            })
            .transpose()?;

        let province = non_empty(ENV_PROVINCE).map(|p| p.trim().to_uppercase().replace(' ', "_"));

        Ok(Config::builder()
            .maybe_base_url(non_empty(ENV_BASE_URL))
            .maybe_province(province)
            .maybe_date_encoding(date_encoding)
            .maybe_output_dir(non_empty(ENV_OUTPUT_DIR).map(PathBuf::from))
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() -> Result<(), ConfigError> {
        let config = Config::from_lookup(lookup(&[]))?;
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.province, DEFAULT_PROVINCE);
        assert_eq!(config.date_encoding, DateEncoding::EpochMillis);
        assert_eq!(config.column_mapping, ColumnMapping::default());
        assert_eq!(config.output_dir, None);
        Ok(())
    }

    #[test]
    fn test_overrides() -> Result<(), ConfigError> {
        let config = Config::from_lookup(lookup(&[
            (ENV_BASE_URL, "http://localhost:9000/api"),
            (ENV_PROVINCE, "dki jakarta"),
            (ENV_DATE_ENCODING, "days"),
            (ENV_OUTPUT_DIR, "charts"),
        ]))?;
        assert_eq!(config.base_url, "http://localhost:9000/api");
        assert_eq!(config.province, "DKI_JAKARTA");
        assert_eq!(config.date_encoding, DateEncoding::EpochDays);
        assert_eq!(config.output_dir, Some(PathBuf::from("charts")));
        Ok(())
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() -> Result<(), ConfigError> {
        let config = Config::from_lookup(lookup(&[(ENV_PROVINCE, "  "), (ENV_OUTPUT_DIR, "")]))?;
        assert_eq!(config.province, DEFAULT_PROVINCE);
        assert_eq!(config.output_dir, None);
        Ok(())
    }

    #[test]
    fn test_invalid_date_encoding() {
        let err = Config::from_lookup(lookup(&[(ENV_DATE_ENCODING, "fortnights")])).unwrap_err();
        match err {
            ConfigError::InvalidValue { key, value, .. } => {
                assert_eq!(key, ENV_DATE_ENCODING);
                assert_eq!(value, "fortnights");
            }
        }
    }
}
