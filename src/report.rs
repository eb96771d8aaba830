//! Plain-text summaries of the fetched payloads.

use crate::types::payload::{NationalSummary, ProvinceDetail};
use std::fmt;

impl fmt::Display for NationalSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Update date of new cases: {}", self.latest_addition.date)?;
        writeln!(f, "Number of new recovered cases: {}", self.latest_addition.recovered)?;
        writeln!(f, "Number of new death cases: {}", self.latest_addition.deaths)?;
        writeln!(f, "Total number of positive cases: {}", self.total.positive)?;
        write!(f, "Total number of death cases: {}", self.total.deaths)
    }
}

/// Headline figures of one province.
#[derive(Debug, Clone, PartialEq)]
pub struct ProvinceSummary {
    pub province: String,
    pub last_date: Option<String>,
    pub total_cases: i64,
    pub death_percentage: f64,
    pub recovery_percentage: f64,
    pub days_reported: usize,
}

impl ProvinceSummary {
    /// `fallback_name` is used when the payload does not carry the province name.
    pub fn from_detail(detail: &ProvinceDetail, fallback_name: &str) -> Self {
        Self {
            province: detail
                .province
                .clone()
                .unwrap_or_else(|| fallback_name.to_string()),
            last_date: detail.last_date.clone(),
            total_cases: detail.total_cases,
            death_percentage: detail.death_percentage,
            recovery_percentage: detail.recovery_percentage,
            days_reported: detail.daily.len(),
        }
    }
}

impl fmt::Display for ProvinceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Total number of COVID-19 cases in {}: {}",
            self.province, self.total_cases
        )?;
        writeln!(
            f,
            "Percentage of deaths from COVID-19 in {}: {:.2}%",
            self.province, self.death_percentage
        )?;
        write!(
            f,
            "Percentage of recovery from COVID-19 in {}: {:.2}%",
            self.province, self.recovery_percentage
        )?;
        if let Some(last_date) = &self.last_date {
            write!(f, "\nDaily series: {} days up to {}", self.days_reported, last_date)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::payload::{DailyAddition, NationalTotals};

    #[test]
    fn test_national_summary_text() {
        let summary = NationalSummary {
            latest_addition: DailyAddition {
                date: "2021-09-16".to_string(),
                positive: 3145,
                recovered: 9629,
                deaths: 221,
                treated: None,
            },
            total: NationalTotals {
                positive: 4178164,
                recovered: 3981048,
                deaths: 140323,
                treated: None,
            },
        };
        let text = summary.to_string();
        assert!(text.starts_with("Update date of new cases: 2021-09-16\n"));
        assert!(text.contains("Number of new recovered cases: 9629"));
        assert!(text.ends_with("Total number of death cases: 140323"));
    }

    #[test]
    fn test_province_summary_uses_fallback_name() {
        let detail = ProvinceDetail {
            province: None,
            last_date: None,
            total_cases: 699674,
            death_percentage: 2.0149,
            recovery_percentage: 96.5,
            daily: Vec::new(),
        };
        let summary = ProvinceSummary::from_detail(&detail, "Jawa Barat");
        assert_eq!(summary.province, "Jawa Barat");
        assert_eq!(
            summary.to_string(),
            "Total number of COVID-19 cases in Jawa Barat: 699674\n\
             Percentage of deaths from COVID-19 in Jawa Barat: 2.01%\n\
             Percentage of recovery from COVID-19 in Jawa Barat: 96.50%"
        );
    }
}
