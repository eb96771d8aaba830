//! Typed views of the JSON documents returned by the covid19.go.id API.
//!
//! Field names on the wire are Indonesian; the structs expose English names.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Body of `update.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NationalUpdate {
    pub update: NationalSummary,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NationalSummary {
    #[serde(rename = "penambahan")]
    pub latest_addition: DailyAddition,
    pub total: NationalTotals,
}

/// Additions reported for the most recent update date.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DailyAddition {
    #[serde(rename = "tanggal")]
    pub date: String,
    #[serde(rename = "jumlah_positif")]
    pub positive: i64,
    #[serde(rename = "jumlah_sembuh")]
    pub recovered: i64,
    #[serde(rename = "jumlah_meninggal")]
    pub deaths: i64,
    #[serde(rename = "jumlah_dirawat", default)]
    pub treated: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NationalTotals {
    #[serde(rename = "jumlah_positif")]
    pub positive: i64,
    #[serde(rename = "jumlah_sembuh")]
    pub recovered: i64,
    #[serde(rename = "jumlah_meninggal")]
    pub deaths: i64,
    #[serde(rename = "jumlah_dirawat", default)]
    pub treated: Option<i64>,
}

/// Body of `prov_detail_<PROVINCE>.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProvinceDetail {
    #[serde(rename = "provinsi", default)]
    pub province: Option<String>,
    #[serde(default)]
    pub last_date: Option<String>,
    #[serde(rename = "kasus_total")]
    pub total_cases: i64,
    #[serde(rename = "meninggal_persen")]
    pub death_percentage: f64,
    #[serde(rename = "sembuh_persen")]
    pub recovery_percentage: f64,
    /// Raw per-day objects, keyed by upstream field names. Reshaped by
    /// [`crate::tidy`].
    #[serde(rename = "list_perkembangan")]
    pub daily: Vec<Map<String, Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_national_update() -> Result<(), serde_json::Error> {
        let body = r#"{
            "data": {"id": 1},
            "update": {
                "penambahan": {
                    "jumlah_positif": 3145, "jumlah_meninggal": 221,
                    "jumlah_sembuh": 9629, "jumlah_dirawat": -6705,
                    "tanggal": "2021-09-16", "created": "2021-09-16 16:18:35"
                },
                "harian": [],
                "total": {
                    "jumlah_positif": 4178164, "jumlah_dirawat": 56758,
                    "jumlah_sembuh": 3981048, "jumlah_meninggal": 140323
                }
            }
        }"#;
        let parsed: NationalUpdate = serde_json::from_str(body)?;
        assert_eq!(parsed.update.latest_addition.date, "2021-09-16");
        assert_eq!(parsed.update.latest_addition.recovered, 9629);
        assert_eq!(parsed.update.latest_addition.treated, Some(-6705));
        assert_eq!(parsed.update.total.deaths, 140323);
        Ok(())
    }

    #[test]
    fn test_parse_province_detail() -> Result<(), serde_json::Error> {
        let body = r#"{
            "last_date": "2021-09-15",
            "provinsi": "JAWA BARAT",
            "kasus_total": 699674,
            "meninggal_persen": 2.0,
            "sembuh_persen": 96.5,
            "list_perkembangan": [
                {"tanggal": 1583020800000, "KASUS": 0, "MENINGGAL": 0, "SEMBUH": 0,
                 "DIRAWAT_OR_ISOLASI": 0, "AKUMULASI_KASUS": 0}
            ]
        }"#;
        let parsed: ProvinceDetail = serde_json::from_str(body)?;
        assert_eq!(parsed.province.as_deref(), Some("JAWA BARAT"));
        assert_eq!(parsed.total_cases, 699674);
        assert_eq!(parsed.daily.len(), 1);
        assert_eq!(parsed.daily[0]["tanggal"], 1583020800000i64);
        Ok(())
    }

    #[test]
    fn test_province_detail_requires_daily_list() {
        let body = r#"{"kasus_total": 1, "meninggal_persen": 0.0, "sembuh_persen": 0.0}"#;
        let err = serde_json::from_str::<ProvinceDetail>(body).unwrap_err();
        assert!(err.is_data());
    }
}
