//! Defines the endpoints of the covid19.go.id public API this crate reads from.

use std::fmt;

/// One of the JSON documents published under the public API base URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Nationwide summary: latest daily additions and running totals.
    National,
    /// Detailed daily history for a single province, e.g. `"JAWA_BARAT"`.
    ///
    /// The name is used verbatim in the document name, so it must follow the
    /// API's upper-case, underscore separated convention.
    Province(String),
}

impl Endpoint {
    pub(crate) fn document_name(&self) -> String {
        match self {
            Endpoint::National => "update.json".to_string(),
            Endpoint::Province(name) => format!("prov_detail_{}.json", name),
        }
    }

    /// Full URL of this endpoint below `base_url`.
    ///
    /// # Examples
    ///
    /// ```
    /// use covid19_indonesia::Endpoint;
    ///
    /// let url = Endpoint::Province("JAWA_BARAT".into()).url("https://data.covid19.go.id/public/api/");
    /// assert_eq!(url, "https://data.covid19.go.id/public/api/prov_detail_JAWA_BARAT.json");
    /// ```
    pub fn url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.document_name())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::National => write!(f, "national"),
            Endpoint::Province(name) => write!(f, "province {}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_national_url() {
        assert_eq!(
            Endpoint::National.url("https://data.covid19.go.id/public/api"),
            "https://data.covid19.go.id/public/api/update.json"
        );
    }

    #[test]
    fn test_province_url_trims_trailing_slash() {
        let endpoint = Endpoint::Province("DKI_JAKARTA".to_string());
        assert_eq!(
            endpoint.url("http://127.0.0.1:8080/"),
            "http://127.0.0.1:8080/prov_detail_DKI_JAKARTA.json"
        );
        assert_eq!(endpoint.to_string(), "province DKI_JAKARTA");
    }
}
