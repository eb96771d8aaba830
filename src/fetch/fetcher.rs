use crate::fetch::error::FetchError;
use crate::types::endpoint::Endpoint;
use crate::types::payload::{NationalUpdate, ProvinceDetail};
use log::{debug, info, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;

pub const DEFAULT_BASE_URL: &str = "https://data.covid19.go.id/public/api";

/// Downloads and parses documents from the covid19.go.id public API.
///
/// Every call is a single GET; there is no retry and no caching.
pub struct Covid19Fetcher {
    base_url: String,
    client: Client,
}

impl Covid19Fetcher {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Uses a preconfigured `reqwest` client, e.g. one with a proxy or a
    /// custom user agent.
    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the nationwide summary (`update.json`).
    pub async fn national(&self) -> Result<NationalUpdate, FetchError> {
        self.fetch(&Endpoint::National).await
    }

    /// Fetches the daily history of one province, e.g. `"JAWA_BARAT"`.
    pub async fn province(&self, province: &str) -> Result<ProvinceDetail, FetchError> {
        self.fetch(&Endpoint::Province(province.to_string())).await
    }

    /// Fetches `endpoint` and deserializes its JSON body into `T`.
    pub async fn fetch<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T, FetchError> {
        let url = endpoint.url(&self.base_url);
        info!("Downloading {} data from {}", endpoint, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    FetchError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    FetchError::NetworkRequest(url, e)
                });
            }
        };

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::ResponseBody(url.clone(), e))?;
        debug!("Received {} bytes from {}", body.len(), url);

        serde_json::from_slice(&body).map_err(|e| FetchError::from_json(url, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const NATIONAL_BODY: &str = r#"{"update": {
        "penambahan": {"jumlah_positif": 10, "jumlah_meninggal": 1, "jumlah_sembuh": 5, "tanggal": "2021-09-16"},
        "total": {"jumlah_positif": 100, "jumlah_sembuh": 80, "jumlah_meninggal": 3}
    }}"#;

    const PROVINCE_BODY: &str = r#"{
        "provinsi": "JAWA BARAT", "kasus_total": 30,
        "meninggal_persen": 3.3, "sembuh_persen": 60.0,
        "list_perkembangan": [
            {"tanggal": 1583020800000, "KASUS": 10, "SEMBUH": 2, "MENINGGAL": 0, "AKUMULASI_KASUS": 10},
            {"tanggal": 1583107200000, "KASUS": 20, "SEMBUH": 0, "MENINGGAL": 1, "AKUMULASI_KASUS": 30}
        ]
    }"#;

    // Serves exactly one HTTP response and returns the base URL to reach it.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut request = vec![0u8; 8192];
                let _ = socket.read(&mut request).await;
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{}", addr)
    }

    fn local_fetcher(base_url: &str) -> Covid19Fetcher {
        let client = Client::builder().no_proxy().build().unwrap();
        Covid19Fetcher::with_client(base_url, client)
    }

    #[tokio::test]
    async fn test_fetch_national() -> Result<(), FetchError> {
        let base = serve_once("200 OK", NATIONAL_BODY).await;
        let national = local_fetcher(&base).national().await?;
        assert_eq!(national.update.latest_addition.positive, 10);
        assert_eq!(national.update.total.recovered, 80);
        assert_eq!(national.update.total.treated, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_province() -> Result<(), FetchError> {
        let base = serve_once("200 OK", PROVINCE_BODY).await;
        let detail = local_fetcher(&base).province("JAWA_BARAT").await?;
        assert_eq!(detail.total_cases, 30);
        assert_eq!(detail.daily.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_http_status_error() {
        let base = serve_once("404 Not Found", "{}").await;
        let err = local_fetcher(&base).province("ATLANTIS").await.unwrap_err();
        match err {
            FetchError::HttpStatus { url, status, .. } => {
                assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
                assert!(url.ends_with("/prov_detail_ATLANTIS.json"));
            }
            other => panic!("expected HttpStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let base = serve_once("200 OK", "{\"update\": ").await;
        let err = local_fetcher(&base).national().await.unwrap_err();
        assert!(matches!(err, FetchError::JsonParse(..)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_unexpected_payload_shape() {
        let base = serve_once("200 OK", r#"{"update": {"total": {}}}"#).await;
        let err = local_fetcher(&base).national().await.unwrap_err();
        assert!(matches!(err, FetchError::PayloadShape(..)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap()
        };
        let err = local_fetcher(&format!("http://{}", addr))
            .national()
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::NetworkRequest(..)), "got {:?}", err);
    }

    #[tokio::test]
    #[ignore = "requires network access to data.covid19.go.id"]
    async fn test_live_province() -> Result<(), FetchError> {
        let detail = Covid19Fetcher::new(DEFAULT_BASE_URL)
            .province("JAWA_BARAT")
            .await?;
        assert!(!detail.daily.is_empty());
        Ok(())
    }
}
