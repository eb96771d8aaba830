use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read response body from {0}")]
    ResponseBody(String, #[source] reqwest::Error),

    // Not JSON at all (syntax error, truncated body)
    #[error("Response from {0} is not valid JSON")]
    JsonParse(String, #[source] serde_json::Error),

    // Valid JSON, but fields are missing or have the wrong type
    #[error("Response from {0} does not have the expected shape")]
    PayloadShape(String, #[source] serde_json::Error),
}

impl FetchError {
    pub(crate) fn from_json(url: String, err: serde_json::Error) -> Self {
        if err.is_data() {
            FetchError::PayloadShape(url, err)
        } else {
            FetchError::JsonParse(url, err)
        }
    }
}
