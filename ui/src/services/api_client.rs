use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use shared::models::{PriceHistory, Stock, Timeframe};

use crate::error::UiError;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin JSON client for the trading API.
///
/// Success bodies deserialize straight into the caller's type. On a
/// non-success status the server's `{"error": "..."}` message is surfaced
/// when present, with a generic fallback otherwise.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, UiError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, UiError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        tracing::debug!("API client for {}", base_url);
        Ok(Self { base_url, http })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, UiError> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);
        let response = self.http.get(&url).send().await.map_err(|e| {
            tracing::error!("API Error: GET {}: {}", url, e);
            e
        })?;
        Self::read_json(response).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, UiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!("POST {}", url);
        let response = self.http.post(&url).json(body).send().await.map_err(|e| {
            tracing::error!("API Error: POST {}: {}", url, e);
            e
        })?;
        Self::read_json(response).await
    }

    /// Current quote for one symbol.
    pub async fn stock(&self, symbol: &str) -> Result<Stock, UiError> {
        self.get(&format!("/api/stock/{symbol}")).await
    }

    /// Simulated price series for the chart widget.
    pub async fn stock_history(
        &self,
        symbol: &str,
        timeframe: Timeframe,
    ) -> Result<PriceHistory, UiError> {
        self.get(&format!(
            "/api/stock/{symbol}/history?timeframe={}",
            timeframe.as_query()
        ))
        .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, UiError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = extract_error_message(&body);
            tracing::error!("API Error: {} -> {}", status, message);
            return Err(UiError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| UiError::ApiError {
            status: status.as_u16(),
            message: format!("unexpected response body: {e}"),
        })
    }
}

/// Pulls the `error` field out of a JSON failure body, falling back to a
/// generic message when the body has some other shape.
fn extract_error_message(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .unwrap_or_else(|| "API request failed".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_message_from_server_body() {
        assert_eq!(
            extract_error_message(r#"{"error": "Stock not found"}"#),
            "Stock not found"
        );
    }

    #[test]
    fn test_extract_error_message_fallbacks() {
        assert_eq!(extract_error_message(r#"{"ok": false}"#), "API request failed");
        assert_eq!(extract_error_message("<html>502</html>"), "API request failed");
        assert_eq!(extract_error_message(""), "API request failed");
    }

    #[test]
    fn test_url_joining_normalizes_slashes() {
        let client = ApiClient::new("http://localhost:5000/").unwrap();
        assert_eq!(
            client.url("/api/stock/AAPL"),
            "http://localhost:5000/api/stock/AAPL"
        );
        assert_eq!(
            client.url("api/stock/AAPL"),
            "http://localhost:5000/api/stock/AAPL"
        );
    }
}
