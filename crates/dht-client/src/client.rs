//! Client for the sensor's HTTP endpoints

use std::sync::Arc;

use crate::io::HttpClient;
use crate::reading::{Conditions, HistoryResponse, Reading};

/// Path of the history bootstrap endpoint
pub const HISTORY_PATH: &str = "/dht_history";
/// Path of the current-reading endpoint
pub const DATA_PATH: &str = "/dht_data";

/// Client for the two DHT endpoints, base URL is the page origin
pub struct DhtClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for DhtClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DhtClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl DhtClient {
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        tracing::debug!("Created DhtClient for {}", base_url);
        Self { base_url, http }
    }

    /// Fetch the bounded history used to bootstrap the chart, in response order
    pub async fn fetch_history(&self) -> crate::Result<Vec<Reading>> {
        let url = format!("{}{}", self.base_url, HISTORY_PATH);
        tracing::debug!("Fetching history from {}", url);

        let response = self.http.get(&url).await?;
        if response.status != 200 {
            return Err(crate::DhtError::Http(format!(
                "GET {} returned status {}",
                url, response.status
            )));
        }

        let parsed: HistoryResponse = serde_json::from_str(&response.body)?;
        tracing::debug!("Fetched {} history readings", parsed.history.len());
        Ok(parsed.history)
    }

    /// Fetch the latest reading. The receipt timestamp is the caller's
    /// concern; the body carries only the two values.
    pub async fn fetch_current(&self) -> crate::Result<Conditions> {
        let url = format!("{}{}", self.base_url, DATA_PATH);
        tracing::debug!("Fetching current reading from {}", url);

        let response = self.http.get(&url).await?;
        if response.status != 200 {
            return Err(crate::DhtError::Http(format!(
                "GET {} returned status {}",
                url, response.status
            )));
        }

        let conditions: Conditions = serde_json::from_str(&response.body)?;
        Ok(conditions)
    }
}
