use serde_json::Value;

use crate::config::ReportsConfig;
use crate::error::ApiError;

use super::join_endpoint;

/// Read-only client for the warehouse-management API. Reports are fetched
/// with a bearer token and passed through to the caller verbatim.
#[derive(Clone)]
pub struct WmsClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl WmsClient {
    pub fn from_config(config: &ReportsConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.wms_api_url.clone(),
            token: config.wms_api_token.clone(),
        }
    }

    /// GET a report from the warehouse API and return its JSON body as-is
    pub async fn fetch_report(&self, path: &str) -> Result<Value, ApiError> {
        // Configuration is checked before any network traffic
        let token = self.token.as_deref().ok_or_else(|| {
            tracing::error!("WMS report requested but WMS_API_TOKEN is not set");
            ApiError::internal_server_error("Warehouse API is not configured")
        })?;

        let url = join_endpoint(&self.base_url, path);

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("WMS request to {} failed: {}", url, e);
                ApiError::upstream("Failed to reach warehouse API", e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("WMS returned {} for {}: {}", status, url, body);
            return Err(ApiError::upstream(
                "Warehouse API request failed",
                format!("upstream status {}", status),
            ));
        }

        response.json::<Value>().await.map_err(|e| {
            tracing::error!("WMS response from {} was not valid JSON: {}", url, e);
            ApiError::upstream("Invalid response from warehouse API", e.to_string())
        })
    }
}
