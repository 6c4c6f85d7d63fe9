use serde_json::{json, Value};

use crate::config::ReportsConfig;
use crate::error::ApiError;

use super::join_endpoint;

/// Client for the Metabase query API. Only pre-built report cards are
/// executed; the dashboard never sends ad-hoc queries.
#[derive(Clone)]
pub struct MetabaseClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    pub inventory_card_id: u32,
}

impl MetabaseClient {
    pub fn from_config(config: &ReportsConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.metabase_url.clone(),
            api_key: config.metabase_api_key.clone(),
            inventory_card_id: config.metabase_inventory_card_id,
        }
    }

    /// Execute a saved card and return its result rows
    pub async fn card_rows(&self, card_id: u32) -> Result<Vec<Value>, ApiError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            tracing::error!("Metabase card {} requested but METABASE_API_KEY is not set", card_id);
            ApiError::internal_server_error("Metabase is not configured")
        })?;

        let url = join_endpoint(&self.base_url, &format!("api/card/{}/query", card_id));

        let response = self
            .http
            .post(&url)
            .header("x-api-key", api_key)
            .json(&json!({}))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Metabase request to {} failed: {}", url, e);
                ApiError::upstream("Failed to reach Metabase", e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Metabase returned {} for {}: {}", status, url, body);
            return Err(ApiError::upstream(
                "Metabase query failed",
                format!("upstream status {}", status),
            ));
        }

        let body: Value = response.json().await.map_err(|e| {
            tracing::error!("Metabase response from {} was not valid JSON: {}", url, e);
            ApiError::upstream("Invalid response from Metabase", e.to_string())
        })?;

        Ok(extract_rows(&body))
    }
}

/// Card query results arrive as { data: { rows: [...], cols: [...] } };
/// anything else is treated as an empty result set
fn extract_rows(body: &Value) -> Vec<Value> {
    body.get("data")
        .and_then(|data| data.get("rows"))
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}
