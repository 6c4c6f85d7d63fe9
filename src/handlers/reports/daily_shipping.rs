// handlers/reports/daily_shipping.rs - GET /reports/daily-shipping

use axum::{extract::State, Json};
use serde_json::Value;

use crate::error::ApiError;

use super::ReportsState;

/// GET /reports/daily-shipping - pass the warehouse shipping report
/// through verbatim
pub async fn daily_shipping(State(state): State<ReportsState>) -> Result<Json<Value>, ApiError> {
    let body = state.wms.fetch_report("reports/daily-shipping").await?;
    Ok(Json(body))
}
