// handlers/reports/bulk_orders.rs - GET /reports/b2b-bulk-orders

use axum::{extract::State, Json};
use serde_json::Value;

use crate::error::ApiError;

use super::ReportsState;

/// GET /reports/b2b-bulk-orders - pass the B2B bulk order report
/// through verbatim
pub async fn b2b_bulk_orders(State(state): State<ReportsState>) -> Result<Json<Value>, ApiError> {
    let body = state.wms.fetch_report("reports/b2b-bulk-orders").await?;
    Ok(Json(body))
}
