// handlers/reports/inventory.rs - GET /reports/inventory

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::error::ApiError;

use super::ReportsState;

/// GET /reports/inventory - run the saved inventory card in Metabase and
/// reshape the result rows
pub async fn inventory(State(state): State<ReportsState>) -> Result<Json<Value>, ApiError> {
    let card_id = state.metabase.inventory_card_id;
    let rows = state.metabase.card_rows(card_id).await?;

    Ok(Json(json!({
        "success": true,
        "data": rows,
        "row_count": rows.len()
    })))
}
