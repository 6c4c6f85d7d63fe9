// handlers/alerts/update.rs - PUT /alerts/:id

use axum::{extract::Path, Json};
use serde::Deserialize;
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::Alert;
use crate::error::ApiError;
use crate::middleware::response::{ApiResponse, ApiResult};

use super::ALERT_COLUMNS;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAlertRequest {
    pub threshold: Option<f64>,
    pub is_active: Option<bool>,
}

/// PUT /alerts/:id - update threshold and/or active flag
///
/// Fields absent from the body keep their stored value (COALESCE merge).
pub async fn alert_update(
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAlertRequest>,
) -> ApiResult<Alert> {
    let pool = DatabaseManager::pool().await?;

    let sql = format!(
        "UPDATE alerts a
         SET threshold = COALESCE($2, a.threshold),
             is_active = COALESCE($3, a.is_active)
         FROM products p
         WHERE a.id = $1 AND p.id = a.product_id
         RETURNING {}",
        ALERT_COLUMNS
    );

    let alert = sqlx::query_as::<_, Alert>(&sql)
        .bind(id)
        .bind(payload.threshold)
        .bind(payload.is_active)
        .fetch_optional(&pool)
        .await?
        .ok_or_else(|| ApiError::not_found("Alert not found"))?;

    Ok(ApiResponse::success(alert))
}
