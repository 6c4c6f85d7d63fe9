// handlers/alerts/delete.rs - DELETE /alerts/:id

use axum::extract::Path;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::error::ApiError;
use crate::middleware::response::{ApiResponse, ApiResult};

/// DELETE /alerts/:id - remove an alert, 404 when the id is unknown
pub async fn alert_delete(Path(id): Path<Uuid>) -> ApiResult<Value> {
    let pool = DatabaseManager::pool().await?;

    let deleted = sqlx::query_scalar::<_, Uuid>("DELETE FROM alerts WHERE id = $1 RETURNING id")
        .bind(id)
        .fetch_optional(&pool)
        .await?
        .ok_or_else(|| ApiError::not_found("Alert not found"))?;

    Ok(ApiResponse::success(json!({ "deleted": true, "id": deleted })))
}
