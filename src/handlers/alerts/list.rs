// handlers/alerts/list.rs - GET /alerts

use crate::database::manager::DatabaseManager;
use crate::database::models::Alert;
use crate::middleware::response::{ApiResponse, ApiResult};

use super::ALERT_COLUMNS;

/// GET /alerts - all alerts with their product names, ordered by product
/// name ascending. Always 200 with a possibly-empty list.
pub async fn alert_list() -> ApiResult<Vec<Alert>> {
    let pool = DatabaseManager::pool().await?;

    let sql = format!(
        "SELECT {} FROM alerts a JOIN products p ON p.id = a.product_id ORDER BY p.name ASC",
        ALERT_COLUMNS
    );

    let alerts = sqlx::query_as::<_, Alert>(&sql).fetch_all(&pool).await?;

    Ok(ApiResponse::success(alerts))
}
