// handlers/alerts/create.rs - POST /alerts

use axum::{Extension, Json};
use serde::Deserialize;
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::Alert;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};

use super::ALERT_COLUMNS;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlertRequest {
    pub product_id: Uuid,
    pub threshold: f64,
}

/// POST /alerts - create a threshold alert for a product
///
/// Expected input: `{"productId": "...", "threshold": 12.5}`. New alerts
/// start active and record the creating user. At most one alert may exist
/// per product; the unique constraint on alerts.product_id makes concurrent
/// duplicate creation impossible, so the second request gets a 409 rather
/// than a second row.
pub async fn alert_create(
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateAlertRequest>,
) -> ApiResult<Alert> {
    let pool = DatabaseManager::pool().await?;

    let sql = format!(
        "WITH inserted AS (
            INSERT INTO alerts (id, product_id, threshold, is_active, created_by)
            VALUES ($1, $2, $3, TRUE, $4)
            RETURNING id, product_id, threshold, is_active, created_by
        )
        SELECT {} FROM inserted a JOIN products p ON p.id = a.product_id",
        ALERT_COLUMNS
    );

    let alert = sqlx::query_as::<_, Alert>(&sql)
        .bind(Uuid::new_v4())
        .bind(payload.product_id)
        .bind(payload.threshold)
        .bind(user.user_id)
        .fetch_one(&pool)
        .await
        .map_err(classify_insert_error)?;

    Ok(ApiResponse::created(alert))
}

fn classify_insert_error(err: sqlx::Error) -> ApiError {
    if let Some(db_err) = err.as_database_error() {
        if db_err.is_unique_violation() {
            return ApiError::conflict("An alert already exists for this product");
        }
        if db_err.is_foreign_key_violation() {
            return ApiError::bad_request("Unknown product");
        }
    }
    err.into()
}
