// handlers/users/delete.rs - DELETE /users/:id

use axum::{extract::Path, Extension};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};

/// DELETE /users/:id - remove an account. Admins cannot delete themselves.
pub async fn user_delete(
    Extension(caller): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> ApiResult<Value> {
    if id == caller.user_id {
        return Err(ApiError::bad_request("You cannot delete your own account"));
    }

    let pool = DatabaseManager::pool().await?;

    let deleted =
        sqlx::query_scalar::<_, Uuid>("DELETE FROM users WHERE user_id = $1 RETURNING user_id")
            .bind(id)
            .fetch_optional(&pool)
            .await?
            .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(ApiResponse::success(
        json!({ "deleted": true, "user_id": deleted }),
    ))
}
