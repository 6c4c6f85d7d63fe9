// handlers/users/role.rs - PATCH /users/:id/role

use axum::{extract::Path, Extension, Json};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::Role;
use crate::database::manager::DatabaseManager;
use crate::database::models::User;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};

use super::USER_COLUMNS;

#[derive(Debug, Deserialize)]
pub struct SetRoleRequest {
    pub role: String,
}

/// PATCH /users/:id/role - assign a role from the closed set
///
/// The role value is validated before any database access, and admins may
/// not change their own role.
pub async fn user_set_role(
    Extension(caller): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SetRoleRequest>,
) -> ApiResult<User> {
    let role = Role::parse(&payload.role)
        .ok_or_else(|| ApiError::bad_request(format!("Invalid role: {}", payload.role)))?;

    if id == caller.user_id {
        return Err(ApiError::bad_request("You cannot change your own role"));
    }

    let pool = DatabaseManager::pool().await?;

    let sql = format!(
        "UPDATE users SET role = $2 WHERE user_id = $1 RETURNING {}",
        USER_COLUMNS
    );

    let user = sqlx::query_as::<_, User>(&sql)
        .bind(id)
        .bind(role.as_str())
        .fetch_optional(&pool)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(ApiResponse::success(user))
}
