// handlers/users/list.rs - GET /users

use crate::database::manager::DatabaseManager;
use crate::database::models::User;
use crate::middleware::response::{ApiResponse, ApiResult};

use super::USER_COLUMNS;

/// GET /users - all accounts, newest first
pub async fn user_list() -> ApiResult<Vec<User>> {
    let pool = DatabaseManager::pool().await?;

    let sql = format!("SELECT {} FROM users ORDER BY created_at DESC", USER_COLUMNS);

    let users = sqlx::query_as::<_, User>(&sql).fetch_all(&pool).await?;

    Ok(ApiResponse::success(users))
}
