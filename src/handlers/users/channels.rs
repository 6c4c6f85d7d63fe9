// handlers/users/channels.rs - PATCH /users/:id/channels

use axum::{extract::Path, Json};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::User;
use crate::error::ApiError;
use crate::middleware::response::{ApiResponse, ApiResult};

use super::USER_COLUMNS;

#[derive(Debug, Deserialize)]
pub struct SetChannelsRequest {
    pub assigned_channels: Value,
}

/// PATCH /users/:id/channels - replace a user's channel assignments
///
/// Unlike role changes, admins may edit their own channel list.
pub async fn user_set_channels(
    Path(id): Path<Uuid>,
    Json(payload): Json<SetChannelsRequest>,
) -> ApiResult<User> {
    let channels = parse_channels(&payload.assigned_channels)?;

    let pool = DatabaseManager::pool().await?;

    let sql = format!(
        "UPDATE users SET assigned_channels = $2 WHERE user_id = $1 RETURNING {}",
        USER_COLUMNS
    );

    let user = sqlx::query_as::<_, User>(&sql)
        .bind(id)
        .bind(&channels)
        .fetch_optional(&pool)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(ApiResponse::success(user))
}

/// The wire value must be an array of channel identifier strings
fn parse_channels(value: &Value) -> Result<Vec<String>, ApiError> {
    let items = value
        .as_array()
        .ok_or_else(|| ApiError::bad_request("assigned_channels must be an array"))?;

    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| ApiError::bad_request("assigned_channels must contain only strings"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_string_arrays() {
        let channels = parse_channels(&json!(["returns", "inbound"])).unwrap();
        assert_eq!(channels, vec!["returns".to_string(), "inbound".to_string()]);
    }

    #[test]
    fn accepts_empty_arrays() {
        assert!(parse_channels(&json!([])).unwrap().is_empty());
    }

    #[test]
    fn rejects_non_array_values() {
        assert!(parse_channels(&json!("returns")).is_err());
        assert!(parse_channels(&json!({"channel": "returns"})).is_err());
        assert!(parse_channels(&json!(null)).is_err());
    }

    #[test]
    fn rejects_non_string_elements() {
        assert!(parse_channels(&json!(["returns", 7])).is_err());
    }
}
