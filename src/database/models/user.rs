use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Dashboard user account. Rows are returned to clients as stored, so the
/// JSON shape follows the column names.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub user_id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub assigned_channels: Vec<String>,
    pub created_at: DateTime<Utc>,
}
