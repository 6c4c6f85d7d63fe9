// Role capability checks, composed in front of the resource routers.
// Self-targeting restrictions (own role, own account) stay as explicit
// guard clauses in the handlers themselves.

use axum::{extract::Request, middleware::Next, response::Response};

use crate::auth::Role;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Whole-resource gate for user administration: admin only
pub async fn require_admin(request: Request, next: Next) -> Result<Response, ApiError> {
    let user = current_user(&request)?;
    if user.role != Role::Admin {
        return Err(ApiError::forbidden("Administrator role required"));
    }
    Ok(next.run(request).await)
}

/// Gate for alert mutations: admin or analyst
pub async fn require_alert_manager(request: Request, next: Next) -> Result<Response, ApiError> {
    let user = current_user(&request)?;
    if !user.role.can_manage_alerts() {
        return Err(ApiError::forbidden("Admin or analyst role required"));
    }
    Ok(next.run(request).await)
}

/// Caller context is injected by jwt_auth_middleware, which must run first
fn current_user(request: &Request) -> Result<&AuthUser, ApiError> {
    request
        .extensions()
        .get::<AuthUser>()
        .ok_or_else(|| ApiError::unauthorized("Authentication required"))
}
