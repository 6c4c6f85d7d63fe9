pub mod auth;
pub mod clients;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;

use axum::{middleware::from_fn, routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::reports::ReportsState;
use crate::middleware::auth::jwt_auth_middleware;
use crate::middleware::require::{require_admin, require_alert_manager};

pub fn app() -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Authenticated resources
        .merge(alerts_routes())
        .merge(users_routes())
        .merge(reports_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn alerts_routes() -> Router {
    use axum::routing::{post, put};
    use handlers::alerts;

    // Mutations are limited to admins and analysts; any authenticated
    // user may list
    let manage = Router::new()
        .route("/alerts", post(alerts::alert_create))
        .route(
            "/alerts/:id",
            put(alerts::alert_update).delete(alerts::alert_delete),
        )
        .route_layer(from_fn(require_alert_manager));

    Router::new()
        .route("/alerts", get(alerts::alert_list))
        .merge(manage)
        .route_layer(from_fn(jwt_auth_middleware))
}

fn users_routes() -> Router {
    use axum::routing::{delete, patch};
    use handlers::users;

    Router::new()
        .route("/users", get(users::user_list))
        .route("/users/:id/role", patch(users::user_set_role))
        .route("/users/:id/channels", patch(users::user_set_channels))
        .route("/users/:id", delete(users::user_delete))
        .route_layer(from_fn(require_admin))
        .route_layer(from_fn(jwt_auth_middleware))
}

fn reports_routes() -> Router {
    use handlers::reports;

    let state = ReportsState::from_config(&config::config().reports);

    Router::new()
        .route("/reports/daily-shipping", get(reports::daily_shipping))
        .route("/reports/b2b-bulk-orders", get(reports::b2b_bulk_orders))
        .route("/reports/inventory", get(reports::inventory))
        .route_layer(from_fn(jwt_auth_middleware))
        .with_state(state)
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Opsdash API",
            "version": version,
            "description": "Operations dashboard backend API",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "alerts": "/alerts[/:id] (authenticated; mutations require admin or analyst)",
                "users": "/users[/:id] (admin)",
                "reports": "/reports/daily-shipping, /reports/b2b-bulk-orders, /reports/inventory (authenticated)",
            }
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match crate::database::manager::DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
