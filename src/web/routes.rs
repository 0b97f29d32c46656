use super::handlers;
use super::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

pub fn admin_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::admin::index))
        .route("/admin/settings", get(handlers::admin::settings))
        .route("/admin/settings", post(handlers::admin::save_settings))
        .route("/admin/rebuild", post(handlers::ajax::rebuild))
}
