//! API routes for the SafeRoute server.

pub mod routes;
pub mod zones;

use axum::Router;

pub fn routes() -> Router<std::sync::Arc<crate::state::AppState>> {
    routes::create_router()
}
