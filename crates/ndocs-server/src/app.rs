//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/api/catalog", get(handlers::catalog::get_catalog))
        .route("/api/pages/{page_id}", get(handlers::pages::get_page));

    let page_routes = Router::new()
        .route("/", get(handlers::index::get_index))
        .route("/assistant/{page_id}", get(handlers::pages::get_page_view));

    let mut router = Router::new().merge(api_routes).merge(page_routes);
    for (name, value) in security::SECURITY_HEADERS {
        router = router.layer(security::header_layer(name, value));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}
