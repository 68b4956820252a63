//! Route tables and the assembled application router.

mod common;
mod resource;
pub use common::common_routes;
pub use resource::{resource_routes, RESOURCES_PREFIX};

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Full application: common routes plus `/resources`, with CORS, body limit and request tracing.
///
/// The limit replaces axum's 2 MiB default and is enforced while `JsonPayload`
/// buffers the body, so oversized requests get the JSON 413 body.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest(RESOURCES_PREFIX, resource_routes(state))
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
