//! Route handlers

pub mod todos;

use axum::Router;
use tower::Layer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the complete HTTP service
///
/// Trailing slashes are trimmed before routing, so `/todos/` and `/todos`
/// reach the same handler.
pub fn app(state: AppState, config: &ServerConfig) -> NormalizePath<Router> {
    let mut router = todos::router().with_state(state);

    if config.cors {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    let router = router.layer(TraceLayer::new_for_http());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
