//! Routers: dataset API, operational endpoints, and the assembled application.

pub mod api;
pub mod common;
pub use api::*;
pub use common::*;

use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

/// Full application: dataset routes plus health/readiness/version, with tracing, panic recovery and permissive CORS.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(api_routes(state.clone()))
        .merge(common_routes_with_ready(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::new())
                .layer(CorsLayer::permissive()),
        )
}
