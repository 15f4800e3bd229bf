//! Route tables and the assembled application router.

pub mod common;
pub mod house;
pub mod scaffold;

pub use common::common_routes_with_ready;
pub use house::house_routes;
pub use scaffold::scaffold_routes;

use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Full application: health/readiness, House CRUD, and the scaffold endpoints,
/// with request tracing and a body size limit.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(house_routes(state))
        .merge(scaffold_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(body_limit)),
        )
}
