//! House routes. Mutations are POST-only; query accepts GET (query string) and POST (JSON body).

use crate::handlers::house::{add, query, query_body, remove, update};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn house_routes(state: AppState) -> Router {
    Router::new()
        .route("/house/add", post(add))
        .route("/house/remove", post(remove))
        .route("/house/update", post(update))
        .route("/house/query", get(query).post(query_body))
        .with_state(state)
}
