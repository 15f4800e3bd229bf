//! Room, Device, Users and House-User routes (stateless validate-and-echo).

use crate::handlers::{device, house_user, room, user};
use axum::{routing::get, routing::post, Router};

pub fn scaffold_routes() -> Router {
    Router::new()
        .route("/room/add", post(room::add))
        .route("/room/remove", post(room::remove))
        .route("/room/update", post(room::update))
        .route("/room/query", get(room::query).post(room::query_body))
        .route("/device/add", post(device::add))
        .route("/device/remove", post(device::remove))
        .route("/device/update", post(device::update))
        .route("/device/query", get(device::query).post(device::query_body))
        .route("/users/add", post(user::add))
        .route("/users/remove", post(user::remove))
        .route("/users/update", post(user::update))
        .route("/users/query", get(user::query).post(user::query_body))
        .route("/house-user/add", post(house_user::add))
        .route("/house-user/remove", post(house_user::remove))
        .route("/house-user/update", post(house_user::update))
        .route("/house-user/query", get(house_user::query).post(house_user::query_body))
}
