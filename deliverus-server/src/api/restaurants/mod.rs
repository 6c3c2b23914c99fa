//! Restaurant API
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /restaurants | GET, POST | POST only |
//! | /restaurants/{restaurant_id} | GET, PUT, DELETE | PUT, DELETE |
//! | /restaurants/{restaurant_id}/status | GET, PATCH | yes |
//! | /restaurants/{restaurant_id}/promote | PATCH | yes |
//! | /users/myrestaurants | GET | yes |

mod handler;

use axum::{
    Router,
    routing::{get, patch},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/restaurants", routes())
        .route("/users/myrestaurants", get(handler::index_owner))
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::index).post(handler::create))
        .route(
            "/{restaurant_id}",
            get(handler::show).put(handler::update).delete(handler::destroy),
        )
        .route(
            "/{restaurant_id}/status",
            get(handler::can_change_status).patch(handler::update_status),
        )
        .route("/{restaurant_id}/promote", patch(handler::promote))
}
