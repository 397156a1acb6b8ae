//! Router assembly: meta routes at the root, the REST surface under /api/v1.

use crate::handlers::{auth, customers, meta, rentals};
use crate::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};

pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .route("/customers", post(customers::create).get(customers::list))
        .route(
            "/customers/:id",
            get(customers::read)
                .put(customers::update)
                .delete(customers::delete),
        )
        .route("/customers/:id/rentals", get(rentals::list_for_customer))
        .route("/rentals", post(rentals::create).get(rentals::list))
        .route("/rentals/:id", get(rentals::read))
        .route("/rentals/:id/return", put(rentals::mark_returned))
        .route("/auth/register", post(auth::register))
        .route("/auth/token", post(auth::token))
        .route("/auth/me", get(auth::me));

    Router::new()
        .route("/", get(meta::index))
        .route("/health", get(meta::health))
        .route("/ready", get(meta::ready))
        .nest("/api/v1", api)
        .with_state(state)
}
