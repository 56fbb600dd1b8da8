mod handlers;

pub use handlers::ApiError;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::store::Store;

pub fn create_router(store: Store) -> Router {
    Router::new()
        // Catalog
        .route("/restaurants", get(handlers::list_restaurants))
        .route("/restaurants/{id}", get(handlers::get_restaurant))
        // Orders
        .route("/orders", post(handlers::place_order))
        // Health
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(store)
}
