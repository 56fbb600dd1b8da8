use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::*;
use crate::store::Store;

// ============================================================
// Error Handling
// ============================================================

/// Errors surfaced to API clients.
///
/// Both variants are terminal within the handler that produces them and map
/// to a fixed-shape JSON body `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Restaurant not found")]
    RestaurantNotFound,
    #[error("Invalid order format")]
    InvalidOrder,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::RestaurantNotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidOrder => StatusCode::BAD_REQUEST,
        };
        tracing::warn!("Request rejected: {}", self);
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Catalog
// ============================================================

pub async fn list_restaurants(State(store): State<Store>) -> Json<Vec<Restaurant>> {
    Json(store.restaurants())
}

pub async fn get_restaurant(
    State(store): State<Store>,
    Path(id): Path<u32>,
) -> Result<Json<Restaurant>, ApiError> {
    store
        .restaurant(id)
        .map(Json)
        .ok_or(ApiError::RestaurantNotFound)
}

// ============================================================
// Orders
// ============================================================

/// Accept an order submission.
///
/// The body must be a JSON object with both `restaurant_id` and `items`
/// present; anything else is rejected before the store is touched. A missing
/// or unparseable body surfaces as a `JsonRejection` and maps to the same
/// invalid-format response.
pub async fn place_order(
    State(store): State<Store>,
    payload: Result<Json<Order>, JsonRejection>,
) -> Result<(StatusCode, Json<OrderReceipt>), ApiError> {
    let Json(order) = payload.map_err(|_| ApiError::InvalidOrder)?;
    let order = store.place_order(order);
    Ok((StatusCode::CREATED, Json(OrderReceipt::received(order))))
}
