use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A submitted order, stored exactly as the client sent it.
///
/// Deserialization enforces the acceptance criterion for order submissions:
/// the body must be a JSON object containing both `restaurant_id` and
/// `items`. The values themselves are accepted as-is — no type checks and no
/// referential checks against the catalog. Any additional keys the client
/// sends are preserved through `extra`, so serializing an [`Order`] yields
/// the submitted object unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub restaurant_id: Value,
    pub items: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Acknowledgement returned when an order is accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub status: String,
    pub order: Order,
}

impl OrderReceipt {
    pub fn received(order: Order) -> Self {
        Self {
            status: "Order received".to_string(),
            order,
        }
    }
}
