use serde::{Deserialize, Serialize};

/// A restaurant in the catalog.
///
/// Restaurants are immutable after startup. The menu is an ordered list of
/// item names; uniqueness within a menu is not enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: u32,
    pub name: String,
    pub menu: Vec<String>,
}
