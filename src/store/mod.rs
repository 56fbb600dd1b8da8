//! In-process storage for the catalog and the order log.
//!
//! The catalog is read-only after construction. Order appends go through a
//! mutex so concurrent submissions serialize into a consistent sequence.

use std::sync::{Arc, Mutex};

use crate::models::*;

/// Owned application state, cloned into each handler via axum `State`.
///
/// Clones share the same underlying storage.
#[derive(Clone)]
pub struct Store {
    catalog: Arc<Vec<Restaurant>>,
    orders: Arc<Mutex<Vec<Order>>>,
}

/// The fixed sample catalog loaded at startup.
fn sample_catalog() -> Vec<Restaurant> {
    vec![
        Restaurant {
            id: 1,
            name: "Pizza Palace".to_string(),
            menu: vec![
                "Margherita".to_string(),
                "Pepperoni".to_string(),
                "Veggie".to_string(),
            ],
        },
        Restaurant {
            id: 2,
            name: "Sushi Central".to_string(),
            menu: vec![
                "California Roll".to_string(),
                "Spicy Tuna".to_string(),
                "Salmon Nigiri".to_string(),
            ],
        },
    ]
}

impl Store {
    /// Create a store seeded with the sample catalog and no orders.
    pub fn new() -> Self {
        Self::with_catalog(sample_catalog())
    }

    /// Create a store over an arbitrary catalog. Used by tests.
    pub fn with_catalog(catalog: Vec<Restaurant>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            orders: Arc::new(Mutex::new(Vec::new())),
        }
    }

    // ============================================================
    // Catalog operations
    // ============================================================

    /// All restaurants, in storage order.
    pub fn restaurants(&self) -> Vec<Restaurant> {
        self.catalog.as_ref().clone()
    }

    /// Look up a restaurant by id. Linear scan; the catalog is tiny.
    pub fn restaurant(&self, id: u32) -> Option<Restaurant> {
        self.catalog.iter().find(|r| r.id == id).cloned()
    }

    // ============================================================
    // Order operations
    // ============================================================

    /// Append an order to the log and return it unchanged.
    pub fn place_order(&self, order: Order) -> Order {
        let mut orders = self.orders.lock().expect("order store lock poisoned");
        orders.push(order.clone());
        order
    }

    /// Number of orders placed so far.
    pub fn order_count(&self) -> usize {
        self.orders.lock().expect("order store lock poisoned").len()
    }

    /// The most recently placed order, if any.
    pub fn last_order(&self) -> Option<Order> {
        self.orders
            .lock()
            .expect("order store lock poisoned")
            .last()
            .cloned()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
