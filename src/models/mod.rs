//! Domain models for orderup.
//!
//! # Core Concepts
//!
//! - [`Restaurant`]: A catalog entry with a fixed menu. Seeded once at
//!   startup and never mutated afterwards.
//! - [`Order`]: A submitted order as the client sent it. Only the presence
//!   of `restaurant_id` and `items` is enforced; values pass through as-is.
//! - [`OrderReceipt`]: The acknowledgement body returned when an order is
//!   accepted.

mod order;
mod restaurant;

pub use order::*;
pub use restaurant::*;
