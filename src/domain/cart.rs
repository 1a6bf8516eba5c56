use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// One row of a user's in-progress cart: a product reference and the
/// accumulated quantity. At most one line exists per (user, product) pair;
/// repeated adds merge into the existing line.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CartLine {
    /// Unique identifier of the cart line.
    pub id: i32,
    /// Owning user identifier.
    pub user_id: i32,
    /// Referenced product identifier.
    pub product_id: i32,
    /// Accumulated quantity, always >= 1.
    pub quantity: i32,
    /// Timestamp for when the line was first created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last quantity change.
    pub updated_at: NaiveDateTime,
}

/// Payload used to upsert a cart line for a (user, product) pair.
#[derive(Debug, Clone)]
pub struct NewCartLine {
    /// Owning user identifier.
    pub user_id: i32,
    /// Referenced product identifier.
    pub product_id: i32,
    /// Quantity to add; merged into an existing line when one exists.
    pub quantity: i32,
    /// Timestamp captured when the payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewCartLine {
    /// Build an add-to-cart payload with the current timestamp.
    pub fn new(user_id: i32, product_id: i32, quantity: i32) -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            user_id,
            product_id,
            quantity,
            updated_at: now,
        }
    }
}

/// A cart line joined with the live product row it references. Pricing is
/// always current catalog pricing, never a snapshot taken at add time.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CartEntry {
    /// The stored cart line.
    pub line: CartLine,
    /// The product as it exists in the catalog right now.
    pub product: Product,
}

impl CartEntry {
    /// Price of this line: live product price times accumulated quantity.
    pub fn subtotal_cents(&self) -> i64 {
        self.product.price_cents * i64::from(self.line.quantity)
    }
}

/// A user's materialized cart: joined entries plus the grand total.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CartView {
    /// Joined cart entries, oldest line first.
    pub entries: Vec<CartEntry>,
    /// Sum of all entry subtotals.
    pub total_cents: i64,
}

impl CartView {
    /// Materialize a view from joined entries, computing the grand total.
    pub fn new(entries: Vec<CartEntry>) -> Self {
        let total_cents = entries.iter().map(CartEntry::subtotal_cents).sum();
        Self {
            entries,
            total_cents,
        }
    }

    /// Whether the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
