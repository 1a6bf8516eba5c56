use chrono::NaiveDateTime;

use crate::db::{DbConnection, DbPool};
use crate::domain::cart::{CartEntry, CartLine, NewCartLine};
use crate::domain::order::{NewOrder, Order, OrderListQuery, OrderStatus};
use crate::domain::product::{NewProduct, Product, ProductListQuery, UpdateProduct};

pub mod cart;
pub mod checkout;
pub mod errors;
pub mod order;
pub mod product;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over catalog products.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
}

/// Write operations over catalog products.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(&self, product_id: i32, updates: &UpdateProduct)
    -> RepositoryResult<Product>;
    fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over cart lines.
pub trait CartReader {
    fn get_cart_line(&self, line_id: i32) -> RepositoryResult<Option<CartLine>>;
    /// Materialize a user's cart: each line joined with its live product row.
    /// Lines whose product has since been deleted are not returned.
    fn list_cart(&self, user_id: i32) -> RepositoryResult<Vec<CartEntry>>;
    fn count_cart_lines(&self, user_id: i32) -> RepositoryResult<usize>;
}

/// Write operations over cart lines.
pub trait CartWriter {
    /// Insert a cart line, or add its quantity onto the existing line for the
    /// same (user, product) pair. The merge is a single atomic upsert so
    /// concurrent adds cannot lose updates.
    fn upsert_cart_line(&self, new_line: &NewCartLine) -> RepositoryResult<CartLine>;
    fn set_cart_line_quantity(&self, line_id: i32, quantity: i32) -> RepositoryResult<CartLine>;
    fn remove_cart_line(&self, line_id: i32) -> RepositoryResult<()>;
    /// Delete every line in the user's cart, returning how many rows went
    /// away. Zero is a valid outcome, not an error.
    fn clear_cart(&self, user_id: i32) -> RepositoryResult<usize>;
}

/// Read-only operations over orders, including revenue aggregates.
pub trait OrderReader {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<Vec<Order>>;
    /// Pending orders ordered by `order_date` ascending, oldest first.
    fn list_pending_orders(&self) -> RepositoryResult<Vec<Order>>;
    /// Sum of `total_cents` over every order row regardless of status.
    fn total_revenue(&self) -> RepositoryResult<i64>;
    /// Sum of `total_cents` over orders whose `order_date` falls in the
    /// half-open window `[from, to)`.
    fn revenue_between(&self, from: NaiveDateTime, to: NaiveDateTime) -> RepositoryResult<i64>;
}

/// Write operations over orders.
pub trait OrderWriter {
    /// Insert a new order, stamping `order_date` with the current time.
    fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
    /// Transition an order out of `Pending`. The read-check-write runs in one
    /// transaction; anything but `Pending -> Accepted | Rejected` fails with
    /// [`RepositoryError::InvalidTransition`].
    fn set_order_status(&self, order_id: i32, new_status: OrderStatus) -> RepositoryResult<Order>;
}

/// The checkout transition: cart becomes order, atomically.
pub trait Checkout {
    /// Create an order from the user's cart and clear the cart, both inside a
    /// single storage transaction. Returns `None` when the cart has no lines,
    /// in which case nothing is written.
    fn place_order(&self, user_id: i32) -> RepositoryResult<Option<Order>>;
}
