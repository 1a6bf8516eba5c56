use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Lifecycle states for a placed order. `Accepted` and `Rejected` are
/// terminal; the only legal transitions are out of `Pending`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order has been placed and awaits an admin decision.
    Pending,
    /// Order has been accepted for fulfilment.
    Accepted,
    /// Order has been rejected and will not be fulfilled.
    Rejected,
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl OrderStatus {
    /// Database representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    /// Whether a transition from `self` to `next` is legal.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, OrderStatus::Accepted) | (Self::Pending, OrderStatus::Rejected)
        )
    }
}

impl From<&str> for OrderStatus {
    fn from(value: &str) -> Self {
        match value {
            "accepted" => Self::Accepted,
            "rejected" => Self::Rejected,
            _ => Self::Pending,
        }
    }
}

/// Domain representation of a placed order. An order is a value snapshot:
/// it records only the computed total, never line items, so later catalog
/// changes cannot corrupt it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Order {
    /// Unique identifier of the order.
    pub id: i32,
    /// Identifier of the user who placed the order.
    pub user_id: i32,
    /// Total amount in the smallest currency unit, captured at checkout.
    pub total_cents: i64,
    /// Current lifecycle status.
    pub status: OrderStatus,
    /// Timestamp assigned by the store at creation; immutable afterwards.
    pub order_date: NaiveDateTime,
}

/// Payload required to insert a new order. The store stamps `order_date`
/// itself; callers cannot supply one.
#[derive(Debug, Clone)]
pub struct NewOrder {
    /// Identifier of the user placing the order.
    pub user_id: i32,
    /// Total amount in the smallest currency unit.
    pub total_cents: i64,
    /// Initial lifecycle status.
    pub status: OrderStatus,
}

impl NewOrder {
    /// Build a pending order payload for `user_id` with the given total.
    pub fn new(user_id: i32, total_cents: i64) -> Self {
        Self {
            user_id,
            total_cents,
            status: OrderStatus::default(),
        }
    }

    /// Override the initial status of the new order.
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }
}

/// Query definition used to list orders.
#[derive(Debug, Clone, Default)]
pub struct OrderListQuery {
    /// Optional status filter.
    pub status: Option<OrderStatus>,
    /// Optional filter by the user who placed the order.
    pub user_id: Option<i32>,
}

impl OrderListQuery {
    /// Construct a query that targets all orders.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by the provided status.
    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Filter the results by the user who placed the order.
    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = Some(user_id);
        self
    }
}
