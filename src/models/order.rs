use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::order::{NewOrder as DomainNewOrder, Order as DomainOrder};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::orders)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub total_cents: i64,
    pub status: String,
    pub order_date: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder<'a> {
    pub user_id: i32,
    pub total_cents: i64,
    pub status: &'a str,
    pub order_date: NaiveDateTime,
}

impl From<Order> for DomainOrder {
    fn from(value: Order) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            total_cents: value.total_cents,
            status: value.status.as_str().into(),
            order_date: value.order_date,
        }
    }
}

impl<'a> NewOrder<'a> {
    /// Build an insertable row, stamping `order_date` with the current time.
    pub fn from_domain(value: &'a DomainNewOrder) -> Self {
        Self {
            user_id: value.user_id,
            total_cents: value.total_cents,
            status: value.status.as_str(),
            order_date: chrono::Local::now().naive_utc(),
        }
    }
}
