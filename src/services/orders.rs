//! Order administration: creation, status transitions, and revenue windows.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::domain::order::{NewOrder, Order, OrderListQuery, OrderStatus};
use crate::repository::{OrderReader, OrderWriter};
use crate::services::{ServiceError, ServiceResult};

/// Records a new pending order for `user_id`. The store stamps the order
/// date; callers only supply the total.
pub fn create_order<R>(repo: &R, user_id: i32, total_cents: i64) -> ServiceResult<Order>
where
    R: OrderWriter + ?Sized,
{
    if total_cents <= 0 {
        return Err(ServiceError::Validation(
            "order total must be positive".into(),
        ));
    }

    repo.create_order(&NewOrder::new(user_id, total_cents))
        .map_err(ServiceError::from)
}

/// Transitions an order out of `Pending`. Accepted and rejected orders are
/// terminal; touching them yields [`ServiceError::InvalidTransition`].
pub fn set_status<R>(repo: &R, order_id: i32, new_status: OrderStatus) -> ServiceResult<Order>
where
    R: OrderWriter + ?Sized,
{
    repo.set_order_status(order_id, new_status)
        .map_err(ServiceError::from)
}

/// Pending orders in arrival order, oldest first.
pub fn list_pending<R>(repo: &R) -> ServiceResult<Vec<Order>>
where
    R: OrderReader + ?Sized,
{
    repo.list_pending_orders().map_err(ServiceError::from)
}

/// All orders, newest first, optionally filtered by user or status.
pub fn list_orders<R>(repo: &R, query: OrderListQuery) -> ServiceResult<Vec<Order>>
where
    R: OrderReader + ?Sized,
{
    repo.list_orders(query).map_err(ServiceError::from)
}

/// Revenue across every order ever placed, regardless of status.
pub fn total_revenue<R>(repo: &R) -> ServiceResult<i64>
where
    R: OrderReader + ?Sized,
{
    repo.total_revenue().map_err(ServiceError::from)
}

/// Revenue for a single calendar day.
pub fn revenue_by_date<R>(repo: &R, date: NaiveDate) -> ServiceResult<i64>
where
    R: OrderReader + ?Sized,
{
    let from = day_start(date);
    let to = date
        .succ_opt()
        .map(day_start)
        .ok_or_else(|| ServiceError::Validation("date out of range".into()))?;

    repo.revenue_between(from, to).map_err(ServiceError::from)
}

/// Revenue for one calendar month.
pub fn revenue_by_month<R>(repo: &R, year: i32, month: u32) -> ServiceResult<i64>
where
    R: OrderReader + ?Sized,
{
    let from = month_start(year, month)?;
    let to = if month == 12 {
        month_start(year + 1, 1)?
    } else {
        month_start(year, month + 1)?
    };

    repo.revenue_between(from, to).map_err(ServiceError::from)
}

/// Revenue for one calendar year.
pub fn revenue_by_year<R>(repo: &R, year: i32) -> ServiceResult<i64>
where
    R: OrderReader + ?Sized,
{
    let from = month_start(year, 1)?;
    let to = month_start(year + 1, 1)?;

    repo.revenue_between(from, to).map_err(ServiceError::from)
}

fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn month_start(year: i32, month: u32) -> ServiceResult<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(day_start)
        .ok_or_else(|| ServiceError::Validation(format!("invalid revenue window {year}-{month}")))
}
