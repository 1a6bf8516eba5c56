use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::{
    domain::order::{NewOrder as DomainNewOrder, Order as DomainOrder, OrderListQuery, OrderStatus},
    models::order::{NewOrder as DbNewOrder, Order as DbOrder},
    repository::{DieselRepository, OrderReader, OrderWriter, RepositoryError, RepositoryResult},
};

impl OrderReader for DieselRepository {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<DomainOrder>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let order = orders::table
            .filter(orders::id.eq(id))
            .first::<DbOrder>(&mut conn)
            .optional()?;

        Ok(order.map(Into::into))
    }

    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<Vec<DomainOrder>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;

        let mut items = orders::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(status) = query.status {
            items = items.filter(orders::status.eq(status.as_str()));
        }

        if let Some(user_id) = query.user_id {
            items = items.filter(orders::user_id.eq(user_id));
        }

        items = items.order(orders::order_date.desc());

        let db_orders = items.load::<DbOrder>(&mut conn)?;
        Ok(db_orders.into_iter().map(Into::into).collect())
    }

    fn list_pending_orders(&self) -> RepositoryResult<Vec<DomainOrder>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;

        // Oldest first so pending orders get triaged in arrival order.
        let db_orders = orders::table
            .filter(orders::status.eq(OrderStatus::Pending.as_str()))
            .order(orders::order_date.asc())
            .load::<DbOrder>(&mut conn)?;

        Ok(db_orders.into_iter().map(Into::into).collect())
    }

    fn total_revenue(&self) -> RepositoryResult<i64> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let totals = orders::table
            .select(orders::total_cents)
            .load::<i64>(&mut conn)?;

        Ok(totals.into_iter().sum())
    }

    fn revenue_between(&self, from: NaiveDateTime, to: NaiveDateTime) -> RepositoryResult<i64> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let totals = orders::table
            .filter(orders::order_date.ge(from))
            .filter(orders::order_date.lt(to))
            .select(orders::total_cents)
            .load::<i64>(&mut conn)?;

        Ok(totals.into_iter().sum())
    }
}

impl OrderWriter for DieselRepository {
    fn create_order(&self, new_order: &DomainNewOrder) -> RepositoryResult<DomainOrder> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let db_new = DbNewOrder::from_domain(new_order);

        let created = diesel::insert_into(orders::table)
            .values(&db_new)
            .get_result::<DbOrder>(&mut conn)?;

        Ok(created.into())
    }

    fn set_order_status(
        &self,
        order_id: i32,
        new_status: OrderStatus,
    ) -> RepositoryResult<DomainOrder> {
        use crate::schema::orders;

        let mut conn = self.conn()?;

        conn.transaction::<DomainOrder, RepositoryError, _>(|conn| {
            let current = orders::table
                .filter(orders::id.eq(order_id))
                .first::<DbOrder>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            let status = OrderStatus::from(current.status.as_str());
            if !status.can_transition_to(new_status) {
                return Err(RepositoryError::InvalidTransition);
            }

            let target = orders::table.filter(orders::id.eq(order_id));
            let updated = diesel::update(target)
                .set(orders::status.eq(new_status.as_str()))
                .get_result::<DbOrder>(conn)?;

            Ok(updated.into())
        })
    }
}
