use diesel::prelude::*;

use crate::{
    domain::order::Order as DomainOrder,
    models::{cart::CartLine as DbCartLine, order::Order as DbOrder, product::Product as DbProduct},
    repository::{Checkout, DieselRepository, RepositoryError, RepositoryResult},
};

impl Checkout for DieselRepository {
    fn place_order(&self, user_id: i32) -> RepositoryResult<Option<DomainOrder>> {
        use crate::schema::{cart_lines, orders};

        let mut conn = self.conn()?;

        // Order creation and cart clearing commit together or not at all. A
        // crash between the two steps can no longer leave a placed order
        // with a still-populated cart.
        conn.transaction::<Option<DomainOrder>, RepositoryError, _>(|conn| {
            let rows = cart_lines::table
                .inner_join(crate::schema::products::table)
                .filter(cart_lines::user_id.eq(user_id))
                .select((DbCartLine::as_select(), DbProduct::as_select()))
                .load::<(DbCartLine, DbProduct)>(conn)?;

            if rows.is_empty() {
                return Ok(None);
            }

            let total_cents: i64 = rows
                .iter()
                .map(|(line, product)| product.price_cents * i64::from(line.quantity))
                .sum();

            let now = chrono::Local::now().naive_utc();
            let created = diesel::insert_into(orders::table)
                .values((
                    orders::user_id.eq(user_id),
                    orders::total_cents.eq(total_cents),
                    orders::status.eq(crate::domain::order::OrderStatus::Pending.as_str()),
                    orders::order_date.eq(now),
                ))
                .get_result::<DbOrder>(conn)?;

            diesel::delete(cart_lines::table.filter(cart_lines::user_id.eq(user_id)))
                .execute(conn)?;

            Ok(Some(created.into()))
        })
    }
}
