use diesel::prelude::*;
use diesel::upsert::excluded;

use crate::{
    domain::cart::{CartEntry, CartLine as DomainCartLine, NewCartLine as DomainNewCartLine},
    models::cart::{CartLine as DbCartLine, NewCartLine as DbNewCartLine},
    models::product::Product as DbProduct,
    repository::{CartReader, CartWriter, DieselRepository, RepositoryError, RepositoryResult},
};

impl CartReader for DieselRepository {
    fn get_cart_line(&self, line_id: i32) -> RepositoryResult<Option<DomainCartLine>> {
        use crate::schema::cart_lines;

        let mut conn = self.conn()?;
        let line = cart_lines::table
            .filter(cart_lines::id.eq(line_id))
            .first::<DbCartLine>(&mut conn)
            .optional()?;

        Ok(line.map(Into::into))
    }

    fn list_cart(&self, user_id: i32) -> RepositoryResult<Vec<CartEntry>> {
        use crate::schema::{cart_lines, products};

        let mut conn = self.conn()?;

        // Inner join: a line whose product was deleted from the catalog
        // drops out of the materialized view.
        let rows = cart_lines::table
            .inner_join(products::table)
            .filter(cart_lines::user_id.eq(user_id))
            .order(cart_lines::id.asc())
            .select((DbCartLine::as_select(), DbProduct::as_select()))
            .load::<(DbCartLine, DbProduct)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(line, product)| CartEntry {
                line: line.into(),
                product: product.into(),
            })
            .collect())
    }

    fn count_cart_lines(&self, user_id: i32) -> RepositoryResult<usize> {
        use crate::schema::cart_lines;

        let mut conn = self.conn()?;
        let count = cart_lines::table
            .filter(cart_lines::user_id.eq(user_id))
            .count()
            .get_result::<i64>(&mut conn)?;

        Ok(count as usize)
    }
}

impl CartWriter for DieselRepository {
    fn upsert_cart_line(&self, new_line: &DomainNewCartLine) -> RepositoryResult<DomainCartLine> {
        use crate::schema::cart_lines;

        let mut conn = self.conn()?;
        let db_new = DbNewCartLine::from(new_line);

        // One atomic statement: concurrent adds for the same (user, product)
        // serialize on the unique index instead of racing a read-then-write.
        let line = diesel::insert_into(cart_lines::table)
            .values(&db_new)
            .on_conflict((cart_lines::user_id, cart_lines::product_id))
            .do_update()
            .set((
                cart_lines::quantity.eq(cart_lines::quantity + excluded(cart_lines::quantity)),
                cart_lines::updated_at.eq(db_new.updated_at),
            ))
            .get_result::<DbCartLine>(&mut conn)?;

        Ok(line.into())
    }

    fn set_cart_line_quantity(
        &self,
        line_id: i32,
        quantity: i32,
    ) -> RepositoryResult<DomainCartLine> {
        use crate::schema::cart_lines;

        let mut conn = self.conn()?;
        let now = chrono::Local::now().naive_utc();

        let target = cart_lines::table.filter(cart_lines::id.eq(line_id));

        let updated = diesel::update(target)
            .set((
                cart_lines::quantity.eq(quantity),
                cart_lines::updated_at.eq(now),
            ))
            .get_result::<DbCartLine>(&mut conn)
            .optional()?
            .ok_or(RepositoryError::NotFound)?;

        Ok(updated.into())
    }

    fn remove_cart_line(&self, line_id: i32) -> RepositoryResult<()> {
        use crate::schema::cart_lines;

        let mut conn = self.conn()?;

        let target = cart_lines::table.filter(cart_lines::id.eq(line_id));

        let deleted = diesel::delete(target).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    fn clear_cart(&self, user_id: i32) -> RepositoryResult<usize> {
        use crate::schema::cart_lines;

        let mut conn = self.conn()?;

        let target = cart_lines::table.filter(cart_lines::user_id.eq(user_id));

        let deleted = diesel::delete(target).execute(&mut conn)?;
        Ok(deleted)
    }
}
