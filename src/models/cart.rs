use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::cart::{CartLine as DomainCartLine, NewCartLine as DomainNewCartLine};
use crate::models::product::Product;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::cart_lines)]
#[diesel(belongs_to(Product, foreign_key = product_id))]
pub struct CartLine {
    pub id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::cart_lines)]
pub struct NewCartLine {
    pub user_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub updated_at: NaiveDateTime,
}

impl From<CartLine> for DomainCartLine {
    fn from(value: CartLine) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            product_id: value.product_id,
            quantity: value.quantity,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<&DomainNewCartLine> for NewCartLine {
    fn from(value: &DomainNewCartLine) -> Self {
        Self {
            user_id: value.user_id,
            product_id: value.product_id,
            quantity: value.quantity,
            updated_at: value.updated_at,
        }
    }
}
