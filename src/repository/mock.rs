use chrono::NaiveDateTime;
use mockall::mock;

use super::{
    CartReader, CartWriter, Checkout, OrderReader, OrderWriter, ProductReader, ProductWriter,
    RepositoryResult,
};
use crate::domain::{
    cart::{CartEntry, CartLine, NewCartLine},
    order::{NewOrder, Order, OrderListQuery, OrderStatus},
    product::{NewProduct, Product, ProductListQuery, UpdateProduct},
};

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<Product>;
        fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub CartRepository {}

    impl CartReader for CartRepository {
        fn get_cart_line(&self, line_id: i32) -> RepositoryResult<Option<CartLine>>;
        fn list_cart(&self, user_id: i32) -> RepositoryResult<Vec<CartEntry>>;
        fn count_cart_lines(&self, user_id: i32) -> RepositoryResult<usize>;
    }

    impl CartWriter for CartRepository {
        fn upsert_cart_line(&self, new_line: &NewCartLine) -> RepositoryResult<CartLine>;
        fn set_cart_line_quantity(&self, line_id: i32, quantity: i32) -> RepositoryResult<CartLine>;
        fn remove_cart_line(&self, line_id: i32) -> RepositoryResult<()>;
        fn clear_cart(&self, user_id: i32) -> RepositoryResult<usize>;
    }

    impl ProductReader for CartRepository {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
    }
}

mock! {
    pub OrderReader {}

    impl OrderReader for OrderReader {
        fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
        fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<Vec<Order>>;
        fn list_pending_orders(&self) -> RepositoryResult<Vec<Order>>;
        fn total_revenue(&self) -> RepositoryResult<i64>;
        fn revenue_between(&self, from: NaiveDateTime, to: NaiveDateTime) -> RepositoryResult<i64>;
    }
}

mock! {
    pub OrderWriter {}

    impl OrderWriter for OrderWriter {
        fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
        fn set_order_status(&self, order_id: i32, new_status: OrderStatus) -> RepositoryResult<Order>;
    }
}

mock! {
    pub CheckoutRepository {}

    impl Checkout for CheckoutRepository {
        fn place_order(&self, user_id: i32) -> RepositoryResult<Option<Order>>;
    }

    impl CartReader for CheckoutRepository {
        fn get_cart_line(&self, line_id: i32) -> RepositoryResult<Option<CartLine>>;
        fn list_cart(&self, user_id: i32) -> RepositoryResult<Vec<CartEntry>>;
        fn count_cart_lines(&self, user_id: i32) -> RepositoryResult<usize>;
    }
}
