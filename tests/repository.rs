use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use storefront_core::db::DbPool;
use storefront_core::domain::order::{OrderListQuery, OrderStatus};
use storefront_core::domain::product::{NewProduct, ProductListQuery, UpdateProduct};
use storefront_core::repository::{
    CartReader, DieselRepository, OrderReader, ProductReader, ProductWriter, RepositoryError,
};
use storefront_core::services::{CallerContext, ServiceError, cart, catalog, orders};

mod common;

fn datetime(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, min, sec))
        .expect("valid test timestamp")
}

/// Insert an order row directly so tests control `order_date`, which the
/// public API deliberately stamps itself.
fn seed_order(pool: &DbPool, user_id: i32, total_cents: i64, status: &str, date: NaiveDateTime) {
    use storefront_core::schema::orders;

    let mut conn = pool.get().unwrap();
    diesel::insert_into(orders::table)
        .values((
            orders::user_id.eq(user_id),
            orders::total_cents.eq(total_cents),
            orders::status.eq(status),
            orders::order_date.eq(date),
        ))
        .execute(&mut conn)
        .unwrap();
}

#[test]
fn test_product_crud_and_search() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let espresso = catalog::create_product(
        &repo,
        NewProduct::new("Espresso", 299).with_description("Strong, rich coffee shot"),
    )
    .unwrap();
    let latte = catalog::create_product(&repo, NewProduct::new("Latte", 499)).unwrap();

    assert_eq!(catalog::list_products(&repo).unwrap().len(), 2);

    // Substring match on the name, case-insensitive.
    let hits = catalog::search_products(&repo, "SPRES").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, espresso.id);
    assert!(catalog::search_products(&repo, "mocha").unwrap().is_empty());

    let updated =
        catalog::update_product(&repo, latte.id, UpdateProduct::new().price_cents(549)).unwrap();
    assert_eq!(updated.price_cents, 549);
    assert_eq!(updated.name, "Latte");

    catalog::delete_product(&repo, espresso.id).unwrap();
    assert!(matches!(
        catalog::get_product(&repo, espresso.id),
        Err(ServiceError::NotFound)
    ));
    assert!(matches!(
        catalog::delete_product(&repo, espresso.id),
        Err(ServiceError::NotFound)
    ));
}

#[test]
fn test_invalid_product_leaves_storage_unchanged() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    assert!(matches!(
        catalog::create_product(&repo, NewProduct::new("", 299)),
        Err(ServiceError::Validation(_))
    ));
    assert!(matches!(
        catalog::create_product(&repo, NewProduct::new("Espresso", 0)),
        Err(ServiceError::Validation(_))
    ));
    assert!(catalog::list_products(&repo).unwrap().is_empty());

    let product = catalog::create_product(&repo, NewProduct::new("Espresso", 299)).unwrap();
    assert!(matches!(
        catalog::update_product(&repo, product.id, UpdateProduct::new().price_cents(-1)),
        Err(ServiceError::Validation(_))
    ));
    assert_eq!(catalog::get_product(&repo, product.id).unwrap().price_cents, 299);
}

#[test]
fn test_add_to_cart_merges_on_repeat() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let ctx = CallerContext::customer(1);

    let product = catalog::create_product(&repo, NewProduct::new("Espresso", 299)).unwrap();

    cart::add_to_cart(&repo, &ctx, product.id, 1).unwrap();
    let merged = cart::add_to_cart(&repo, &ctx, product.id, 2).unwrap();
    assert_eq!(merged.quantity, 3);

    // One line, never two.
    let view = cart::get_cart(&repo, &ctx).unwrap();
    assert_eq!(view.entries.len(), 1);
    assert_eq!(view.entries[0].line.quantity, 3);
    assert_eq!(view.total_cents, 299 * 3);

    // Another user's cart is its own.
    let other = CallerContext::customer(2);
    cart::add_to_cart(&repo, &other, product.id, 5).unwrap();
    assert_eq!(cart::get_cart(&repo, &ctx).unwrap().entries[0].line.quantity, 3);
}

#[test]
fn test_add_to_cart_requires_known_product() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let ctx = CallerContext::customer(1);

    assert!(matches!(
        cart::add_to_cart(&repo, &ctx, 12345, 1),
        Err(ServiceError::NotFound)
    ));
    assert!(cart::get_cart(&repo, &ctx).unwrap().is_empty());
}

#[test]
fn test_cart_line_mutation_and_removal() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let ctx = CallerContext::customer(1);

    let espresso = catalog::create_product(&repo, NewProduct::new("Espresso", 299)).unwrap();
    let latte = catalog::create_product(&repo, NewProduct::new("Latte", 499)).unwrap();

    let line = cart::add_to_cart(&repo, &ctx, espresso.id, 1).unwrap();
    cart::add_to_cart(&repo, &ctx, latte.id, 1).unwrap();

    let line = cart::update_quantity(&repo, line.id, 4).unwrap();
    assert_eq!(line.quantity, 4);

    assert!(matches!(
        cart::update_quantity(&repo, 9999, 2),
        Err(ServiceError::NotFound)
    ));

    // Removing a nonexistent line is NotFound and touches nothing else.
    assert!(matches!(
        cart::remove_line(&repo, 9999),
        Err(ServiceError::NotFound)
    ));
    assert_eq!(cart::get_cart(&repo, &ctx).unwrap().entries.len(), 2);

    cart::remove_line(&repo, line.id).unwrap();
    let view = cart::get_cart(&repo, &ctx).unwrap();
    assert_eq!(view.entries.len(), 1);
    assert_eq!(view.entries[0].product.id, latte.id);
}

#[test]
fn test_clear_cart_counts_removed_lines() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let ctx = CallerContext::customer(1);

    // Clearing an empty cart removes nothing and is not an error.
    assert_eq!(cart::clear_cart(&repo, &ctx).unwrap(), 0);

    let espresso = catalog::create_product(&repo, NewProduct::new("Espresso", 299)).unwrap();
    let latte = catalog::create_product(&repo, NewProduct::new("Latte", 499)).unwrap();
    cart::add_to_cart(&repo, &ctx, espresso.id, 1).unwrap();
    cart::add_to_cart(&repo, &ctx, latte.id, 2).unwrap();

    assert_eq!(cart::clear_cart(&repo, &ctx).unwrap(), 2);
    assert!(cart::get_cart(&repo, &ctx).unwrap().is_empty());
}

#[test]
fn test_cart_view_reflects_live_catalog() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let ctx = CallerContext::customer(1);

    let product = catalog::create_product(&repo, NewProduct::new("Espresso", 299)).unwrap();
    cart::add_to_cart(&repo, &ctx, product.id, 2).unwrap();

    // Cart pricing is live, never frozen at add time.
    catalog::update_product(&repo, product.id, UpdateProduct::new().price_cents(349)).unwrap();
    let view = cart::get_cart(&repo, &ctx).unwrap();
    assert_eq!(view.total_cents, 698);

    // A deleted product drops out of the view while its row lingers.
    catalog::delete_product(&repo, product.id).unwrap();
    assert!(cart::get_cart(&repo, &ctx).unwrap().is_empty());
    assert_eq!(repo.count_cart_lines(ctx.user_id).unwrap(), 1);
}

#[test]
fn test_order_status_transitions() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let order = orders::create_order(&repo, 1, 1100).unwrap();
    assert_eq!(order.status, OrderStatus::Pending);

    let accepted = orders::set_status(&repo, order.id, OrderStatus::Accepted).unwrap();
    assert_eq!(accepted.status, OrderStatus::Accepted);

    // Terminal: a second transition fails and the status stays put.
    assert!(matches!(
        orders::set_status(&repo, order.id, OrderStatus::Rejected),
        Err(ServiceError::InvalidTransition)
    ));
    let current = repo.get_order_by_id(order.id).unwrap().unwrap();
    assert_eq!(current.status, OrderStatus::Accepted);

    assert!(matches!(
        orders::set_status(&repo, 9999, OrderStatus::Accepted),
        Err(ServiceError::NotFound)
    ));
}

#[test]
fn test_pending_orders_listed_oldest_first() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    seed_order(&test_db.pool(), 1, 500, "pending", datetime(2024, 3, 2, 9, 0, 0));
    seed_order(&test_db.pool(), 2, 700, "pending", datetime(2024, 3, 1, 9, 0, 0));
    seed_order(&test_db.pool(), 3, 900, "accepted", datetime(2024, 2, 1, 9, 0, 0));

    let pending = orders::list_pending(&repo).unwrap();
    assert_eq!(pending.len(), 2);
    assert!(pending[0].order_date < pending[1].order_date);
    assert_eq!(pending[0].user_id, 2);

    let all = orders::list_orders(&repo, OrderListQuery::new()).unwrap();
    assert_eq!(all.len(), 3);
    // Newest first for the admin overview.
    assert_eq!(all[0].user_id, 1);

    let accepted = orders::list_orders(
        &repo,
        OrderListQuery::new().status(OrderStatus::Accepted),
    )
    .unwrap();
    assert_eq!(accepted.len(), 1);
    assert_eq!(accepted[0].user_id, 3);
}

#[test]
fn test_revenue_window_boundaries() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let pool = test_db.pool();

    seed_order(&pool, 1, 1000, "pending", datetime(2024, 2, 29, 23, 59, 59));
    seed_order(&pool, 1, 2000, "pending", datetime(2024, 3, 1, 0, 0, 0));
    seed_order(&pool, 1, 3000, "pending", datetime(2024, 3, 31, 23, 59, 59));
    seed_order(&pool, 1, 4000, "pending", datetime(2024, 4, 1, 0, 0, 0));

    assert_eq!(orders::revenue_by_month(&repo, 2024, 3).unwrap(), 5000);
    assert_eq!(orders::revenue_by_month(&repo, 2024, 2).unwrap(), 1000);
    assert_eq!(orders::revenue_by_month(&repo, 2024, 4).unwrap(), 4000);

    assert_eq!(
        orders::revenue_by_date(&repo, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()).unwrap(),
        2000
    );
    assert_eq!(
        orders::revenue_by_date(&repo, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()).unwrap(),
        0
    );

    assert_eq!(orders::revenue_by_year(&repo, 2024).unwrap(), 10000);
    assert_eq!(orders::revenue_by_year(&repo, 2023).unwrap(), 0);
}

#[test]
fn test_total_revenue_matches_yearly_sum() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let pool = test_db.pool();

    seed_order(&pool, 1, 1500, "accepted", datetime(2023, 7, 4, 12, 0, 0));
    seed_order(&pool, 2, 2500, "pending", datetime(2024, 1, 15, 8, 30, 0));
    seed_order(&pool, 3, 3500, "rejected", datetime(2024, 11, 20, 19, 45, 0));

    let yearly_sum = orders::revenue_by_year(&repo, 2023).unwrap()
        + orders::revenue_by_year(&repo, 2024).unwrap();
    assert_eq!(orders::total_revenue(&repo).unwrap(), yearly_sum);
}

#[test]
fn revenue_includes_rejected_orders() {
    // Documents the inherited behavior: aggregates count every order row,
    // rejected ones included.
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let pool = test_db.pool();

    seed_order(&pool, 1, 1000, "accepted", datetime(2024, 5, 1, 10, 0, 0));
    seed_order(&pool, 1, 2000, "rejected", datetime(2024, 5, 2, 10, 0, 0));

    assert_eq!(orders::total_revenue(&repo).unwrap(), 3000);
    assert_eq!(orders::revenue_by_month(&repo, 2024, 5).unwrap(), 3000);
}

#[test]
fn test_repository_not_found_is_distinct_from_storage_faults() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    assert!(repo.list_products(ProductListQuery::new()).unwrap().is_empty());

    let err = repo.delete_product(424242).expect_err("expected NotFound");
    assert!(matches!(err, RepositoryError::NotFound));
}
