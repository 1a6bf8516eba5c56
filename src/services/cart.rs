//! Cart mutation and the materialized cart view.

use crate::domain::cart::{CartLine, CartView, NewCartLine};
use crate::repository::{CartReader, CartWriter, ProductReader};
use crate::services::{CallerContext, ServiceError, ServiceResult};

/// Adds `quantity` of a product to the caller's cart. A second add for the
/// same product merges into the existing line instead of duplicating it.
pub fn add_to_cart<R>(
    repo: &R,
    ctx: &CallerContext,
    product_id: i32,
    quantity: i32,
) -> ServiceResult<CartLine>
where
    R: CartWriter + ProductReader + ?Sized,
{
    validate_quantity(quantity)?;

    // Creation-time existence check; the referenced product must resolve.
    if repo.get_product_by_id(product_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    repo.upsert_cart_line(&NewCartLine::new(ctx.user_id, product_id, quantity))
        .map_err(ServiceError::from)
}

/// Materializes the caller's cart with live product data and totals.
pub fn get_cart<R>(repo: &R, ctx: &CallerContext) -> ServiceResult<CartView>
where
    R: CartReader + ?Sized,
{
    let entries = repo.list_cart(ctx.user_id)?;
    Ok(CartView::new(entries))
}

/// Sets the quantity on an existing cart line. Removal goes through
/// [`remove_line`]; a zero quantity is rejected rather than treated as one.
pub fn update_quantity<R>(repo: &R, line_id: i32, quantity: i32) -> ServiceResult<CartLine>
where
    R: CartWriter + ?Sized,
{
    validate_quantity(quantity)?;

    repo.set_cart_line_quantity(line_id, quantity)
        .map_err(ServiceError::from)
}

/// Removes a single cart line.
pub fn remove_line<R>(repo: &R, line_id: i32) -> ServiceResult<()>
where
    R: CartWriter + ?Sized,
{
    repo.remove_cart_line(line_id).map_err(ServiceError::from)
}

/// Empties the caller's cart, returning how many lines were removed.
/// Clearing an already-empty cart removes zero lines and succeeds.
pub fn clear_cart<R>(repo: &R, ctx: &CallerContext) -> ServiceResult<usize>
where
    R: CartWriter + ?Sized,
{
    repo.clear_cart(ctx.user_id).map_err(ServiceError::from)
}

fn validate_quantity(quantity: i32) -> ServiceResult<()> {
    if quantity < 1 {
        return Err(ServiceError::Validation(
            "quantity must be at least 1".into(),
        ));
    }
    Ok(())
}
