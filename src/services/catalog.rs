//! Catalog management: product CRUD and name search.

use crate::domain::product::{NewProduct, Product, ProductListQuery, UpdateProduct};
use crate::repository::{ProductReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult};

/// Lists the whole catalog; an empty store yields an empty list.
pub fn list_products<R>(repo: &R) -> ServiceResult<Vec<Product>>
where
    R: ProductReader + ?Sized,
{
    repo.list_products(ProductListQuery::new())
        .map_err(ServiceError::from)
}

/// Case-insensitive substring search over product names. No matches is an
/// empty list, not an error.
pub fn search_products<R>(repo: &R, term: impl Into<String>) -> ServiceResult<Vec<Product>>
where
    R: ProductReader + ?Sized,
{
    repo.list_products(ProductListQuery::new().search(term))
        .map_err(ServiceError::from)
}

/// Fetches a single product by id.
pub fn get_product<R>(repo: &R, product_id: i32) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    repo.get_product_by_id(product_id)?
        .ok_or(ServiceError::NotFound)
}

/// Creates a new catalog product after validating its fields.
pub fn create_product<R>(repo: &R, new_product: NewProduct) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    validate_name(Some(new_product.name.as_str()))?;
    validate_price(Some(new_product.price_cents))?;

    repo.create_product(&new_product).map_err(ServiceError::from)
}

/// Applies a patch to an existing product after validating the changed
/// fields. Untouched fields are not re-validated.
pub fn update_product<R>(
    repo: &R,
    product_id: i32,
    updates: UpdateProduct,
) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    validate_name(updates.name.as_deref())?;
    validate_price(updates.price_cents)?;

    repo.update_product(product_id, &updates)
        .map_err(ServiceError::from)
}

/// Deletes a product from the catalog. Cart lines referencing it simply drop
/// out of cart views; historical orders are untouched because they store
/// only a computed total.
pub fn delete_product<R>(repo: &R, product_id: i32) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    repo.delete_product(product_id).map_err(ServiceError::from)
}

fn validate_name(name: Option<&str>) -> ServiceResult<()> {
    match name {
        Some(name) if name.trim().is_empty() => Err(ServiceError::Validation(
            "product name must not be empty".into(),
        )),
        _ => Ok(()),
    }
}

fn validate_price(price_cents: Option<i64>) -> ServiceResult<()> {
    match price_cents {
        Some(price) if price <= 0 => Err(ServiceError::Validation(
            "product price must be positive".into(),
        )),
        _ => Ok(()),
    }
}
