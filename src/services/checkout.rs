//! Checkout: turns the caller's cart into a permanent order.

use crate::domain::order::Order;
use crate::repository::{CartReader, Checkout};
use crate::services::{CallerContext, ServiceError, ServiceResult};

/// Places an order from the caller's cart. Order creation and cart clearing
/// run in one storage transaction, so a fault rolls both back together.
///
/// After the transaction commits, the cart is re-read; if lines somehow
/// survived, the outcome is [`ServiceError::PartialFailure`] carrying the
/// committed order so the caller can retry the clear instead of checking
/// out twice.
pub fn place_order<R>(repo: &R, ctx: &CallerContext) -> ServiceResult<Order>
where
    R: Checkout + CartReader + ?Sized,
{
    let order = repo
        .place_order(ctx.user_id)?
        .ok_or(ServiceError::EmptyCart)?;

    match repo.count_cart_lines(ctx.user_id) {
        Ok(0) => Ok(order),
        Ok(remaining) => {
            log::error!(
                "checkout for user {} committed order {} but {remaining} cart lines remain",
                ctx.user_id,
                order.id
            );
            Err(ServiceError::PartialFailure { order })
        }
        Err(err) => {
            // The order exists; an unverifiable cart state is reported the
            // same way so the caller retries the clear, not the checkout.
            log::error!(
                "checkout for user {} committed order {} but cart verification failed: {err}",
                ctx.user_id,
                order.id
            );
            Err(ServiceError::PartialFailure { order })
        }
    }
}
