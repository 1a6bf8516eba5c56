//! Caller-facing operations: input validation and orchestration on top of
//! the repository traits.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::order::Order;
use crate::repository::RepositoryError;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod orders;

/// Per-call session context supplied by the external identity collaborator.
/// Replaces process-wide session state: every service call names its caller
/// explicitly, so independent sessions can run side by side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CallerContext {
    /// Identifier of the acting user.
    pub user_id: i32,
    /// Role attribute carried for the UI layer. The core treats it as
    /// opaque and enforces nothing; the caller gates operations itself.
    pub is_admin: bool,
}

impl CallerContext {
    /// Context for a regular customer session.
    pub fn customer(user_id: i32) -> Self {
        Self {
            user_id,
            is_admin: false,
        }
    }

    /// Context for an admin session.
    pub fn admin(user_id: i32) -> Self {
        Self {
            user_id,
            is_admin: true,
        }
    }
}

/// Failures surfaced to the UI layer. Each kind maps to a distinct recovery
/// path: validation errors are field-correctable, `NotFound` and
/// `InvalidTransition` call for a state re-fetch, `PartialFailure` calls for
/// a cart-clear retry, and repository faults for a whole-operation retry.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("record not found")]
    NotFound,
    #[error("illegal order status transition")]
    InvalidTransition,
    #[error("cannot place an order from an empty cart")]
    EmptyCart,
    #[error("order was created but the cart was not cleared")]
    PartialFailure {
        /// The order that was committed; the caller should retry the clear.
        order: Order,
    },
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound => Self::NotFound,
            RepositoryError::InvalidTransition => Self::InvalidTransition,
            other => Self::Repository(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
