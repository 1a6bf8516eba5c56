//! SQLite-backed persistence core for a single-tenant retail storefront:
//! catalog products, per-user carts with merge-on-add semantics, checkout,
//! and revenue aggregation over day/month/year windows.

pub mod db;
pub mod domain;
pub mod models;
pub mod repository;
pub mod schema;
pub mod services;
