//! Diesel row types and their conversions to domain types.

pub mod cart;
pub mod order;
pub mod product;
