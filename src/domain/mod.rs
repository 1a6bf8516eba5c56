//! Plain domain types shared by the repository and services layers.

pub mod cart;
pub mod order;
pub mod product;
