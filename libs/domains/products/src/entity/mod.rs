//! SeaORM entities for the `products` and `variants` tables.

pub mod product;
pub mod variant;
