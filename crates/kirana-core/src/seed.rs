//! # Seed Catalog
//!
//! The starter products loaded when the console starts without `--empty`.
//!
//! ```text
//! ┌────┬────────────┬─────────────┬──────────┐
//! │ id │ name       │ category    │ price    │
//! ├────┼────────────┼─────────────┼──────────┤
//! │ 1  │ Pen        │ Stationery  │ ₹10      │
//! │ 2  │ Notebook   │ Stationery  │ ₹40      │
//! │ 3  │ Laptop     │ Electronics │ ₹50000   │
//! │ 4  │ Charger    │ Electronics │ ₹800     │
//! │ 5  │ USB Cable  │ Electronics │ ₹150     │
//! └────┴────────────┴─────────────┴──────────┘
//! ```

use crate::money::Money;
use crate::types::{Product, ProductId};

const STARTER_CATALOG: &[(u32, &str, &str, i64)] = &[
    (1, "Pen", "Stationery", 10),
    (2, "Notebook", "Stationery", 40),
    (3, "Laptop", "Electronics", 50_000),
    (4, "Charger", "Electronics", 800),
    (5, "USB Cable", "Electronics", 150),
];

/// Starter products in insertion order.
pub fn starter_products() -> Vec<Product> {
    STARTER_CATALOG
        .iter()
        .map(|&(id, name, category, rupees)| {
            Product::new(ProductId::new(id), name, category, Money::from_rupees(rupees))
        })
        .collect()
}
