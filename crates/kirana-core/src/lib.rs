//! # kirana-core: Pure Business Logic for Kirana POS
//!
//! This crate is the **heart** of Kirana POS. It holds the catalog, stock,
//! cart, purchase history and undo bookkeeping with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kirana POS Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console (apps/console)                       │   │
//! │  │    Main Menu ──► Browse ──► Cart ──► Bill ──► History           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ method calls                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kirana-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   shop    │  │  catalog  │  │   cart    │  │ validation│  │   │
//! │  │   │  Shop     │  │  stock    │  │  CartLine │  │   rules   │  │   │
//! │  │   │  undo     │  │ categories│  │  history  │  │   money   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO STDIN • NO STDOUT • NO FILES • NO ENVIRONMENT             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Bill, PurchaseRecord)
//! - [`money`] - Money type with integer paise arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//! - [`catalog`] - Products, stock ledger, category index
//! - [`cart`] - The session cart
//! - [`history`] - Purchase history log
//! - [`undo`] - Undo log of cart additions
//! - [`shop`] - The state aggregate the console drives
//! - [`seed`] - Starter catalog
//!
//! ## Example Usage
//!
//! ```rust
//! use kirana_core::{Money, ProductId, Shop, DEFAULT_STOCK};
//!
//! let mut shop = Shop::with_seed_catalog(DEFAULT_STOCK).unwrap();
//! let pen = ProductId::new(1);
//!
//! shop.add_to_cart(pen, 5).unwrap();
//! assert_eq!(shop.catalog().stock_of(pen), Some(15));
//!
//! let bill = shop.checkout().unwrap();
//! assert_eq!(bill.total, Money::from_rupees(50));
//! assert_eq!(shop.history().records()[0].to_string(), "Pen x5 = ₹50.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod history;
pub mod money;
pub mod seed;
pub mod shop;
pub mod types;
pub mod undo;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use history::PurchaseHistory;
pub use money::Money;
pub use shop::{CartAddition, Shop, UndoOutcome};
pub use types::*;
pub use undo::{CartAction, UndoLog};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Stock level given to every newly created product.
pub const DEFAULT_STOCK: u32 = 20;

/// Maximum product name length in characters.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum category label length in characters.
pub const MAX_CATEGORY_LEN: usize = 50;
