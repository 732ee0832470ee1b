//! # Console Commands
//!
//! One function per menu entry. Each takes the running [`Session`] and
//! returns `ConsoleResult<()>`; the menu loop prints any recoverable error.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── browse.rs   ◄─── Browse by category, add to cart
//! ├── cart.rs     ◄─── View cart, generate bill
//! ├── catalog.rs  ◄─── Add / update / delete products
//! ├── search.rs   ◄─── Search by id or name
//! ├── reports.rs  ◄─── Stock and purchase history views
//! └── undo.rs     ◄─── Undo last cart addition
//! ```
//!
//! [`Session`]: crate::console::Session

pub mod browse;
pub mod cart;
pub mod catalog;
pub mod reports;
pub mod search;
pub mod undo;
