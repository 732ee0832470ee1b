//! # Catalog Commands
//!
//! The CRUD sub-menu: add, update and delete products.
//!
//! ## Update Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Enter new name (or press Enter to keep current):        ""  → keep     │
//! │  Enter new category (or press Enter to keep current):   "Office" → move │
//! │  Enter new price (or press Enter to keep current): ₹    "-5" → keep     │
//! │                                                                         │
//! │  Nothing is applied until all three answers are in.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use kirana_core::{CoreError, Product, ProductId, ProductUpdate};
use tracing::{debug, info};

use crate::console::Session;
use crate::error::{ConsoleError, ConsoleResult};

pub fn crud_menu<R: BufRead, W: Write>(session: &mut Session<R, W>) -> ConsoleResult<()> {
    debug!("crud_menu command");

    session.io.say("\n--- CRUD Operations ---")?;
    session.io.say("1. Add Product")?;
    session.io.say("2. Update Product")?;
    session.io.say("3. Delete Product")?;

    match session.io.ask_number("Enter your choice: ")? {
        1 => add_product(session),
        2 => update_product(session),
        3 => delete_product(session),
        _ => session.io.say("Invalid choice."),
    }
}

/// Creates a product with the default stock level.
///
/// ## Errors
/// - `DuplicateProduct` if the id is taken (checked before the other prompts)
/// - `Validation` for a non-positive id, blank name or category, bad price
pub fn add_product<R: BufRead, W: Write>(session: &mut Session<R, W>) -> ConsoleResult<()> {
    let raw = session.io.ask_number("Enter product ID: ")?;
    let id = ProductId::try_from(raw)?;
    if session.shop.catalog().contains(id) {
        return Err(CoreError::DuplicateProduct(id).into());
    }

    let name = session.io.ask_text("Enter product name: ")?;
    let category = session.io.ask_text("Enter product category: ")?;
    let label = format!("Enter product price: {}", session.config.currency_symbol);
    let price = session.io.ask_money(&label)?;

    session
        .shop
        .add_product(Product::new(id, name, category, price))?;
    info!(id = %id, "Product created from console");
    session.io.say("Product added successfully!")
}

/// Edits name, category and price; blank answers keep the current value.
pub fn update_product<R: BufRead, W: Write>(session: &mut Session<R, W>) -> ConsoleResult<()> {
    let raw = session.io.ask_number("Enter product ID to update: ")?;
    let id = ProductId::try_from(raw).map_err(|_| ConsoleError::UnknownId(raw))?;
    let current = session.shop.find_product(id)?;
    debug!(id = %id, name = %current.product.name, "Updating product");

    let name = session
        .io
        .ask_text("Enter new name (or press Enter to keep current): ")?;
    let category = session
        .io
        .ask_text("Enter new category (or press Enter to keep current): ")?;
    let label = format!(
        "Enter new price (or press Enter to keep current): {}",
        session.config.currency_symbol
    );
    let price = session.io.ask_price_change(&label)?;

    let update = ProductUpdate::from_input(&name, &category, price);
    if update.is_empty() {
        return session.io.say("No changes made.");
    }

    let updated = session.shop.update_product(id, update)?;
    info!(id = %id, category = %updated.category, "Product updated from console");
    session.io.say("Product updated successfully!")
}

/// Removes a product from the catalog, its stock and its category.
pub fn delete_product<R: BufRead, W: Write>(session: &mut Session<R, W>) -> ConsoleResult<()> {
    let raw = session.io.ask_number("Enter product ID to delete: ")?;
    let id = ProductId::try_from(raw).map_err(|_| ConsoleError::UnknownId(raw))?;

    let removed = session.shop.delete_product(id)?;
    info!(id = %id, name = %removed.name, "Product deleted from console");
    session.io.say("Product deleted successfully!")
}
