//! # Browse Command
//!
//! Category listing and cart addition.
//!
//! ## Operator Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  --- Categories ---                                                     │
//! │  1. Electronics                                                         │
//! │  2. Stationery                                                          │
//! │  Select category: 2                                                     │
//! │                                                                         │
//! │  --- Products in Stationery ---                                         │
//! │  [1] Pen (Stationery) - ₹10.00 | In Stock: 20                           │
//! │  [2] Notebook (Stationery) - ₹40.00 | In Stock: 20                      │
//! │  Enter product ID to add to cart (or 0 to go back): 1                   │
//! │  Enter quantity: 5                                                      │
//! │  Added to cart.                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use kirana_core::ProductId;
use tracing::debug;

use crate::console::Session;
use crate::error::ConsoleResult;

pub fn browse_categories<R: BufRead, W: Write>(session: &mut Session<R, W>) -> ConsoleResult<()> {
    debug!("browse_categories command");

    let categories: Vec<String> = session
        .shop
        .categories()
        .into_iter()
        .map(str::to_string)
        .collect();
    if categories.is_empty() {
        return session.io.say("No products available.");
    }

    session.io.say("\n--- Categories ---")?;
    for (number, category) in categories.iter().enumerate() {
        session.io.say(format!("{}. {}", number + 1, category))?;
    }

    let choice = session.io.ask_number("Select category: ")?;
    let category = session.shop.category_at(choice)?;

    session.io.say(format!("\n--- Products in {} ---", category))?;
    for item in session.shop.products_in(&category) {
        let line = format!(
            "{} | In Stock: {}",
            session.config.describe_product(&item.product),
            item.stock
        );
        session.io.say(line)?;
    }

    let raw = session
        .io
        .ask_number("Enter product ID to add to cart (or 0 to go back): ")?;
    if raw == 0 {
        return Ok(());
    }

    // Check membership before asking for a quantity.
    let id = match ProductId::try_from(raw) {
        Ok(id) if session.shop.catalog().in_category(&category, id) => id,
        _ => return session.io.say("Invalid Product ID."),
    };

    let quantity = session.io.ask_number("Enter quantity: ")?;
    session.shop.add_to_cart_from(&category, id, quantity)?;
    session.io.say("Added to cart.")
}
