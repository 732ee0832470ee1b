//! # Cart Commands
//!
//! Cart view and bill generation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐  browse (1)   ┌──────────┐  generate bill (3)  ┌───────┐   │
//! │  │  Empty   │──────────────►│ In Cart  │────────────────────►│ Billed│   │
//! │  │  Cart    │◄──────────────│          │                     │       │   │
//! │  └──────────┘  undo (7)     └──────────┘                     └───┬───┘   │
//! │       ▲                                                          │       │
//! │       └──────────────── cart emptied, history appended ◄─────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use chrono::Local;
use tracing::{debug, info};

use crate::console::Session;
use crate::error::ConsoleResult;

/// Lists cart lines in the order they were first added, then the total.
///
/// Lines are priced from the current product; a deleted product shows the
/// data it had when it was deleted.
pub fn view_cart<R: BufRead, W: Write>(session: &mut Session<R, W>) -> ConsoleResult<()> {
    debug!("view_cart command");

    let cart = session.shop.cart();
    if cart.is_empty() {
        return session.io.say("Cart is empty.");
    }

    let mut lines: Vec<String> = cart
        .lines()
        .iter()
        .map(|line| {
            format!(
                "{} | Qty: {} | Total: {}",
                session.config.describe_product(&line.product),
                line.quantity,
                session.config.format_currency(line.line_total())
            )
        })
        .collect();
    lines.push(format!(
        "Total Amount: {}",
        session.config.format_currency(cart.total())
    ));

    session.io.say("\n--- Your Cart ---")?;
    for line in lines {
        session.io.say(line)?;
    }
    Ok(())
}

/// Checks out the cart and prints the bill.
///
/// An empty cart is reported and nothing changes.
pub fn generate_bill<R: BufRead, W: Write>(session: &mut Session<R, W>) -> ConsoleResult<()> {
    debug!("generate_bill command");

    let bill = session.shop.checkout()?;
    info!(bill_id = %bill.id, total = %bill.total, "Bill generated");

    session.io.say("\n=== Final Bill ===")?;
    session.io.say(format!("Bill ID: {}", bill.id))?;
    let date = bill.created_at.with_timezone(&Local);
    session
        .io
        .say(format!("Date: {}", date.format("%Y-%m-%d %H:%M")))?;
    for record in &bill.lines {
        let line = format!(
            "{} x{} = {}",
            session.config.describe_item(
                record.product_id,
                &record.name,
                &record.category,
                record.unit_price
            ),
            record.quantity,
            session.config.format_currency(record.amount)
        );
        session.io.say(line)?;
    }
    session
        .io
        .say(format!("Total: {}", session.config.format_currency(bill.total)))?;
    session.io.say("Thank you for your purchase!")
}
