//! # Report Commands
//!
//! Read-only views: stock levels and purchase history.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::console::Session;
use crate::error::ConsoleResult;

/// Every stock entry, ordered by product id.
pub fn view_stock<R: BufRead, W: Write>(session: &mut Session<R, W>) -> ConsoleResult<()> {
    debug!("view_stock command");

    session.io.say("\n--- Available Stock ---")?;
    for item in session.shop.stock_levels() {
        let line = format!(
            "{} | Qty: {}",
            session.config.describe_product(&item.product),
            item.stock
        );
        session.io.say(line)?;
    }
    Ok(())
}

/// Every billed line, oldest first.
pub fn view_history<R: BufRead, W: Write>(session: &mut Session<R, W>) -> ConsoleResult<()> {
    debug!("view_history command");

    let history = session.shop.history();
    if history.is_empty() {
        return session.io.say("No purchase history.");
    }

    let lines: Vec<String> = history
        .records()
        .iter()
        .map(|record| session.config.describe_record(record))
        .collect();

    session.io.say("\n--- Purchase History ---")?;
    for line in lines {
        session.io.say(line)?;
    }
    Ok(())
}
