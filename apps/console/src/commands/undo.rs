//! # Undo Command
//!
//! Reverses the most recent cart addition: the quantity leaves the cart and
//! goes back on the shelf.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::console::Session;
use crate::error::ConsoleResult;

pub fn undo_last<R: BufRead, W: Write>(session: &mut Session<R, W>) -> ConsoleResult<()> {
    debug!("undo_last command");

    let outcome = session.shop.undo_last()?;
    session
        .io
        .say(format!("Undoing last action: {}", outcome.action))?;

    if outcome.restored_stock.is_none() {
        session
            .io
            .say("Product no longer exists; stock was not restored.")?;
    }
    Ok(())
}
