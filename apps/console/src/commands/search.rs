//! # Search Commands
//!
//! Exact lookup by id and case-insensitive substring search by name.

use std::io::{BufRead, Write};

use kirana_core::validation::normalize_search_query;
use kirana_core::ProductId;
use tracing::debug;

use crate::console::Session;
use crate::error::{ConsoleError, ConsoleResult};

pub fn search_menu<R: BufRead, W: Write>(session: &mut Session<R, W>) -> ConsoleResult<()> {
    debug!("search_menu command");

    session.io.say("\n--- Search Products ---")?;
    session.io.say("1. Search by Product ID")?;
    session.io.say("2. Search by Product Name")?;

    match session.io.ask_number("Enter your choice: ")? {
        1 => search_by_id(session),
        2 => search_by_name(session),
        _ => session.io.say("Invalid choice."),
    }
}

pub fn search_by_id<R: BufRead, W: Write>(session: &mut Session<R, W>) -> ConsoleResult<()> {
    let raw = session.io.ask_number("Enter Product ID to search: ")?;
    let id = ProductId::try_from(raw).map_err(|_| ConsoleError::UnknownId(raw))?;

    let found = session.shop.find_product(id)?;
    let line = format!(
        "Product Found: {} | In Stock: {}",
        session.config.describe_product(&found.product),
        found.stock
    );
    session.io.say(line)
}

/// Lists every product whose name contains the query, ordered by id.
pub fn search_by_name<R: BufRead, W: Write>(session: &mut Session<R, W>) -> ConsoleResult<()> {
    let query = session.io.ask_text("Enter Product Name to search: ")?;

    let hits = session.shop.search_by_name(&query);
    if hits.is_empty() {
        let shown = normalize_search_query(&query);
        return session
            .io
            .say(format!("No products found with name containing: {}", shown));
    }

    for hit in hits {
        let line = format!(
            "Found Product: {} | In Stock: {}",
            session.config.describe_product(&hit.product),
            hit.stock
        );
        session.io.say(line)?;
    }
    Ok(())
}
