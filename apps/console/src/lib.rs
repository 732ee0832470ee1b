//! # Kirana Console Library
//!
//! The interactive billing console: logging setup, configuration and the
//! menu loop that drives a [`kirana_core::Shop`].
//!
//! ## Module Organization
//! ```text
//! kirana_console/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── Store name, currency, default stock
//! ├── console.rs      ◄─── Session and main menu loop
//! ├── io.rs           ◄─── Prompt/response over BufRead + Write
//! ├── error.rs        ◄─── Console error type and operator messages
//! └── commands/
//!     ├── browse.rs   ◄─── Browse by category, add to cart
//!     ├── cart.rs     ◄─── View cart, generate bill
//!     ├── catalog.rs  ◄─── CRUD sub-menu
//!     ├── search.rs   ◄─── Search sub-menu
//!     ├── reports.rs  ◄─── Stock and history views
//!     └── undo.rs     ◄─── Undo last cart addition
//! ```

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod io;

use std::io::{BufRead, Write};

use kirana_core::Shop;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::ConfigState;
pub use console::{MainMenu, Session};
pub use error::{ConsoleError, ConsoleResult, ErrorCode};
pub use io::Prompter;

/// Runs the console on the process's stdin and stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging                                                  │
/// │     • tracing-subscriber with env filter, writing to stderr             │
/// │     • Default: WARN, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Build the Shop                                                      │
/// │     • Starter catalog unless --empty                                    │
/// │     • New products get the configured default stock                     │
/// │                                                                         │
/// │  3. Menu loop until "9" or end of input                                 │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(config: ConfigState) -> ConsoleResult<()> {
    init_tracing();
    info!(store = %config.store_name, "Starting Kirana console");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_with(config, stdin.lock(), stdout.lock())
}

/// Runs a full session over the given reader and writer.
pub fn run_with<R: BufRead, W: Write>(config: ConfigState, input: R, output: W) -> ConsoleResult<()> {
    let shop = build_shop(&config)?;
    let mut session = Session::new(shop, config, Prompter::new(input, output));
    session.run()
}

/// Creates the shop described by `config`.
pub fn build_shop(config: &ConfigState) -> ConsoleResult<Shop> {
    let shop = if config.seed_catalog {
        Shop::with_seed_catalog(config.default_stock)?
    } else {
        Shop::new(config.default_stock)
    };
    Ok(shop)
}

/// Initializes the tracing subscriber.
///
/// Logs go to stderr so they never mix with the menu on stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second initialization (e.g. in tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
