//! # Kirana Console Entry Point
//!
//! Parses command line flags, layers them over the environment
//! configuration and hands off to [`kirana_console::run`].

use clap::Parser;

use kirana_console::ConfigState;

/// Kirana - console billing for a small shop
#[derive(Parser, Debug)]
#[command(name = "kirana")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Start with an empty catalog instead of the starter products
    #[arg(long)]
    empty: bool,

    /// Stock given to every new product
    #[arg(long, value_name = "N")]
    default_stock: Option<u32>,

    /// Store name shown in the welcome banner
    #[arg(long, value_name = "NAME")]
    store_name: Option<String>,
}

impl Args {
    fn apply(self, mut config: ConfigState) -> ConfigState {
        if self.empty {
            config.seed_catalog = false;
        }
        if let Some(stock) = self.default_stock {
            config.default_stock = stock;
        }
        if let Some(name) = self.store_name {
            config.store_name = name;
        }
        config
    }
}

fn main() {
    let args = Args::parse();
    let config = args.apply(ConfigState::from_env());

    if let Err(e) = kirana_console::run(config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
