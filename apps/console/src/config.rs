//! # Configuration
//!
//! Settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (`--store-name`, `--default-stock`, `--empty`)
//! 2. Environment variables (`KIRANA_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only once the menu loop starts.

use kirana_core::{Money, Product, ProductId, PurchaseRecord, DEFAULT_STOCK};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (shown in the welcome banner)
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Stock given to every new product
    pub default_stock: u32,

    /// Load the starter catalog at startup
    pub seed_catalog: bool,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "Billing System"
    /// - Currency: ₹
    /// - Stock: 20 per product
    /// - Starter catalog: loaded
    fn default() -> Self {
        ConfigState {
            store_name: "Billing System".to_string(),
            currency_symbol: "₹".to_string(),
            default_stock: DEFAULT_STOCK,
            seed_catalog: true,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `KIRANA_STORE_NAME`: Override store name
    /// - `KIRANA_CURRENCY_SYMBOL`: Override currency symbol
    /// - `KIRANA_DEFAULT_STOCK`: Override stock for new products (e.g., "50")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("KIRANA_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("KIRANA_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(stock) = lookup("KIRANA_DEFAULT_STOCK") {
            match stock.trim().parse::<u32>() {
                Ok(stock) => config.default_stock = stock,
                Err(_) => warn!(value = %stock, "Ignoring invalid KIRANA_DEFAULT_STOCK"),
            }
        }

        config
    }

    /// Formats an amount with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use kirana_console::config::ConfigState;
    /// use kirana_core::Money;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_paise(1234)), "₹12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        amount.format_with(&self.currency_symbol)
    }

    /// `[1] Pen (Stationery) - ₹10.00`
    pub fn describe_product(&self, product: &Product) -> String {
        self.describe_item(product.id, &product.name, &product.category, product.price)
    }

    /// Same form as [`ConfigState::describe_product`], from the fields a
    /// billed record keeps.
    pub fn describe_item(
        &self,
        id: ProductId,
        name: &str,
        category: &str,
        unit_price: Money,
    ) -> String {
        format!(
            "[{}] {} ({}) - {}",
            id,
            name,
            category,
            self.format_currency(unit_price)
        )
    }

    /// `Pen x5 = ₹50.00`
    pub fn describe_record(&self, record: &PurchaseRecord) -> String {
        format!(
            "{} x{} = {}",
            record.name,
            record.quantity,
            self.format_currency(record.amount)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_rupees(50)), "₹50.00");
        assert_eq!(config.format_currency(Money::from_paise(1)), "₹0.01");
        assert_eq!(config.format_currency(Money::from_paise(-1234)), "-₹12.34");
    }

    #[test]
    fn test_from_lookup_overrides() {
        let vars: HashMap<&str, &str> = [
            ("KIRANA_STORE_NAME", "Sharma General Store"),
            ("KIRANA_CURRENCY_SYMBOL", "Rs."),
            ("KIRANA_DEFAULT_STOCK", "50"),
        ]
        .into_iter()
        .collect();

        let config = ConfigState::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.store_name, "Sharma General Store");
        assert_eq!(config.default_stock, 50);
        assert_eq!(config.format_currency(Money::from_rupees(2)), "Rs.2.00");
        assert!(config.seed_catalog);
    }

    #[test]
    fn test_from_lookup_ignores_bad_stock() {
        let config = ConfigState::from_lookup(|k| {
            (k == "KIRANA_DEFAULT_STOCK").then(|| "lots".to_string())
        });
        assert_eq!(config.default_stock, DEFAULT_STOCK);
    }

    #[test]
    fn test_describe_product() {
        let config = ConfigState::default();
        let pen = Product::new(ProductId::new(1), "Pen", "Stationery", Money::from_rupees(10));
        assert_eq!(config.describe_product(&pen), "[1] Pen (Stationery) - ₹10.00");
        assert_eq!(
            config.describe_item(pen.id, "Gel Pen", "Office", Money::from_rupees(12)),
            "[1] Gel Pen (Office) - ₹12.00"
        );
    }
}
