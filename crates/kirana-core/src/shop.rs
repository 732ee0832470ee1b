//! # Shop
//!
//! The application state aggregate: catalog, cart, purchase history and undo
//! log, owned together so every operation keeps them consistent.
//!
//! ## Reservation Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Stock Through a Sale                                 │
//! │                                                                         │
//! │  add_to_cart(Pen, 5)   stock 20 → 15    cart {Pen: 5}    undo [+5 Pen]  │
//! │          │                                                              │
//! │          ├── undo_last()  stock 15 → 20  cart {}          undo []       │
//! │          │                                                              │
//! │          └── checkout()   stock stays 15 cart {}          undo []       │
//! │                           history += "Pen x5 = ₹50.00"                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Stock is committed when an item enters the cart, never at checkout.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::history::PurchaseHistory;
use crate::money::Money;
use crate::types::{Bill, Product, ProductId, ProductUpdate, PurchaseRecord, StockedProduct};
use crate::undo::{CartAction, UndoLog};
use crate::validation::{normalize_search_query, validate_quantity};
use crate::{seed, DEFAULT_STOCK};

/// Result of a successful cart addition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartAddition {
    pub product_id: ProductId,
    pub name: String,
    pub added: u32,
    /// Quantity of this product now in the cart.
    pub cart_quantity: u32,
    /// Stock left after the reservation.
    pub remaining_stock: u32,
}

/// Result of undoing the most recent cart addition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoOutcome {
    pub action: CartAction,
    /// Units actually taken back out of the cart.
    pub removed_from_cart: u32,
    /// New stock level, `None` when the product was deleted meanwhile.
    pub restored_stock: Option<u32>,
}

/// All state for one console session.
#[derive(Debug, Clone)]
pub struct Shop {
    catalog: Catalog,
    cart: Cart,
    history: PurchaseHistory,
    undo: UndoLog,
    default_stock: u32,
}

impl Default for Shop {
    fn default() -> Self {
        Shop::new(DEFAULT_STOCK)
    }
}

impl Shop {
    /// Creates an empty shop. New products start with `default_stock` units.
    pub fn new(default_stock: u32) -> Self {
        Shop {
            catalog: Catalog::new(),
            cart: Cart::new(),
            history: PurchaseHistory::new(),
            undo: UndoLog::new(),
            default_stock,
        }
    }

    /// Creates a shop stocked with the starter catalog.
    pub fn with_seed_catalog(default_stock: u32) -> CoreResult<Self> {
        let mut shop = Shop::new(default_stock);
        for product in seed::starter_products() {
            shop.add_product(product)?;
        }
        info!(products = shop.catalog.len(), "Seed catalog loaded");
        Ok(shop)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn history(&self) -> &PurchaseHistory {
        &self.history
    }

    pub fn undo_log(&self) -> &UndoLog {
        &self.undo
    }

    // =========================================================================
    // Catalog management
    // =========================================================================

    /// Creates a product with the default stock level.
    pub fn add_product(&mut self, product: Product) -> CoreResult<()> {
        self.catalog.add_product(product, self.default_stock)
    }

    /// Applies a partial update. A cart line for the product picks up the
    /// new name, category and price.
    pub fn update_product(&mut self, id: ProductId, update: ProductUpdate) -> CoreResult<Product> {
        let product = self.catalog.update_product(id, update)?.clone();
        self.cart.refresh(&product);
        Ok(product)
    }

    /// Deletes a product.
    ///
    /// A cart line for it is delisted: it keeps the last known name and
    /// price and is billed normally, but a product later created with the
    /// same id starts a line of its own.
    pub fn delete_product(&mut self, id: ProductId) -> CoreResult<Product> {
        let product = self.catalog.delete_product(id)?;
        let held = self.cart.delist(id);
        if held > 0 {
            warn!(id = %id, quantity = held, "Deleted product is still in the cart");
        }
        Ok(product)
    }

    pub fn find_product(&self, id: ProductId) -> CoreResult<StockedProduct> {
        debug!(id = %id, "find_product");
        self.catalog.find(id)
    }

    /// Case-insensitive substring search on names.
    pub fn search_by_name(&self, query: &str) -> Vec<StockedProduct> {
        let needle = normalize_search_query(query);
        let hits = self.catalog.search_by_name(&needle);
        debug!(query = %needle, count = hits.len(), "search_by_name");
        hits
    }

    // =========================================================================
    // Browsing
    // =========================================================================

    pub fn categories(&self) -> Vec<&str> {
        self.catalog.categories()
    }

    /// Resolves a 1-based category menu position.
    pub fn category_at(&self, choice: i64) -> CoreResult<String> {
        let categories = self.catalog.categories();
        usize::try_from(choice)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| categories.get(index))
            .map(|c| c.to_string())
            .ok_or(CoreError::InvalidCategoryChoice {
                choice,
                count: categories.len(),
            })
    }

    pub fn products_in(&self, category: &str) -> Vec<StockedProduct> {
        self.catalog.products_in(category)
    }

    /// Adds `quantity` of a product listed under `category`.
    ///
    /// ## Errors
    /// - `NotInCategory` if the id is unknown or belongs elsewhere
    /// - `InvalidQuantity` if `quantity <= 0` or exceeds stock
    pub fn add_to_cart_from(
        &mut self,
        category: &str,
        id: ProductId,
        quantity: i64,
    ) -> CoreResult<CartAddition> {
        if !self.catalog.in_category(category, id) {
            return Err(CoreError::NotInCategory {
                id,
                category: category.to_string(),
            });
        }
        self.add_to_cart(id, quantity)
    }

    /// Reserves `quantity` units of a product into the cart.
    ///
    /// On success the stock drops immediately and an undo entry is pushed.
    /// On failure nothing changes.
    pub fn add_to_cart(&mut self, id: ProductId, quantity: i64) -> CoreResult<CartAddition> {
        let product = self
            .catalog
            .get(id)
            .cloned()
            .ok_or(CoreError::ProductNotFound(id))?;
        let available = self.catalog.stock_of(id).unwrap_or(0);
        let quantity = validate_quantity(quantity, available)?;

        let remaining_stock = self.catalog.reserve(id, quantity)?;
        let line = self.cart.add_item(&product, quantity);
        let (line_no, cart_quantity) = (line.line_no, line.quantity);
        self.undo.push(CartAction {
            line_no,
            product_id: id,
            name: product.name.clone(),
            quantity,
        });

        info!(id = %id, quantity, remaining_stock, "Added to cart");
        Ok(CartAddition {
            product_id: id,
            name: product.name,
            added: quantity,
            cart_quantity,
            remaining_stock,
        })
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Bills the cart, timestamped now.
    pub fn checkout(&mut self) -> CoreResult<Bill> {
        self.checkout_at(Utc::now())
    }

    /// Drains the cart into a bill and the purchase history.
    ///
    /// Stock is not touched: it was reserved when items were added. The undo
    /// log is cleared because billed additions can no longer be reversed.
    pub fn checkout_at(&mut self, now: DateTime<Utc>) -> CoreResult<Bill> {
        if self.cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let bill_id = Uuid::new_v4();
        let lines: Vec<PurchaseRecord> = self
            .cart
            .take_lines()
            .into_iter()
            .map(|line| PurchaseRecord {
                bill_id,
                product_id: line.product.id,
                amount: line.line_total(),
                unit_price: line.product.price,
                name: line.product.name,
                category: line.product.category,
                quantity: line.quantity,
                purchased_at: now,
            })
            .collect();
        let total: Money = lines.iter().map(|l| l.amount).sum();

        self.history.extend(lines.iter().cloned());
        self.undo.clear();

        info!(bill_id = %bill_id, items = lines.len(), total = %total, "Checkout complete");
        Ok(Bill {
            id: bill_id,
            lines,
            total,
            created_at: now,
        })
    }

    // =========================================================================
    // Stock and undo
    // =========================================================================

    pub fn stock_levels(&self) -> Vec<StockedProduct> {
        self.catalog.stock_levels()
    }

    /// Reverses the most recent cart addition.
    ///
    /// The quantity leaves the cart line it went into and returns to stock.
    /// If the product was deleted since, the line is delisted and only the
    /// cart side is reversed: a product re-created under the same id never
    /// receives that stock.
    pub fn undo_last(&mut self) -> CoreResult<UndoOutcome> {
        let action = self.undo.pop().ok_or(CoreError::NothingToUndo)?;

        let listed = self
            .cart
            .line_by_no(action.line_no)
            .is_some_and(|line| line.listed);
        let removed_from_cart = self.cart.remove_quantity(action.line_no, action.quantity);
        let restored_stock = if listed {
            self.catalog.release(action.product_id, removed_from_cart)
        } else {
            None
        };

        info!(
            id = %action.product_id,
            removed_from_cart,
            restored_stock = ?restored_stock,
            "Undid cart addition"
        );
        Ok(UndoOutcome {
            action,
            removed_from_cart,
            restored_stock,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
