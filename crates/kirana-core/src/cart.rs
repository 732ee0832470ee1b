//! # Cart
//!
//! The current session's shopping cart.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Operator Action          Shop Operation          Cart Change           │
//! │  ───────────────          ──────────────          ───────────           │
//! │                                                                         │
//! │  Browse → pick item ─────► add_to_cart() ───────► add_item()           │
//! │                                                                         │
//! │  Undo last action ───────► undo_last() ─────────► remove_quantity()    │
//! │                                                                         │
//! │  Edit / delete product ──► update / delete ─────► refresh() / delist() │
//! │                                                                         │
//! │  Generate bill ──────────► checkout() ──────────► take_lines()         │
//! │                                                                         │
//! │  View cart ──────────────► cart() ──────────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{Product, ProductId};

/// A line in the cart.
///
/// ## Design Notes
/// The line holds the product as it is in the catalog: the shop refreshes it
/// on every update, so the cart and the bill use the current price. When the
/// product is deleted the line is delisted and keeps the last known data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Unique within the cart; undo entries refer to it.
    pub line_no: u32,

    pub product: Product,

    pub quantity: u32,

    /// False once the product has been deleted from the catalog.
    pub listed: bool,
}

impl CartLine {
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Listed lines are unique by product id (adding the same product increases quantity)
/// - A delisted line never receives new units
/// - Lines keep insertion order
/// - Quantity is always > 0 (a line that drops to 0 is removed)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    last_line_no: u32,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product to the cart or increases quantity if already present.
    ///
    /// Returns the line that received the units.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> &CartLine {
        let index = match self.lines.iter().position(|l| l.listed && l.product.id == product.id) {
            Some(index) => {
                self.lines[index].quantity += quantity;
                index
            }
            None => {
                self.last_line_no += 1;
                self.lines.push(CartLine {
                    line_no: self.last_line_no,
                    product: product.clone(),
                    quantity,
                    listed: true,
                });
                self.lines.len() - 1
            }
        };
        &self.lines[index]
    }

    /// Replaces the product data of the listed line for `product.id`.
    pub fn refresh(&mut self, product: &Product) {
        if let Some(line) = self.listed_line_mut(product.id) {
            line.product = product.clone();
        }
    }

    /// Marks the listed line for a deleted product. Returns the units it holds.
    pub fn delist(&mut self, product_id: ProductId) -> u32 {
        match self.listed_line_mut(product_id) {
            Some(line) => {
                line.listed = false;
                line.quantity
            }
            None => 0,
        }
    }

    /// Removes up to `quantity` units from line `line_no`.
    ///
    /// Returns how many units were actually removed (0 if the line is gone).
    /// The line disappears when its quantity reaches zero.
    pub fn remove_quantity(&mut self, line_no: u32, quantity: u32) -> u32 {
        let Some(index) = self.lines.iter().position(|l| l.line_no == line_no) else {
            return 0;
        };

        let line = &mut self.lines[index];
        let removed = quantity.min(line.quantity);
        line.quantity -= removed;
        if line.quantity == 0 {
            self.lines.remove(index);
        }
        removed
    }

    fn listed_line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|l| l.listed && l.product.id == product_id)
    }

    /// The listed line for a product.
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines
            .iter()
            .find(|l| l.listed && l.product.id == product_id)
    }

    pub fn line_by_no(&self, line_no: u32) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.line_no == line_no)
    }

    /// Quantity of a listed product in the cart (0 if absent).
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.line(product_id).map_or(0, |l| l.quantity)
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Drains every line, leaving the cart empty.
    pub fn take_lines(&mut self) -> Vec<CartLine> {
        std::mem::take(&mut self.lines)
    }

    /// Returns the number of lines in the cart.
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Calculates the grand total.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: u32, rupees: i64) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Product {}", id),
            "Test",
            Money::from_rupees(rupees),
        )
    }

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();
        let product = test_product(1, 10);

        assert_eq!(cart.add_item(&product, 2).quantity, 2);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.quantity_of(ProductId::new(1)), 2);
        assert_eq!(cart.total(), Money::from_rupees(20));
    }

    #[test]
    fn test_cart_add_same_product_increases_quantity() {
        let mut cart = Cart::new();
        let product = test_product(1, 10);

        let first = cart.add_item(&product, 2).line_no;
        let second = cart.add_item(&product, 3);
        assert_eq!(second.quantity, 5);
        assert_eq!(second.line_no, first);

        assert_eq!(cart.item_count(), 1); // Still one line
        assert_eq!(cart.quantity_of(product.id), 5);
    }

    #[test]
    fn test_cart_keeps_insertion_order() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(3, 1), 1);
        cart.add_item(&test_product(1, 1), 1);
        cart.add_item(&test_product(3, 1), 1);

        let ids: Vec<_> = cart.lines().iter().map(|l| l.product_id().get()).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_cart_refresh_reprices_line() {
        let mut cart = Cart::new();
        let mut product = test_product(1, 10);
        cart.add_item(&product, 2);

        product.price = Money::from_rupees(12);
        cart.refresh(&product);

        assert_eq!(cart.line(product.id).unwrap().product.price, Money::from_rupees(12));
        assert_eq!(cart.total(), Money::from_rupees(24));
    }

    #[test]
    fn test_delisted_line_is_never_merged() {
        let mut cart = Cart::new();
        let pen = test_product(1, 10);
        let old_line = cart.add_item(&pen, 2).line_no;

        assert_eq!(cart.delist(pen.id), 2);
        assert_eq!(cart.quantity_of(pen.id), 0);

        let marker = Product::new(pen.id, "Marker", "Office", Money::from_rupees(30));
        cart.refresh(&marker);
        let new_line = cart.add_item(&marker, 3).line_no;

        assert_ne!(new_line, old_line);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.line_by_no(old_line).unwrap().product.name, "Product 1");
        assert_eq!(cart.total(), Money::from_rupees(110));
    }

    #[test]
    fn test_cart_remove_quantity() {
        let mut cart = Cart::new();
        let product = test_product(1, 10);
        let line_no = cart.add_item(&product, 5).line_no;

        assert_eq!(cart.remove_quantity(line_no, 2), 2);
        assert_eq!(cart.quantity_of(product.id), 3);

        assert_eq!(cart.remove_quantity(line_no, 10), 3);
        assert!(cart.is_empty());

        assert_eq!(cart.remove_quantity(line_no, 1), 0);
    }

    #[test]
    fn test_cart_take_lines() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 10), 2);
        cart.add_item(&test_product(2, 40), 1);

        let lines = cart.take_lines();
        assert_eq!(lines.len(), 2);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }
}
