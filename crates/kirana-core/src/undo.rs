//! # Undo Log
//!
//! Last-in-first-out record of cart additions.
//!
//! Each entry carries enough data (cart line, product id and quantity) for
//! the shop to reverse the addition: the quantity leaves that cart line and
//! returns to stock while the product is still listed.

use std::fmt;

use crate::types::ProductId;

/// One reversible cart addition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartAction {
    /// Cart line that received the units.
    pub line_no: u32,
    pub product_id: ProductId,
    /// Product name when the action happened, for display.
    pub name: String,
    pub quantity: u32,
}

/// `Added Pen x5`
impl fmt::Display for CartAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Added {} x{}", self.name, self.quantity)
    }
}

#[derive(Debug, Clone, Default)]
pub struct UndoLog {
    actions: Vec<CartAction>,
}

impl UndoLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: CartAction) {
        self.actions.push(action);
    }

    pub fn pop(&mut self) -> Option<CartAction> {
        self.actions.pop()
    }

    pub fn peek(&self) -> Option<&CartAction> {
        self.actions.last()
    }

    pub fn clear(&mut self) {
        self.actions.clear();
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(id: u32, qty: u32) -> CartAction {
        CartAction {
            line_no: id,
            product_id: ProductId::new(id),
            name: format!("Item {}", id),
            quantity: qty,
        }
    }

    #[test]
    fn test_lifo_order() {
        let mut log = UndoLog::new();
        log.push(action(1, 2));
        log.push(action(2, 3));

        assert_eq!(log.peek(), Some(&action(2, 3)));
        assert_eq!(log.pop(), Some(action(2, 3)));
        assert_eq!(log.pop(), Some(action(1, 2)));
        assert_eq!(log.pop(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(action(1, 5).to_string(), "Added Item 1 x5");
    }
}
