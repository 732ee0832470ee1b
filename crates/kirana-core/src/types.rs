//! # Domain Types
//!
//! Core domain types used throughout Kirana POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Bill       │   │ PurchaseRecord  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  id (UUID)      │   │  bill_id (FK)   │       │
//! │  │  name           │   │  lines          │   │  name, category │       │
//! │  │  category       │   │  total          │   │  quantity       │       │
//! │  │  price (Money)  │   │  created_at     │   │  amount         │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! A product is identified solely by its numeric `id`. Two `Product` values
//! with the same id compare equal even when name, category or price differ.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Product Id
// =============================================================================

/// Numeric product identifier entered by the operator.
///
/// Always positive: `0` is reserved as "go back" in the browse flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for ProductId {
    type Error = ValidationError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        if raw <= 0 {
            return Err(ValidationError::MustBePositive {
                field: "product id".to_string(),
            });
        }
        u32::try_from(raw)
            .map(ProductId)
            .map_err(|_| ValidationError::InvalidFormat {
                field: "product id".to_string(),
                reason: format!("must be at most {}", u32::MAX),
            })
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Stable identity.
    pub id: ProductId,

    /// Display name shown in listings and on the bill.
    pub name: String,

    /// Category label used for browsing.
    pub category: String,

    /// Unit price.
    pub price: Money,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Money,
    ) -> Self {
        Product {
            id,
            name: name.into(),
            category: category.into(),
            price,
        }
    }

    /// Case-insensitive substring match on the name.
    ///
    /// `needle` must already be lowercase.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// `[1] Pen (Stationery) - ₹10.00`
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}) - {}",
            self.id, self.name, self.category, self.price
        )
    }
}

/// A product together with its current stock level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockedProduct {
    pub product: Product,
    pub stock: u32,
}

// =============================================================================
// Product Update
// =============================================================================

/// Partial update for an existing product.
///
/// `None` leaves the field unchanged. The console maps an empty name or
/// category and a non-positive price to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Money>,
}

impl ProductUpdate {
    /// Builds an update from raw operator input.
    ///
    /// Blank text and non-positive prices mean "keep current".
    pub fn from_input(name: &str, category: &str, price: Option<Money>) -> Self {
        let keep_blank = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        ProductUpdate {
            name: keep_blank(name),
            category: keep_blank(category),
            price: price.filter(Money::is_positive),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.category.is_none() && self.price.is_none()
    }
}

// =============================================================================
// Purchase Record
// =============================================================================

/// One billed cart line, frozen at checkout time.
///
/// Uses the snapshot pattern: later edits to the product do not change it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// Bill this line belongs to.
    pub bill_id: Uuid,
    pub product_id: ProductId,
    /// Product name at time of sale (frozen).
    pub name: String,
    /// Product category at time of sale (frozen).
    pub category: String,
    pub quantity: u32,
    /// Unit price at time of sale (frozen).
    pub unit_price: Money,
    /// `unit_price × quantity`.
    pub amount: Money,
    pub purchased_at: DateTime<Utc>,
}

/// `Pen x5 = ₹50.00`
impl fmt::Display for PurchaseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x{} = {}", self.name, self.quantity, self.amount)
    }
}

// =============================================================================
// Bill
// =============================================================================

/// The result of a checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    pub id: Uuid,
    /// Billed lines in cart insertion order.
    pub lines: Vec<PurchaseRecord>,
    pub total: Money,
    pub created_at: DateTime<Utc>,
}

impl Bill {
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_identity_is_id_only() {
        let a = Product::new(ProductId::new(1), "Pen", "Stationery", Money::from_rupees(10));
        let b = Product::new(ProductId::new(1), "Gel Pen", "Office", Money::from_rupees(25));
        let c = Product::new(ProductId::new(2), "Pen", "Stationery", Money::from_rupees(10));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_product_display() {
        let pen = Product::new(ProductId::new(1), "Pen", "Stationery", Money::from_rupees(10));
        assert_eq!(pen.to_string(), "[1] Pen (Stationery) - ₹10.00");
    }

    #[test]
    fn test_product_id_from_raw() {
        assert_eq!(ProductId::try_from(7).unwrap(), ProductId::new(7));
        assert!(ProductId::try_from(0).is_err());
        assert!(ProductId::try_from(-3).is_err());
        assert!(ProductId::try_from(i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn test_update_from_input_keeps_blank_fields() {
        let update = ProductUpdate::from_input("", "  ", Some(Money::zero()));
        assert!(update.is_empty());

        let update = ProductUpdate::from_input(" Gel Pen ", "", Some(Money::from_rupees(12)));
        assert_eq!(update.name.as_deref(), Some("Gel Pen"));
        assert_eq!(update.category, None);
        assert_eq!(update.price, Some(Money::from_rupees(12)));
    }

    #[test]
    fn test_purchase_record_display() {
        let record = PurchaseRecord {
            bill_id: Uuid::nil(),
            product_id: ProductId::new(1),
            name: "Pen".to_string(),
            category: "Stationery".to_string(),
            quantity: 5,
            unit_price: Money::from_rupees(10),
            amount: Money::from_rupees(50),
            purchased_at: Utc::now(),
        };
        assert_eq!(record.to_string(), "Pen x5 = ₹50.00");
    }

    #[test]
    fn test_product_serializes_id_transparently() {
        let pen = Product::new(ProductId::new(1), "Pen", "Stationery", Money::from_rupees(10));
        let json = serde_json::to_value(&pen).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["price"], 1000);
    }
}
