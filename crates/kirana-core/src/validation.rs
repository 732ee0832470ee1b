//! # Validation Module
//!
//! Input validation for operator-entered fields.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console prompts                                              │
//! │  ├── Parse numbers and prices from text                                │
//! │  └── Immediate "Invalid input." feedback                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Business rule validation (names, quantities, prices)              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Shop operations                                              │
//! │  └── Stock and identity checks against current state                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kirana_core::validation::{validate_product_name, validate_quantity};
//!
//! assert!(validate_product_name("Notebook").is_ok());
//! assert_eq!(validate_quantity(5, 20).unwrap(), 5);
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::{MAX_CATEGORY_LEN, MAX_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

fn validate_label(field: &str, value: &str, max: usize) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(value.to_string())
}

/// Validates a product name and returns it trimmed.
///
/// ## Rules
/// - Must not be empty
/// - At most `MAX_NAME_LEN` characters
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    validate_label("name", name, MAX_NAME_LEN)
}

/// Validates a category label and returns it trimmed.
pub fn validate_category(category: &str) -> ValidationResult<String> {
    validate_label("category", category, MAX_CATEGORY_LEN)
}

/// Normalizes a name search query.
///
/// Lowercases only: whitespace is part of the query, so `" "` finds names
/// with a space in them. An empty query matches every product.
pub fn normalize_search_query(query: &str) -> String {
    query.to_lowercase()
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a requested cart quantity against available stock.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed `available`
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Browse: Add Item                                                       │
/// │                                                                         │
/// │  Operator enters quantity: 5                                           │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_quantity(5, 20) ← THIS FUNCTION                              │
/// │       │                                                                 │
/// │       ├── qty <= 0?        → "Invalid quantity. Available: 20"         │
/// │       ├── qty > available? → "Invalid quantity. Available: 20"         │
/// │       │                                                                 │
/// │       └── OK → reserve stock, grow cart line                           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_quantity(requested: i64, available: u32) -> CoreResult<u32> {
    if requested <= 0 || requested > i64::from(available) {
        return Err(CoreError::InvalidQuantity {
            requested,
            available,
        });
    }

    // Bounded by `available`, so the conversion cannot fail.
    u32::try_from(requested).map_err(|_| CoreError::InvalidQuantity {
        requested,
        available,
    })
}

/// Validates a product price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price(price: Money) -> ValidationResult<Money> {
    if price.is_negative() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(price)
}

// =============================================================================
// Unit Tests
// =============================================================================
