//! # Error Types
//!
//! Domain-specific error types for kirana-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kirana-core errors (this file)                                        │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Console errors (in app)                                               │
//! │  └── ConsoleError     - What the menu loop reports                     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ConsoleError → printed message    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (id, available quantity, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Every variant is recoverable: the console reports it and returns to the
/// enclosing menu.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No product with this id exists in the catalog.
    #[error("Product not found with ID: {0}")]
    ProductNotFound(ProductId),

    /// A product with this id already exists.
    ///
    /// Creating a product never overwrites an existing one.
    #[error("Product with ID {0} already exists")]
    DuplicateProduct(ProductId),

    /// Category position outside `[1, count]`.
    #[error("Invalid choice: {choice} (expected 1 to {count})")]
    InvalidCategoryChoice { choice: i64, count: usize },

    /// Product exists but is not listed under the browsed category.
    #[error("Invalid Product ID: {id} is not in {category}")]
    NotInCategory { id: ProductId, category: String },

    /// Quantity is non-positive or exceeds stock.
    ///
    /// ## User Workflow
    /// ```text
    /// Add to Cart (qty: 25)
    ///      │
    ///      ▼
    /// Check stock: available=20
    ///      │
    ///      ▼
    /// InvalidQuantity { requested: 25, available: 20 }
    ///      │
    ///      ▼
    /// Console shows: "Invalid quantity. Available: 20"
    /// ```
    #[error("Invalid quantity {requested}. Available: {available}")]
    InvalidQuantity { requested: i64, available: u32 },

    /// Checkout was attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// The undo log has no entries.
    #[error("No actions to undo")]
    NothingToUndo,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., malformed price).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidQuantity {
            requested: 25,
            available: 20,
        };
        assert_eq!(err.to_string(), "Invalid quantity 25. Available: 20");

        let err = CoreError::ProductNotFound(ProductId::new(42));
        assert_eq!(err.to_string(), "Product not found with ID: 42");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::TooLong {
            field: "category".to_string(),
            max: 50,
        };
        assert_eq!(err.to_string(), "category must be at most 50 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
