//! # Console Error Type
//!
//! Unified error type for console commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Menu Loop                          │
//! │                                                                         │
//! │  Command Function                                                       │
//! │  Result<(), ConsoleError>                                               │
//! │         │                                                               │
//! │         ├── Core(CoreError)     ──► print user message, back to menu    │
//! │         ├── InvalidInput(text)  ──► "Invalid input.", back to menu      │
//! │         ├── UnknownId(raw)      ──► "Product not found ...", back       │
//! │         ├── EndOfInput          ──► farewell, loop ends                 │
//! │         └── Io(std::io::Error)  ──► propagates to main, exit status 1   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use kirana_core::{CoreError, ValidationError};
use thiserror::Error;

/// Errors produced while running a console command.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Business rule violation reported by kirana-core.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Text where a number or price was expected.
    #[error("invalid input: {0:?}")]
    InvalidInput(String),

    /// An id that can never name a product (zero, negative, too large).
    #[error("product not found with ID: {0}")]
    UnknownId(i64),

    /// Stdin was closed.
    #[error("end of input")]
    EndOfInput,

    /// Terminal read/write failure.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ValidationError> for ConsoleError {
    fn from(err: ValidationError) -> Self {
        ConsoleError::Core(CoreError::Validation(err))
    }
}

/// Machine-readable classification, used in log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NotFound,
    InvalidChoice,
    InvalidQuantity,
    Duplicate,
    Validation,
    Empty,
    EndOfInput,
    Io,
}

impl ConsoleError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ConsoleError::Core(err) => match err {
                CoreError::ProductNotFound(_) => ErrorCode::NotFound,
                CoreError::DuplicateProduct(_) => ErrorCode::Duplicate,
                CoreError::InvalidCategoryChoice { .. } | CoreError::NotInCategory { .. } => {
                    ErrorCode::InvalidChoice
                }
                CoreError::InvalidQuantity { .. } => ErrorCode::InvalidQuantity,
                CoreError::EmptyCart | CoreError::NothingToUndo => ErrorCode::Empty,
                CoreError::Validation(_) => ErrorCode::Validation,
            },
            ConsoleError::InvalidInput(_) => ErrorCode::Validation,
            ConsoleError::UnknownId(_) => ErrorCode::NotFound,
            ConsoleError::EndOfInput => ErrorCode::EndOfInput,
            ConsoleError::Io(_) => ErrorCode::Io,
        }
    }

    /// Whether the menu loop can report this error and carry on.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ConsoleError::EndOfInput | ConsoleError::Io(_))
    }

    /// The line shown to the operator.
    pub fn user_message(&self) -> String {
        match self {
            ConsoleError::Core(err) => match err {
                CoreError::ProductNotFound(id) => format!("Product not found with ID: {}", id),
                CoreError::DuplicateProduct(id) => {
                    format!("Product with ID {} already exists.", id)
                }
                CoreError::InvalidCategoryChoice { .. } => "Invalid choice.".to_string(),
                CoreError::NotInCategory { .. } => "Invalid Product ID.".to_string(),
                CoreError::InvalidQuantity { available, .. } => {
                    format!("Invalid quantity. Available: {}", available)
                }
                CoreError::EmptyCart => "Cart is empty.".to_string(),
                CoreError::NothingToUndo => "No actions to undo.".to_string(),
                CoreError::Validation(e) => format!("Invalid input: {}.", e),
            },
            ConsoleError::InvalidInput(_) => "Invalid input.".to_string(),
            ConsoleError::UnknownId(raw) => format!("Product not found with ID: {}", raw),
            ConsoleError::EndOfInput => "End of input.".to_string(),
            ConsoleError::Io(e) => format!("Console I/O failed: {}", e),
        }
    }
}

/// Convenience type alias for console command results.
pub type ConsoleResult<T> = Result<T, ConsoleError>;

#[cfg(test)]
mod tests {
    use super::*;
    use kirana_core::ProductId;

    #[test]
    fn test_quantity_message_reports_available() {
        let err = ConsoleError::from(CoreError::InvalidQuantity {
            requested: 30,
            available: 15,
        });
        assert_eq!(err.user_message(), "Invalid quantity. Available: 15");
        assert_eq!(err.code(), ErrorCode::InvalidQuantity);
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_not_found_distinct_from_invalid_choice() {
        let not_found = ConsoleError::from(CoreError::ProductNotFound(ProductId::new(9)));
        let invalid = ConsoleError::from(CoreError::InvalidCategoryChoice {
            choice: 4,
            count: 2,
        });
        assert_eq!(not_found.code(), ErrorCode::NotFound);
        assert_eq!(invalid.code(), ErrorCode::InvalidChoice);
        assert_eq!(invalid.user_message(), "Invalid choice.");
    }

    #[test]
    fn test_validation_message() {
        let err = ConsoleError::from(ValidationError::Required {
            field: "name".to_string(),
        });
        assert_eq!(err.user_message(), "Invalid input: name is required.");
    }

    #[test]
    fn test_end_of_input_is_terminal() {
        assert!(!ConsoleError::EndOfInput.is_recoverable());
        assert!(!ConsoleError::from(std::io::Error::other("closed")).is_recoverable());
    }
}
