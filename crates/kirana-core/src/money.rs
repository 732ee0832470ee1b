//! # Money Module
//!
//! Provides the `Money` type for handling rupee amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With f64 prices:                                                       │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise (1 rupee = 100 paise)                      │
//! │    ₹10.50 is stored as 1050 paise                                       │
//! │    Line totals and bill totals are exact integer sums                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kirana_core::money::Money;
//!
//! let price: Money = "10.50".parse().unwrap();
//! assert_eq!(price.paise(), 1050);
//!
//! let line_total = price.multiply_quantity(3);
//! assert_eq!(line_total.to_string(), "₹31.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;

use crate::error::ValidationError;

/// Symbol used by the `Display` impl.
pub const RUPEE_SYMBOL: &str = "₹";

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in paise (the smallest rupee unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction never wraps, even if a caller goes below zero
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support
///
/// ## Where Money Flows
/// ```text
/// Product.price ──► CartLine.product.price ──► CartLine.line_total ──► Bill.total
///                                                          │
///                                                          └──► PurchaseRecord.amount
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise.
    ///
    /// ## Example
    /// ```rust
    /// use kirana_core::money::Money;
    ///
    /// let price = Money::from_paise(1099); // ₹10.99
    /// assert_eq!(price.paise(), 1099);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from whole rupees.
    ///
    /// ## Example
    /// ```rust
    /// use kirana_core::money::Money;
    ///
    /// assert_eq!(Money::from_rupees(50_000).paise(), 5_000_000);
    /// ```
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * 100)
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    ///
    /// ## Example
    /// ```rust
    /// use kirana_core::money::Money;
    ///
    /// assert_eq!(Money::from_paise(1099).paise_part(), 99);
    /// assert_eq!(Money::from_paise(-550).paise_part(), 50);
    /// ```
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use kirana_core::money::Money;
    ///
    /// let unit_price = Money::from_rupees(10);
    /// assert_eq!(unit_price.multiply_quantity(5), Money::from_rupees(50));
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }

    /// Formats the amount with a caller-chosen currency symbol.
    ///
    /// The `Display` impl is `format_with(RUPEE_SYMBOL)`.
    pub fn format_with(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.rupees().abs(),
            self.paise_part()
        )
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses decimal rupee text such as `10`, `10.5` or `10.50`.
///
/// ## Rules
/// ```text
/// "40"      → 4000 paise
/// "0.5"     → 50 paise
/// "150.75"  → 15075 paise
/// "1.234"   → error (sub-paisa precision)
/// "-5"      → error (prices are never negative)
/// "abc"     → error
/// ```
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: reason.to_string(),
        };

        if text.is_empty() {
            return Err(ValidationError::Required {
                field: "price".to_string(),
            });
        }

        let (whole, frac) = match text.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (text, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid("expected a number like 10 or 10.50"));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid("expected a number like 10 or 10.50"));
        }
        if frac.len() > 2 {
            return Err(invalid("at most two decimal places"));
        }

        let rupees: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| invalid("amount is too large"))?
        };
        let paise: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid("bad paise"))? * 10,
            _ => frac.parse().map_err(|_| invalid("bad paise"))?,
        };

        rupees
            .checked_mul(100)
            .and_then(|p| p.checked_add(paise))
            .map(Money)
            .ok_or_else(|| invalid("amount is too large"))
    }
}

impl Money {
    /// Parses decimal text that may carry a leading minus sign.
    ///
    /// Used where a negative entry is meaningful input rather than a typo,
    /// e.g. the "keep current price" rule on product updates.
    pub fn parse_signed(s: &str) -> Result<Self, ValidationError> {
        match s.trim().strip_prefix('-') {
            Some(rest) => rest.parse::<Money>().map(|m| Money(-m.0)),
            None => s.parse(),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the amount with the rupee sign: `₹10.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(RUPEE_SYMBOL))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a cart quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
