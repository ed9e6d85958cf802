//! # Money Module
//!
//! Provides the `Money` type for cart item prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Prices are stored and summed as i64 cents.                           │
//! │    Floats only appear at the snapshot boundary (JSON numbers) and are   │
//! │    rounded to the nearest cent exactly once.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cartview_core::money::Money;
//!
//! let price = Money::from_cents(2000); // $20.00
//! assert_eq!(price.to_string(), "$20.00");
//! assert_eq!(price.compact().to_string(), "$20");
//!
//! let line = price.multiply_quantity(3);
//! assert_eq!(line.cents(), 6000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: the type itself can hold negatives so that bad input
///   can be reported with its value; cart items reject them on construction
/// - **Single field tuple struct**: Zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use cartview_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole dollars.
    ///
    /// ## Example
    /// ```rust
    /// use cartview_core::money::Money;
    ///
    /// assert_eq!(Money::from_dollars(20).cents(), 2000);
    /// ```
    #[inline]
    pub const fn from_dollars(dollars: i64) -> Self {
        Money(dollars * 100)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use cartview_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Checks if the value is a whole number of dollars.
    #[inline]
    pub const fn is_whole_dollars(&self) -> bool {
        self.0 % 100 == 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use cartview_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }

    /// Returns a display adapter that drops `.00` on whole-dollar amounts.
    ///
    /// This is the format cart lines use: `$1`, `$20`, but `$1.50`.
    #[inline]
    pub const fn compact(&self) -> CompactMoney {
        CompactMoney(*self)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money with two decimals, e.g. `$10.99`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
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

impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Compact Display
// =============================================================================

/// Display adapter returned by [`Money::compact`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompactMoney(Money);

impl fmt::Display for CompactMoney {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let money = self.0;
        if !money.is_whole_dollars() {
            return write!(f, "{}", money);
        }
        let sign = if money.is_negative() { "-" } else { "" };
        write!(f, "{}${}", sign, money.dollars().abs())
    }
}

// =============================================================================
// Dollar Numbers (snapshot boundary)
// =============================================================================

/// Serde adapter for prices written as plain dollar numbers (`1`, `20`, `1.5`).
///
/// Whole amounts serialize as integers so documents keep their hand-written
/// shape. Fractions are rounded to the nearest cent on the way in.
pub mod dollars {
    use super::Money;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Largest magnitude (in cents) accepted from a float. Above 2^53 an f64
    /// no longer holds every whole cent.
    const MAX_CENTS: f64 = 9_000_000_000_000_000.0;

    /// Converts a dollar amount to Money, rounding to the nearest cent.
    ///
    /// Returns `None` for NaN, infinities, and amounts above 9 * 10^15 cents.
    /// This is only the float conversion limit; cart items apply the tighter
    /// [`MAX_PRICE_CENTS`](crate::validation::MAX_PRICE_CENTS) cap.
    pub fn from_f64(value: f64) -> Option<Money> {
        if !value.is_finite() {
            return None;
        }
        let cents = (value * 100.0).round();
        if cents.abs() > MAX_CENTS {
            return None;
        }
        Some(Money::from_cents(cents as i64))
    }

    pub fn serialize<S>(money: &Money, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if money.is_whole_dollars() {
            serializer.serialize_i64(money.dollars())
        } else {
            serializer.serialize_f64(money.cents() as f64 / 100.0)
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Money, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        from_f64(value).ok_or_else(|| D::Error::custom(format!("price {} is out of range", value)))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_compact_display() {
        assert_eq!(Money::from_dollars(1).compact().to_string(), "$1");
        assert_eq!(Money::from_dollars(20).compact().to_string(), "$20");
        assert_eq!(Money::from_cents(150).compact().to_string(), "$1.50");
        assert_eq!(Money::from_cents(5).compact().to_string(), "$0.05");
        assert_eq!(Money::zero().compact().to_string(), "$0");
        assert_eq!(Money::from_cents(-300).compact().to_string(), "-$3");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a * 3).cents(), 3000);

        let mut c = a;
        c += b;
        assert_eq!(c.cents(), 1500);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 250, 2000]
            .into_iter()
            .map(Money::from_cents)
            .sum();
        assert_eq!(total.cents(), 2350);

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_dollars_from_f64_rounds_to_cent() {
        assert_eq!(dollars::from_f64(1.0), Some(Money::from_cents(100)));
        assert_eq!(dollars::from_f64(0.1 + 0.2), Some(Money::from_cents(30)));
        assert_eq!(dollars::from_f64(19.999), Some(Money::from_cents(2000)));
        assert_eq!(dollars::from_f64(-2.5), Some(Money::from_cents(-250)));
        assert_eq!(dollars::from_f64(f64::NAN), None);
        assert_eq!(dollars::from_f64(f64::INFINITY), None);
        assert_eq!(dollars::from_f64(1e300), None);
    }

    #[derive(Serialize, Deserialize)]
    struct Priced {
        #[serde(with = "dollars")]
        price: Money,
    }

    #[test]
    fn test_dollars_serde_shape() {
        let whole = serde_json::to_string(&Priced {
            price: Money::from_dollars(20),
        })
        .unwrap();
        assert_eq!(whole, r#"{"price":20}"#);

        let fraction = serde_json::to_string(&Priced {
            price: Money::from_cents(150),
        })
        .unwrap();
        assert_eq!(fraction, r#"{"price":1.5}"#);

        let parsed: Priced = serde_json::from_str(r#"{"price":1.25}"#).unwrap();
        assert_eq!(parsed.price.cents(), 125);
    }
}
