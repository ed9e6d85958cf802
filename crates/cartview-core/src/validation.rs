//! # Validation Module
//!
//! Rules every [`State`](crate::State) satisfies once constructed.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Types                                                        │
//! │  ├── quantity / age are u32 (never negative)                           │
//! │  └── updatedAt is a parsed DateTime<Utc>                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Snapshot loader                                              │
//! │  └── every required field present (MalformedState otherwise)           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE, called by the constructors in `types`           │
//! │  ├── names non-empty, bounded, no control characters                   │
//! │  ├── prices and quantities within range                                │
//! │  └── item names unique, item count bounded                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cartview_core::validation::{validate_item_name, validate_unique_names};
//!
//! assert!(validate_item_name("Cup").is_ok());
//! assert!(validate_item_name("   ").is_err());
//! assert!(validate_unique_names(["Cup", "Pen"]).is_ok());
//! assert!(validate_unique_names(["Cup", "Cup"]).is_err());
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length of a user or item name, in characters.
pub const MAX_NAME_LEN: usize = 200;

/// Largest unit price, in cents ($100,000,000.00).
pub const MAX_PRICE_CENTS: i64 = 10_000_000_000;

/// Largest quantity of a single cart item.
pub const MAX_ITEM_QUANTITY: u32 = 9_999;

/// Largest number of distinct items in one cart.
///
/// Together with the two bounds above this keeps `Cart::subtotal` far below
/// `i64::MAX` (at most 10^17 cents).
pub const MAX_CART_ITEMS: usize = 1_000;

// =============================================================================
// String Validators
// =============================================================================

fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    // Rendered lines are one per item; a newline would split one.
    if name.chars().any(char::is_control) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must not contain control characters".to_string(),
        });
    }

    Ok(())
}

/// Validates a cart item name.
///
/// ## Rules
/// - Must not be empty or whitespace only
/// - At most 200 characters
/// - No control characters (newlines, tabs, escapes)
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    validate_name("item.name", name)
}

/// Validates a user display name.
///
/// Same rules as [`validate_item_name`].
pub fn validate_user_name(name: &str) -> ValidationResult<()> {
    validate_name("user.name", name)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Zero or greater (free items are allowed)
/// - At most [`MAX_PRICE_CENTS`]
///
/// ## Example
/// ```rust
/// use cartview_core::money::Money;
/// use cartview_core::validation::{validate_price, MAX_PRICE_CENTS};
///
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-1)).is_err());
/// assert!(validate_price(Money::from_cents(MAX_PRICE_CENTS + 1)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() || price.cents() > MAX_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "item.price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }
    Ok(())
}

/// Validates an item quantity. Zero is allowed.
pub fn validate_quantity(quantity: u32) -> ValidationResult<()> {
    if quantity > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "item.quantity".to_string(),
            min: 0,
            max: i64::from(MAX_ITEM_QUANTITY),
        });
    }
    Ok(())
}

/// Validates the number of items in one cart.
pub fn validate_item_count(count: usize) -> ValidationResult<()> {
    if count > MAX_CART_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "cart.items".to_string(),
            min: 0,
            max: MAX_CART_ITEMS as i64,
        });
    }
    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Checks that every name appears at most once.
///
/// Comparison is exact (case-sensitive, untrimmed), matching how the names
/// are used as display keys. Reports the first repeated name.
pub fn validate_unique_names<'a, I>(names: I) -> ValidationResult<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(ValidationError::Duplicate {
                field: "item.name".to_string(),
                value: name.to_string(),
            });
        }
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
