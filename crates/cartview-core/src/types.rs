//! # Domain Types
//!
//! The immutable state tree read by selectors and renderers.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         State Snapshot                                  │
//! │                                                                         │
//! │                       ┌─────────────────┐                              │
//! │                       │      State      │                              │
//! │                       └────────┬────────┘                              │
//! │                  ┌─────────────┴─────────────┐                         │
//! │         ┌────────▼────────┐         ┌────────▼────────┐                │
//! │         │      User       │         │      Cart       │                │
//! │         │  ─────────────  │         │  ─────────────  │                │
//! │         │  name           │         │  updated_at     │                │
//! │         │  age (u32)      │         │  items ──────┐  │                │
//! │         └─────────────────┘         └──────────────┼──┘                │
//! │                                           ┌────────▼────────┐          │
//! │                                           │    CartItem     │ × n      │
//! │                                           │  name (unique)  │          │
//! │                                           │  quantity (u32) │          │
//! │                                           │  price (Money)  │          │
//! │                                           └─────────────────┘          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Read-Only Model
//! Fields are private and there are no setters. Values are built once
//! through the validating constructors below; after that they can only be
//! read, cloned, or compared structurally.

use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{
    validate_item_count, validate_item_name, validate_price, validate_quantity,
    validate_unique_names, validate_user_name,
};

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    name: String,
    quantity: u32,
    #[serde(rename = "priceCents")]
    price: Money,
}

impl CartItem {
    /// Creates a cart item.
    ///
    /// ## Errors
    /// - `Validation(Required | TooLong | InvalidFormat)` for a bad name
    /// - `NegativePrice` when `price` is below zero
    /// - `Validation(OutOfRange)` when `price` or `quantity` exceeds its cap
    ///
    /// ## Example
    /// ```rust
    /// use cartview_core::{CartItem, Money};
    ///
    /// let cup = CartItem::new("Cup", 5, Money::from_dollars(1)).unwrap();
    /// assert_eq!(cup.line_total().cents(), 500);
    /// ```
    pub fn new(name: impl Into<String>, quantity: u32, price: Money) -> CoreResult<Self> {
        let name = name.into();
        validate_item_name(&name)?;
        if price.is_negative() {
            return Err(CoreError::NegativePrice {
                item: name,
                cents: price.cents(),
            });
        }
        validate_price(price)?;
        validate_quantity(quantity)?;

        Ok(CartItem {
            name,
            quantity,
            price,
        })
    }

    /// Unchecked constructor for literal data inside the crate.
    pub(crate) fn from_parts(name: &str, quantity: u32, price: Money) -> Self {
        CartItem {
            name: name.to_string(),
            quantity,
            price,
        }
    }

    /// Display name, unique within its cart.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an ordered item list plus a last-updated timestamp.
///
/// ## Invariants
/// - Item names are unique (they key the rendered lines)
/// - Item order is the order given at construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    #[ts(as = "String")]
    updated_at: DateTime<Utc>,
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a cart, rejecting duplicate item names and oversized carts.
    pub fn new(updated_at: DateTime<Utc>, items: Vec<CartItem>) -> CoreResult<Self> {
        validate_item_count(items.len())?;
        if let Err(ValidationError::Duplicate { value, .. }) =
            validate_unique_names(items.iter().map(CartItem::name))
        {
            return Err(CoreError::DuplicateItemName { name: value });
        }

        Ok(Cart { updated_at, items })
    }

    pub(crate) fn from_parts(updated_at: DateTime<Utc>, items: Vec<CartItem>) -> Self {
        Cart { updated_at, items }
    }

    /// Creates a cart with no items.
    pub fn empty(updated_at: DateTime<Utc>) -> Self {
        Cart {
            updated_at,
            items: Vec::new(),
        }
    }

    #[inline]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Items in insertion order.
    #[inline]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Looks up an item by its exact name.
    pub fn find_item(&self, name: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Returns the number of distinct items in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of all line totals.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cart summary, computed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: u64,
    #[serde(rename = "subtotalCents")]
    pub subtotal: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal: cart.subtotal(),
        }
    }
}

// =============================================================================
// User
// =============================================================================

/// The signed-in user's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct User {
    name: String,
    age: u32,
}

impl User {
    /// Creates a user, rejecting an empty or oversized name.
    pub fn new(name: impl Into<String>, age: u32) -> CoreResult<Self> {
        let name = name.into();
        validate_user_name(&name)?;
        Ok(User { name, age })
    }

    pub(crate) fn from_parts(name: &str, age: u32) -> Self {
        User {
            name: name.to_string(),
            age,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn age(&self) -> u32 {
        self.age
    }
}

// =============================================================================
// State
// =============================================================================

/// The root snapshot: one user, one cart.
///
/// Built once by the caller (a test fixture or the app bootstrap) and passed
/// by reference to selectors and renderers. There is no global instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct State {
    user: User,
    cart: Cart,
}

impl State {
    /// Assembles a state from parts that are already valid.
    pub fn new(user: User, cart: Cart) -> Self {
        State { user, cart }
    }

    #[inline]
    pub fn user(&self) -> &User {
        &self.user
    }

    #[inline]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Splits the state back into its parts.
    pub fn into_parts(self) -> (User, Cart) {
        (self.user, self.cart)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
