//! # Snapshot Documents
//!
//! JSON interchange format for [`State`].
//!
//! ## Document Format
//! ```json
//! {
//!   "user": { "name": "Grzenio", "age": 42 },
//!   "cart": {
//!     "updatedAt": "2018-10-19T10:39:00Z",
//!     "items": [
//!       { "name": "Cup", "quantity": 5, "price": 1 },
//!       { "name": "Pen", "quantity": 1, "price": 20 }
//!     ]
//!   }
//! }
//! ```
//!
//! ## Loading Flow
//! ```text
//! &str ──► serde_json ──► *Doc (all fields optional)
//!                │                │
//!                ▼                ▼
//!        InvalidSnapshot    require() each field ──► MalformedState { field }
//!                                 │
//!                                 ▼
//!                    CartItem::new / Cart::new / User::new
//!                                 │
//!                                 ▼
//!                               State
//! ```
//!
//! Prices are dollar numbers in the document and cents everywhere else. The
//! frontend payload produced by `Serialize` on the domain types is a
//! different shape (`priceCents`); this module is the only place that reads
//! or writes the document format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::{self, Money};
use crate::types::{Cart, CartItem, State, User};

// =============================================================================
// Document Types (input)
// =============================================================================

// Every field is optional so that a missing one is reported by path rather
// than by serde's generic "missing field" message.

#[derive(Debug, Deserialize)]
struct StateDoc {
    user: Option<UserDoc>,
    cart: Option<CartDoc>,
}

#[derive(Debug, Deserialize)]
struct UserDoc {
    name: Option<String>,
    age: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartDoc {
    updated_at: Option<DateTime<Utc>>,
    items: Option<Vec<ItemDoc>>,
}

#[derive(Debug, Deserialize)]
struct ItemDoc {
    name: Option<String>,
    quantity: Option<u32>,
    price: Option<f64>,
}

fn require<T>(value: Option<T>, field: impl FnOnce() -> String) -> CoreResult<T> {
    value.ok_or_else(|| CoreError::MalformedState { field: field() })
}

// =============================================================================
// Document Types (output)
// =============================================================================

#[derive(Serialize)]
struct StateOut<'a> {
    user: UserOut<'a>,
    cart: CartOut<'a>,
}

#[derive(Serialize)]
struct UserOut<'a> {
    name: &'a str,
    age: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CartOut<'a> {
    updated_at: DateTime<Utc>,
    items: Vec<ItemOut<'a>>,
}

#[derive(Serialize)]
struct ItemOut<'a> {
    name: &'a str,
    quantity: u32,
    #[serde(with = "money::dollars")]
    price: Money,
}

// =============================================================================
// Public API
// =============================================================================

/// Parses a snapshot document into a validated [`State`].
///
/// ## Errors
/// - `InvalidSnapshot`: not JSON, or a field has the wrong type
///   (e.g. a negative `quantity`)
/// - `MalformedState { field }`: a required field is absent or null
/// - `DuplicateItemName`, `NegativePrice`, `Validation`: the data breaks a
///   state invariant
///
/// ## Example
/// ```rust
/// use cartview_core::snapshot::parse_state;
/// use cartview_core::CoreError;
///
/// let err = parse_state(r#"{ "user": { "name": "A", "age": 1 } }"#).unwrap_err();
/// assert!(matches!(err, CoreError::MalformedState { ref field } if field == "cart"));
/// ```
pub fn parse_state(json: &str) -> CoreResult<State> {
    let doc: StateDoc = serde_json::from_str(json)?;

    let user_doc = require(doc.user, || "user".to_string())?;
    let cart_doc = require(doc.cart, || "cart".to_string())?;

    let user = User::new(
        require(user_doc.name, || "user.name".to_string())?,
        require(user_doc.age, || "user.age".to_string())?,
    )?;

    let updated_at = require(cart_doc.updated_at, || "cart.updatedAt".to_string())?;
    let item_docs = require(cart_doc.items, || "cart.items".to_string())?;

    let items = item_docs
        .into_iter()
        .enumerate()
        .map(|(i, item)| parse_item(i, item))
        .collect::<CoreResult<Vec<_>>>()?;

    let cart = Cart::new(updated_at, items)?;

    debug!(
        user = user.name(),
        items = cart.item_count(),
        "Parsed state snapshot"
    );

    Ok(State::new(user, cart))
}

fn parse_item(index: usize, doc: ItemDoc) -> CoreResult<CartItem> {
    let path = |field: &str| format!("cart.items[{}].{}", index, field);

    let name = require(doc.name, || path("name"))?;
    let quantity = require(doc.quantity, || path("quantity"))?;
    let dollars = require(doc.price, || path("price"))?;

    let price = money::dollars::from_f64(dollars).ok_or_else(|| ValidationError::InvalidFormat {
        field: path("price"),
        reason: format!("{} is not a representable amount", dollars),
    })?;

    CartItem::new(name, quantity, price)
}

/// Writes a [`State`] as a pretty-printed snapshot document.
///
/// Whole-dollar prices are written as integers, so the sample state
/// round-trips to the same text it was described with.
pub fn to_json(state: &State) -> CoreResult<String> {
    let user = state.user();
    let cart = state.cart();

    let out = StateOut {
        user: UserOut {
            name: user.name(),
            age: user.age(),
        },
        cart: CartOut {
            updated_at: cart.updated_at(),
            items: cart
                .items()
                .iter()
                .map(|item| ItemOut {
                    name: item.name(),
                    quantity: item.quantity(),
                    price: item.price(),
                })
                .collect(),
        },
    };

    Ok(serde_json::to_string_pretty(&out)?)
}

// =============================================================================
// Unit Tests
// =============================================================================
