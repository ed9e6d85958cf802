//! Sample state used by the bootstrap binary and tests.

use chrono::{TimeZone, Utc};

use crate::money::Money;
use crate::types::{Cart, CartItem, State, User};

/// Builds the demo snapshot.
///
/// ```text
/// user:  Grzenio, 42
/// cart:  updated 2018-10-19 10:39 UTC
///        Cup  5 x $1
///        Pen  1 x $20
/// ```
///
/// Returns a fresh value on every call; callers own it and pass it by
/// reference.
pub fn sample_state() -> State {
    let updated_at = Utc
        .with_ymd_and_hms(2018, 10, 19, 10, 39, 0)
        .single()
        .unwrap_or_default();

    // Literal data that already satisfies every rule in `validation`,
    // so the checked constructors are skipped.
    let items = vec![
        CartItem::from_parts("Cup", 5, Money::from_dollars(1)),
        CartItem::from_parts("Pen", 1, Money::from_dollars(20)),
    ];

    State::new(
        User::from_parts("Grzenio", 42),
        Cart::from_parts(updated_at, items),
    )
}
