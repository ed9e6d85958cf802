//! # Selectors
//!
//! Pure projections out of a [`State`].
//!
//! ```text
//! State ──► select_user ──────► &User ──► select_user_name ──► &str
//!   │
//!   └────► select_cart ──────► &Cart ──► select_cart_items ──► &[CartItem]
//! ```
//!
//! Every selector borrows from the state it is given: no copies, no caching,
//! no side effects. Calling one twice on the same state returns the same
//! reference. Derived values such as [`select_cart_totals`] are recomputed on
//! every call.
//!
//! For call counting or logging, wrap an [`Observer`] in
//! [`ObservedSelectors`]; the free functions stay silent.
//!
//! ## Example
//! ```rust
//! use cartview_core::sample::sample_state;
//! use cartview_core::selectors::{select_cart_items, select_user_name};
//!
//! let state = sample_state();
//! assert_eq!(select_user_name(&state), "Grzenio");
//! assert_eq!(select_cart_items(&state).len(), 2);
//! ```

use chrono::{DateTime, Utc};

use crate::observe::{Observer, Probe};
use crate::types::{Cart, CartItem, CartTotals, State, User};

// =============================================================================
// Plain Selectors
// =============================================================================

/// Returns the state's user.
#[inline]
pub fn select_user(state: &State) -> &User {
    state.user()
}

/// Returns the user's display name.
#[inline]
pub fn select_user_name(state: &State) -> &str {
    select_user(state).name()
}

#[inline]
pub fn select_user_age(state: &State) -> u32 {
    select_user(state).age()
}

/// Returns the state's cart.
#[inline]
pub fn select_cart(state: &State) -> &Cart {
    state.cart()
}

/// Returns the cart items in their stored order. Empty carts give an empty
/// slice.
#[inline]
pub fn select_cart_items(state: &State) -> &[CartItem] {
    select_cart(state).items()
}

#[inline]
pub fn select_cart_updated_at(state: &State) -> DateTime<Utc> {
    select_cart(state).updated_at()
}

/// Summarises the cart. O(n) in the number of items, recomputed each call.
pub fn select_cart_totals(state: &State) -> CartTotals {
    CartTotals::from(select_cart(state))
}

// =============================================================================
// Observed Selectors
// =============================================================================

/// The selectors above, reporting each call to an injected observer first.
///
/// ## Usage
/// ```rust
/// use cartview_core::observe::{CountingObserver, Probe};
/// use cartview_core::sample::sample_state;
/// use cartview_core::selectors::ObservedSelectors;
///
/// let state = sample_state();
/// let counter = CountingObserver::new();
/// let select = ObservedSelectors::new(&counter);
///
/// assert_eq!(select.user_name(&state), "Grzenio");
/// assert_eq!(counter.count(Probe::SelectUserName), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ObservedSelectors<O> {
    observer: O,
}

impl<O: Observer> ObservedSelectors<O> {
    pub fn new(observer: O) -> Self {
        ObservedSelectors { observer }
    }

    /// The wrapped observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn user<'s>(&self, state: &'s State) -> &'s User {
        self.observer.observe(Probe::SelectUser);
        select_user(state)
    }

    pub fn user_name<'s>(&self, state: &'s State) -> &'s str {
        self.observer.observe(Probe::SelectUserName);
        select_user_name(state)
    }

    pub fn user_age(&self, state: &State) -> u32 {
        self.observer.observe(Probe::SelectUserAge);
        select_user_age(state)
    }

    pub fn cart<'s>(&self, state: &'s State) -> &'s Cart {
        self.observer.observe(Probe::SelectCart);
        select_cart(state)
    }

    pub fn cart_items<'s>(&self, state: &'s State) -> &'s [CartItem] {
        self.observer.observe(Probe::SelectCartItems);
        select_cart_items(state)
    }

    pub fn cart_updated_at(&self, state: &State) -> DateTime<Utc> {
        self.observer.observe(Probe::SelectCartUpdatedAt);
        select_cart_updated_at(state)
    }

    pub fn cart_totals(&self, state: &State) -> CartTotals {
        self.observer.observe(Probe::SelectCartTotals);
        select_cart_totals(state)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::observe::{CountingObserver, NoopObserver};
    use crate::sample::sample_state;
    use chrono::TimeZone;

    fn state_with_items(items: Vec<CartItem>) -> State {
        State::new(
            User::new("Ada", 36).unwrap(),
            Cart::new(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(), items).unwrap(),
        )
    }

    #[test]
    fn test_selectors_return_state_fields() {
        let state = sample_state();

        assert_eq!(select_user(&state), state.user());
        assert_eq!(select_cart(&state), state.cart());
        assert_eq!(select_user_name(&state), state.user().name());
        assert_eq!(select_cart_items(&state), state.cart().items());
        assert_eq!(select_user_age(&state), 42);
        assert_eq!(select_cart_updated_at(&state), state.cart().updated_at());
    }

    #[test]
    fn test_selectors_borrow_without_copying() {
        let state = sample_state();

        assert!(std::ptr::eq(select_user(&state), state.user()));
        assert!(std::ptr::eq(select_cart(&state), state.cart()));
        assert!(std::ptr::eq(
            select_cart_items(&state).as_ptr(),
            state.cart().items().as_ptr()
        ));
    }

    #[test]
    fn test_selectors_are_idempotent() {
        let state = sample_state();

        assert_eq!(select_user(&state), select_user(&state));
        assert_eq!(select_user_name(&state), select_user_name(&state));
        assert_eq!(select_cart(&state), select_cart(&state));
        assert_eq!(select_cart_items(&state), select_cart_items(&state));
        assert_eq!(select_cart_totals(&state), select_cart_totals(&state));
    }

    #[test]
    fn test_sample_scenario() {
        let state = sample_state();

        assert_eq!(select_user_name(&state), "Grzenio");

        let items = select_cart_items(&state);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name(), "Cup");
        assert_eq!(items[0].quantity(), 5);
        assert_eq!(items[0].price(), Money::from_dollars(1));
        assert_eq!(items[1].name(), "Pen");
        assert_eq!(items[1].quantity(), 1);
        assert_eq!(items[1].price(), Money::from_dollars(20));
    }

    #[test]
    fn test_cart_items_preserve_order() {
        let names = ["Zebra", "Apple", "Mango"];
        let items = names
            .iter()
            .map(|n| CartItem::new(*n, 1, Money::from_dollars(1)).unwrap())
            .collect();
        let state = state_with_items(items);

        let selected: Vec<&str> = select_cart_items(&state).iter().map(CartItem::name).collect();
        assert_eq!(selected, names);
    }

    #[test]
    fn test_empty_cart_selects_empty_slice() {
        let state = state_with_items(Vec::new());
        assert!(select_cart_items(&state).is_empty());
        assert_eq!(select_cart_totals(&state).item_count, 0);
    }

    #[test]
    fn test_cart_totals() {
        let totals = select_cart_totals(&sample_state());
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total_quantity, 6);
        assert_eq!(totals.subtotal, Money::from_dollars(25));
    }

    #[test]
    fn test_observed_selectors_report_each_call() {
        let state = sample_state();
        let counter = CountingObserver::new();
        let select = ObservedSelectors::new(&counter);

        assert_eq!(select.user(&state), select_user(&state));
        assert_eq!(select.user_name(&state), "Grzenio");
        assert_eq!(select.user_age(&state), 42);
        assert_eq!(select.cart(&state), select_cart(&state));
        assert_eq!(select.cart_items(&state), select_cart_items(&state));
        select.cart_items(&state);
        select.cart_updated_at(&state);
        select.cart_totals(&state);

        assert_eq!(counter.count(Probe::SelectUser), 1);
        assert_eq!(counter.count(Probe::SelectUserName), 1);
        assert_eq!(counter.count(Probe::SelectUserAge), 1);
        assert_eq!(counter.count(Probe::SelectCart), 1);
        assert_eq!(counter.count(Probe::SelectCartItems), 2);
        assert_eq!(counter.count(Probe::SelectCartUpdatedAt), 1);
        assert_eq!(counter.count(Probe::SelectCartTotals), 1);
        // nested plain calls are not reported
        assert_eq!(counter.total(), 8);
    }

    #[test]
    fn test_observed_selectors_with_noop_match_plain() {
        let state = sample_state();
        let select = ObservedSelectors::new(NoopObserver);
        assert!(std::ptr::eq(select.cart(&state), select_cart(&state)));
        assert_eq!(select.user_name(&state), select_user_name(&state));
    }
}
