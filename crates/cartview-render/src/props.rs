//! # Component Props
//!
//! Typed inputs for the two components. Each is a borrowed view into a
//! [`State`]; building one never copies the underlying data.

use cartview_core::{Cart, ObservedSelectors, Observer, State};

/// Input for the user greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserInfoProps<'a> {
    pub user_name: &'a str,
}

impl<'a> UserInfoProps<'a> {
    pub fn new(user_name: &'a str) -> Self {
        UserInfoProps { user_name }
    }

    /// Reads the user name through the given selectors.
    pub fn from_state<O: Observer>(state: &'a State, select: &ObservedSelectors<O>) -> Self {
        UserInfoProps {
            user_name: select.user_name(state),
        }
    }
}

/// Input for the cart line list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartInfoProps<'a> {
    pub cart: &'a Cart,
}

impl<'a> CartInfoProps<'a> {
    pub fn new(cart: &'a Cart) -> Self {
        CartInfoProps { cart }
    }

    /// Reads the cart through the given selectors.
    pub fn from_state<O: Observer>(state: &'a State, select: &ObservedSelectors<O>) -> Self {
        CartInfoProps {
            cart: select.cart(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartview_core::sample::sample_state;
    use cartview_core::{CountingObserver, NoopObserver, Probe};

    #[test]
    fn test_props_borrow_from_state() {
        let state = sample_state();
        let select = ObservedSelectors::new(NoopObserver);

        let user = UserInfoProps::from_state(&state, &select);
        let cart = CartInfoProps::from_state(&state, &select);

        assert_eq!(user, UserInfoProps::new("Grzenio"));
        assert!(std::ptr::eq(cart.cart, state.cart()));
    }

    #[test]
    fn test_props_go_through_selectors() {
        let state = sample_state();
        let counter = CountingObserver::new();
        let select = ObservedSelectors::new(&counter);

        UserInfoProps::from_state(&state, &select);
        CartInfoProps::from_state(&state, &select);

        assert_eq!(counter.count(Probe::SelectUserName), 1);
        assert_eq!(counter.count(Probe::SelectCart), 1);
    }
}
