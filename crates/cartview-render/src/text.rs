//! # Plain Text Rendering
//!
//! ```text
//! UserInfo  ──► "Hello, Grzenio!"
//! CartInfo  ──► ["Cup (5 x $1)", "Pen (1 x $20)"]
//! ```

use cartview_core::{CartItem, Observer, Probe};

use crate::props::{CartInfoProps, UserInfoProps};

/// Formats one cart line: `{name} ({quantity} x {price})`.
///
/// Whole-dollar prices drop their cents (`$1`), others keep two decimals
/// (`$1.50`).
pub fn cart_line(item: &CartItem) -> String {
    format!(
        "{} ({} x {})",
        item.name(),
        item.quantity(),
        item.price().compact()
    )
}

/// Renders the greeting for the current user.
pub fn render_user_info(props: &UserInfoProps<'_>, observer: &dyn Observer) -> String {
    observer.observe(Probe::RenderUserInfo);
    format!("Hello, {}!", props.user_name)
}

/// Renders one line per cart item, in cart order. An empty cart yields no
/// lines.
pub fn render_cart_info(props: &CartInfoProps<'_>, observer: &dyn Observer) -> Vec<String> {
    observer.observe(Probe::RenderCartInfo);
    props.cart.items().iter().map(cart_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartview_core::sample::sample_state;
    use cartview_core::{Cart, CountingObserver, Money, NoopObserver};

    #[test]
    fn test_render_user_info() {
        let props = UserInfoProps::new("Grzenio");
        assert_eq!(render_user_info(&props, &NoopObserver), "Hello, Grzenio!");
    }

    #[test]
    fn test_render_sample_cart() {
        let state = sample_state();
        let lines = render_cart_info(&CartInfoProps::new(state.cart()), &NoopObserver);
        assert_eq!(lines, ["Cup (5 x $1)", "Pen (1 x $20)"]);
    }

    #[test]
    fn test_render_empty_cart() {
        let cart = Cart::empty(sample_state().cart().updated_at());
        let lines = render_cart_info(&CartInfoProps::new(&cart), &NoopObserver);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_cart_line_with_cents() {
        let item = CartItem::new("Mug", 2, Money::from_cents(350)).unwrap();
        assert_eq!(cart_line(&item), "Mug (2 x $3.50)");
    }

    #[test]
    fn test_each_render_is_observed_once() {
        let state = sample_state();
        let counter = CountingObserver::new();

        render_cart_info(&CartInfoProps::new(state.cart()), &counter);
        render_cart_info(&CartInfoProps::new(state.cart()), &counter);
        render_user_info(&UserInfoProps::new("Grzenio"), &counter);

        assert_eq!(counter.count(Probe::RenderCartInfo), 2);
        assert_eq!(counter.count(Probe::RenderUserInfo), 1);
    }
}
