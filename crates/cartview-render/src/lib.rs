//! # cartview-render: Presentation for the State Snapshot
//!
//! Two stateless components, each available as text and HTML:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Component   Props              Text                 HTML               │
//! │  ─────────   ─────              ────                 ────               │
//! │  UserInfo    user_name: &str    Hello, {name}!       <div>…</div>       │
//! │  CartInfo    cart: &Cart        {name} ({q} x ${p})  <ul><li key>…      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Renderers receive an [`Observer`] explicitly. Pass
//! [`NoopObserver`](cartview_core::NoopObserver) when no instrumentation is
//! wanted.
//!
//! ## Example
//! ```rust
//! use cartview_core::sample::sample_state;
//! use cartview_core::NoopObserver;
//! use cartview_render::{render_page, Format};
//!
//! let page = render_page(&sample_state(), Format::Text, &NoopObserver).unwrap();
//! assert_eq!(page, "Hello, Grzenio!\nCup (5 x $1)\nPen (1 x $20)\n");
//! ```

pub mod error;
pub mod html;
pub mod props;
pub mod text;

use cartview_core::{ObservedSelectors, Observer, State};
use tracing::debug;

pub use error::{RenderError, RenderResult};
pub use props::{CartInfoProps, UserInfoProps};

/// Output format for [`render_page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Html,
}

/// Renders the user greeting followed by the cart for `state`.
///
/// Props are read through [`ObservedSelectors`] so the observer sees the
/// selector calls as well as the two renders. Every line of the result ends
/// with a newline.
pub fn render_page(state: &State, format: Format, observer: &dyn Observer) -> RenderResult<String> {
    let select = ObservedSelectors::new(observer);
    let user = UserInfoProps::from_state(state, &select);
    let cart = CartInfoProps::from_state(state, &select);

    debug!(?format, items = cart.cart.item_count(), "Rendering page");

    let mut page = String::new();
    match format {
        Format::Text => {
            page.push_str(&text::render_user_info(&user, observer));
            page.push('\n');
            for line in text::render_cart_info(&cart, observer) {
                page.push_str(&line);
                page.push('\n');
            }
        }
        Format::Html => {
            page.push_str(html::render_user_info(&user, observer)?.trim_end());
            page.push('\n');
            page.push_str(html::render_cart_info(&cart, observer)?.trim_end());
            page.push('\n');
        }
    }

    Ok(page)
}
