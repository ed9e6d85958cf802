//! # HTML Rendering
//!
//! Askama templates under `templates/`:
//!
//! ```html
//! <div>Hello, Grzenio!</div>
//!
//! <ul>
//!   <li data-key="Cup">Cup (5 x $1)</li>
//!   <li data-key="Pen">Pen (1 x $20)</li>
//! </ul>
//! ```
//!
//! Names are HTML-escaped by the template engine. The item name doubles as
//! the list key, which is why names are unique within a cart.

use askama::Template;
use cartview_core::{Observer, Probe};

use crate::error::RenderResult;
use crate::props::{CartInfoProps, UserInfoProps};
use crate::text::cart_line;

#[derive(Template)]
#[template(path = "user_info.html")]
struct UserInfoHtml<'a> {
    user_name: &'a str,
}

#[derive(Template)]
#[template(path = "cart_info.html")]
struct CartInfoHtml<'a> {
    lines: Vec<CartLineView<'a>>,
}

struct CartLineView<'a> {
    key: &'a str,
    text: String,
}

/// Renders the greeting as a `<div>`.
pub fn render_user_info(props: &UserInfoProps<'_>, observer: &dyn Observer) -> RenderResult<String> {
    observer.observe(Probe::RenderUserInfo);
    Ok(UserInfoHtml {
        user_name: props.user_name,
    }
    .render()?)
}

/// Renders the cart as a `<ul>` with one keyed `<li>` per item.
pub fn render_cart_info(props: &CartInfoProps<'_>, observer: &dyn Observer) -> RenderResult<String> {
    observer.observe(Probe::RenderCartInfo);
    let lines = props
        .cart
        .items()
        .iter()
        .map(|item| CartLineView {
            key: item.name(),
            text: cart_line(item),
        })
        .collect();

    Ok(CartInfoHtml { lines }.render()?)
}
