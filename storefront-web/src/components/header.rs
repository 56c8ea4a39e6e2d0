use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Total units across all cart lines, shown in the nav badge.
    pub cart_count: i32,
}

/// Site banner with the navigation links and the live cart count.
///
/// Plain anchors rather than router links: the storefront started life as a
/// set of static pages and every path renders standalone.
#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ "Skip to content" }</a>
            <div class="header-content">
                <nav id="navigation" aria-label="Main">
                    <a href="/">{ "Shop" }</a>
                    <a href="/cart" class="cart-link" data-testid="cart-count">
                        { format!("Cart ({})", p.cart_count) }
                    </a>
                </nav>
            </div>
            <div aria-live="polite" aria-atomic="true" class="sr-only" id="cart-status"></div>
        </header>
    }
}
