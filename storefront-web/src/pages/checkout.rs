use storefront_cart::{Cart, CurrencyLabel, OrderSummary};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CheckoutPageProps {
    pub cart: Cart,
    /// True while the simulated order round trip is pending; disables the
    /// trigger and swaps its label for the busy text.
    pub placing: bool,
    pub on_place_order: Callback<()>,
}

/// Checkout summary with the place-order trigger.
///
/// Unreachable with an empty cart: the app redirects to the cart view before
/// this renders, so the empty case yields nothing.
#[function_component(CheckoutPage)]
pub fn checkout_page(props: &CheckoutPageProps) -> Html {
    if props.cart.is_empty() {
        return html! {};
    }

    let summary = OrderSummary::of(&props.cart);
    let place = {
        let cb = props.on_place_order.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let button_label = if props.placing {
        "Processing..."
    } else {
        "Place Order"
    };

    html! {
        <section class="checkout" aria-label="Checkout">
            <h1>{ "Checkout" }</h1>
            <div class="order-items">
                { for props.cart.lines.iter().map(|line| html! {
                    <div class="order-item" data-product-id={line.id.clone()}>
                        <span>{ format!("{} × {}", line.name, line.quantity) }</span>
                        <span>{ CurrencyLabel::PulaIso.format(line.line_total()) }</span>
                    </div>
                }) }
            </div>
            <div class="order-summary">
                <div class="summary-row">
                    <span>{ "Subtotal" }</span>
                    <span>{ CurrencyLabel::PulaIso.format(summary.subtotal) }</span>
                </div>
                <div class="summary-row">
                    <span>{ "Shipping" }</span>
                    <span>{ CurrencyLabel::PulaIso.format(summary.shipping) }</span>
                </div>
                <div class="summary-row total">
                    <span>{ "Total" }</span>
                    <span>{ CurrencyLabel::PulaIso.format(summary.total) }</span>
                </div>
            </div>
            <button
                type="button"
                class="checkout-button"
                onclick={place}
                disabled={props.placing}
            >
                { button_label }
            </button>
        </section>
    }
}
