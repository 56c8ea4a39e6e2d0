use storefront_cart::{Cart, CurrencyLabel, OrderSummary};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CartPageProps {
    pub cart: Cart,
    /// Emits `(product id, delta)` from the per-row +/− controls.
    pub on_update_quantity: Callback<(String, i32)>,
    pub on_remove: Callback<String>,
}

/// Cart view: one row per line with quantity and remove controls, or the
/// empty-state block, followed by the order summary.
#[function_component(CartPage)]
pub fn cart_page(props: &CartPageProps) -> Html {
    if props.cart.is_empty() {
        return html! {
            <section class="cart" aria-label="Shopping cart">
                <h1>{ "Shopping Cart" }</h1>
                <div id="cart-items">
                    <div class="cart-empty">
                        <p>{ "Your cart is empty" }</p>
                        <a href="/" class="cta-button">{ "Continue Shopping" }</a>
                    </div>
                </div>
            </section>
        };
    }

    let summary = OrderSummary::of(&props.cart);
    html! {
        <section class="cart" aria-label="Shopping cart">
            <h1>{ "Shopping Cart" }</h1>
            <div id="cart-items">
                { for props.cart.lines.iter().map(|line| {
                    let decrease = {
                        let cb = props.on_update_quantity.clone();
                        let id = line.id.clone();
                        Callback::from(move |_| cb.emit((id.clone(), -1)))
                    };
                    let increase = {
                        let cb = props.on_update_quantity.clone();
                        let id = line.id.clone();
                        Callback::from(move |_| cb.emit((id.clone(), 1)))
                    };
                    let remove = {
                        let cb = props.on_remove.clone();
                        let id = line.id.clone();
                        Callback::from(move |_| cb.emit(id.clone()))
                    };
                    html! {
                        <div class="cart-item" data-product-id={line.id.clone()}>
                            <img src={line.image.clone()} alt={line.name.clone()} />
                            <div class="item-details">
                                <h3>{ line.name.clone() }</h3>
                                <p>
                                    <strong>{ "Price: " }</strong>
                                    { CurrencyLabel::Pula.format(line.price) }
                                </p>
                                <div class="quantity-controls">
                                    <button type="button" class="quantity-btn" onclick={decrease} aria-label={format!("Decrease quantity of {}", line.name)}>{ "-" }</button>
                                    <span class="quantity">{ line.quantity }</span>
                                    <button type="button" class="quantity-btn" onclick={increase} aria-label={format!("Increase quantity of {}", line.name)}>{ "+" }</button>
                                </div>
                            </div>
                            <button type="button" class="remove-btn" onclick={remove}>{ "Remove" }</button>
                        </div>
                    }
                }) }
            </div>
            <aside class="order-summary" aria-label="Order summary">
                <div class="summary-row">
                    <span>{ "Subtotal" }</span>
                    <span id="subtotal">{ CurrencyLabel::Pula.format(summary.subtotal) }</span>
                </div>
                <div class="summary-row">
                    <span>{ "Shipping" }</span>
                    <span id="shipping">{ CurrencyLabel::Pula.format(summary.shipping) }</span>
                </div>
                <div class="summary-row total">
                    <span>{ "Total" }</span>
                    <span id="total">{ CurrencyLabel::Pula.format(summary.total) }</span>
                </div>
                <a href="/checkout" class="cta-button checkout-link">{ "Proceed to Checkout" }</a>
            </aside>
        </section>
    }
}
