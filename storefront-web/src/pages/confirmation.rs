use yew::prelude::*;

/// Post-order confirmation view.
#[function_component(ConfirmationPage)]
pub fn confirmation_page() -> Html {
    html! {
        <section class="order-confirmation" aria-live="polite">
            <h1>{ "Order Confirmed" }</h1>
            <p>{ "Thank you! Your order has been placed." }</p>
            <a href="/" class="cta-button">{ "Back to Shop" }</a>
        </section>
    }
}
