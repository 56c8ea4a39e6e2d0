use yew::prelude::*;

/// Not-found page to show when routing fails to match a known view.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="not-found" aria-live="assertive">
            <h1>{ "Page not found" }</h1>
            <p>{ "The page you are looking for does not exist." }</p>
            <a href="/" class="cta-button">{ "Back to Shop" }</a>
        </section>
    }
}
