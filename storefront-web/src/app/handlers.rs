//! Callback builders wiring the pure cart mutations to their side effects:
//! write-through persistence, live-region announcements, and transient
//! notices. Each builder clones the state handles it needs so the callbacks
//! stay `'static`.

use crate::a11y;
use crate::app::state::AppState;
use crate::components::toast::{Notice, NoticeLevel};
#[cfg(target_arch = "wasm32")]
use crate::router::Route;
use crate::storage;
#[cfg(target_arch = "wasm32")]
use storefront_cart::Cart;
use storefront_cart::{CartChange, Product};
use yew::prelude::*;
use yew_router::prelude::*;

/// Simulated order round trip duration.
pub const ORDER_PROCESSING_MS: i32 = 2000;
/// Pause between the success notice and the confirmation redirect.
pub const CONFIRM_REDIRECT_MS: i32 = 2000;

fn notify(
    notices: &UseStateHandle<Vec<Notice>>,
    next_id: &UseStateHandle<u64>,
    message: &str,
    level: NoticeLevel,
) {
    let id = **next_id;
    next_id.set(id + 1);
    let mut current = (**notices).clone();
    current.push(Notice {
        id,
        message: message.to_string(),
        level,
    });
    notices.set(current);
    schedule_dismiss(notices, id);
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(notices: &UseStateHandle<Vec<Notice>>, id: u64) {
    let notices = notices.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let _ = crate::dom::sleep_ms(crate::components::toast::NOTICE_DISMISS_MS).await;
        let remaining: Vec<Notice> = (*notices)
            .iter()
            .filter(|notice| notice.id != id)
            .cloned()
            .collect();
        notices.set(remaining);
    });
}

// Host builds have no timers; notices stay until the state is dropped.
#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismiss(_notices: &UseStateHandle<Vec<Notice>>, _id: u64) {}

pub fn build_add_to_cart(state: &AppState) -> Callback<Product> {
    let cart = state.cart.clone();
    let notices = state.notices.clone();
    let next_id = state.next_notice_id.clone();
    Callback::from(move |product: Product| {
        let mut next = (*cart).clone();
        next.add_item(&product.id, &product.name, product.price, &product.image);
        storage::save_cart(&next);
        cart.set(next);
        a11y::set_status(&format!("{} added to cart", product.name));
        notify(&notices, &next_id, "Item added to cart!", NoticeLevel::Info);
    })
}

pub fn build_remove_item(state: &AppState) -> Callback<String> {
    let cart = state.cart.clone();
    let notices = state.notices.clone();
    let next_id = state.next_notice_id.clone();
    Callback::from(move |id: String| {
        let mut next = (*cart).clone();
        if let CartChange::Removed { .. } = next.remove_item(&id) {
            storage::save_cart(&next);
            cart.set(next);
            a11y::set_status("Item removed from cart");
            notify(
                &notices,
                &next_id,
                "Item removed from cart!",
                NoticeLevel::Info,
            );
        }
        // Unknown ids leave the cart, storage, and notices untouched.
    })
}

pub fn build_update_quantity(state: &AppState) -> Callback<(String, i32)> {
    let cart = state.cart.clone();
    let notices = state.notices.clone();
    let next_id = state.next_notice_id.clone();
    Callback::from(move |(id, delta): (String, i32)| {
        let mut next = (*cart).clone();
        match next.update_quantity(&id, delta) {
            CartChange::Updated { .. } => {
                storage::save_cart(&next);
                cart.set(next);
            }
            // Driving a quantity to zero carries the full removal side
            // effects, not just a display update.
            CartChange::Removed { .. } => {
                storage::save_cart(&next);
                cart.set(next);
                a11y::set_status("Item removed from cart");
                notify(
                    &notices,
                    &next_id,
                    "Item removed from cart!",
                    NoticeLevel::Info,
                );
            }
            CartChange::Added { .. } | CartChange::Noop => {}
        }
    })
}

/// Place-order flow: precondition check, busy state, simulated processing,
/// then clear-and-redirect. The error arm stays wired even though the
/// simulated round trip cannot fail today, so a real transaction call can
/// slot in without reshaping the handler.
pub fn build_place_order(state: &AppState, navigator: Option<Navigator>) -> Callback<()> {
    let cart = state.cart.clone();
    let placing = state.placing_order.clone();
    let notices = state.notices.clone();
    let next_id = state.next_notice_id.clone();
    Callback::from(move |()| {
        if cart.is_empty() {
            notify(&notices, &next_id, "Your cart is empty!", NoticeLevel::Error);
            return;
        }
        if *placing {
            // Trigger is disabled while pending, but guard re-entry anyway.
            return;
        }
        placing.set(true);

        #[cfg(target_arch = "wasm32")]
        {
            let cart = cart.clone();
            let placing = placing.clone();
            let notices = notices.clone();
            let next_id = next_id.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match process_order().await {
                    Ok(()) => {
                        notify(
                            &notices,
                            &next_id,
                            "Payment received! Order placed successfully!",
                            NoticeLevel::Success,
                        );
                        storage::clear_cart();
                        // Keep the in-memory cart until the redirect so the
                        // checkout summary stays on screen through the pause.
                        let _ = crate::dom::sleep_ms(CONFIRM_REDIRECT_MS).await;
                        cart.set(Cart::new());
                        placing.set(false);
                        if let Some(nav) = navigator {
                            nav.push(&Route::Confirmation);
                        }
                    }
                    Err(_) => {
                        // Roll back the busy state; the trigger re-enables and
                        // its label is restored by the re-render.
                        notify(
                            &notices,
                            &next_id,
                            "Something went wrong. Please try again.",
                            NoticeLevel::Error,
                        );
                        placing.set(false);
                    }
                }
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = &navigator;
    })
}

/// The simulated processing delay standing in for a payment call.
#[cfg(target_arch = "wasm32")]
async fn process_order() -> Result<(), wasm_bindgen::JsValue> {
    crate::dom::sleep_ms(ORDER_PROCESSING_MS).await
}

pub fn build_increase_font(state: &AppState) -> Callback<()> {
    let prefs = state.prefs.clone();
    Callback::from(move |()| {
        let mut next = *prefs;
        if next.increase_font_scale() {
            a11y::apply_font_scale(next.font_scale);
            prefs.set(next);
        }
    })
}

pub fn build_reset_font(state: &AppState) -> Callback<()> {
    let prefs = state.prefs.clone();
    Callback::from(move |()| {
        let mut next = *prefs;
        next.reset_font_scale();
        a11y::apply_font_scale(next.font_scale);
        prefs.set(next);
    })
}

pub fn build_toggle_contrast(state: &AppState) -> Callback<()> {
    let prefs = state.prefs.clone();
    Callback::from(move |()| {
        let mut next = *prefs;
        let enabled = next.toggle_high_contrast();
        a11y::set_high_contrast(enabled);
        prefs.set(next);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[function_component(HandlerHarness)]
    fn handler_harness() -> Html {
        let state = crate::app::state::use_app_state();
        let place_order = build_place_order(&state, None);
        let invoked = use_mut_ref(|| false);
        if !*invoked.borrow() {
            *invoked.borrow_mut() = true;
            // Empty cart: the precondition must fail with an error notice and
            // never raise the busy flag.
            place_order.emit(());
        }
        let error_count = state
            .notices
            .iter()
            .filter(|n| n.level == NoticeLevel::Error)
            .count();
        html! {
            <span>
                { format!("errors:{} placing:{}", error_count, *state.placing_order) }
            </span>
        }
    }

    #[test]
    fn empty_cart_order_attempt_aborts_with_an_error() {
        let html = block_on(LocalServerRenderer::<HandlerHarness>::new().render());
        assert!(html.contains("errors:1"));
        assert!(html.contains("placing:false"));
    }

    #[function_component(AddRemoveHarness)]
    fn add_remove_harness() -> Html {
        let state = crate::app::state::use_app_state();
        let add = build_add_to_cart(&state);
        let remove = build_remove_item(&state);
        let invoked = use_mut_ref(|| false);
        if !*invoked.borrow() {
            *invoked.borrow_mut() = true;
            add.emit(storefront_cart::Product {
                id: String::from("mug"),
                name: String::from("Clay Mug"),
                price: 45.0,
                image: String::from("img/mug.jpg"),
                desc: String::new(),
            });
            // Removing an unknown id must not add a notice.
            remove.emit(String::from("ghost"));
        }
        html! {
            <span>{ format!("count:{} notices:{}", state.cart.total_quantity(), state.notices.len()) }</span>
        }
    }

    #[test]
    fn add_notifies_and_unknown_removal_stays_silent() {
        let html = block_on(LocalServerRenderer::<AddRemoveHarness>::new().render());
        assert!(html.contains("count:1"));
        assert!(html.contains("notices:1"));
    }
}
