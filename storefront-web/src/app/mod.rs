pub mod handlers;
pub mod state;

#[cfg(target_arch = "wasm32")]
use crate::components::header::Header;
#[cfg(target_arch = "wasm32")]
use crate::components::settings_controls::SettingsControls;
#[cfg(target_arch = "wasm32")]
use crate::components::toast::Toast;
#[cfg(target_arch = "wasm32")]
use crate::pages::{
    cart::CartPage, checkout::CheckoutPage, confirmation::ConfirmationPage, not_found::NotFound,
    shop::ShopPage,
};
#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let state = state::use_app_state();
    let navigator = use_navigator();
    let route = use_route::<Route>().unwrap_or(Route::Shop);

    // Checkout reads the cart back from storage on entry and is unreachable
    // with an empty cart; an empty read bounces straight to the cart view.
    {
        let cart = state.cart.clone();
        let navigator = navigator.clone();
        use_effect_with(route.clone(), move |route| {
            if *route == Route::Checkout {
                let stored = crate::storage::load_cart();
                if stored.is_empty() {
                    if let Some(nav) = navigator {
                        nav.push(&Route::Cart);
                    }
                } else if stored != *cart {
                    cart.set(stored);
                }
            }
        });
    }

    let body = match route {
        Route::Shop => html! {
            <ShopPage
                catalog={(*state.catalog).clone()}
                on_add_to_cart={handlers::build_add_to_cart(&state)}
            />
        },
        Route::Cart => html! {
            <CartPage
                cart={(*state.cart).clone()}
                on_update_quantity={handlers::build_update_quantity(&state)}
                on_remove={handlers::build_remove_item(&state)}
            />
        },
        Route::Checkout => html! {
            <CheckoutPage
                cart={(*state.cart).clone()}
                placing={*state.placing_order}
                on_place_order={handlers::build_place_order(&state, navigator)}
            />
        },
        Route::Confirmation => html! { <ConfirmationPage /> },
        Route::NotFound => html! { <NotFound /> },
    };

    html! {
        <>
            <Header cart_count={state.cart.total_quantity()} />
            <SettingsControls
                high_contrast={state.prefs.high_contrast}
                on_increase_font={handlers::build_increase_font(&state)}
                on_reset_font={handlers::build_reset_font(&state)}
                on_toggle_contrast={handlers::build_toggle_contrast(&state)}
            />
            <main id="main">{ body }</main>
            <Toast notices={(*state.notices).clone()} />
        </>
    }
}
