use crate::components::toast::Notice;
use storefront_cart::{AccessibilityPrefs, Cart, Catalog};
use yew::prelude::*;

/// Page-wide state: the single owning copy of the cart and preferences.
///
/// Everything is loaded from storage once at startup and written back after
/// every mutation; no other component holds a competing copy.
#[derive(Clone)]
pub struct AppState {
    pub cart: UseStateHandle<Cart>,
    pub catalog: UseStateHandle<Catalog>,
    pub prefs: UseStateHandle<AccessibilityPrefs>,
    pub notices: UseStateHandle<Vec<Notice>>,
    pub next_notice_id: UseStateHandle<u64>,
    pub placing_order: UseStateHandle<bool>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        cart: use_state(crate::storage::load_cart),
        catalog: use_state(load_catalog),
        prefs: use_state(crate::storage::load_prefs),
        notices: use_state(Vec::new),
        next_notice_id: use_state(|| 0_u64),
        placing_order: use_state(|| false),
    }
}

fn load_catalog() -> Catalog {
    match Catalog::from_json(include_str!("../../static/assets/data/catalog.json")) {
        Ok(catalog) => catalog,
        Err(err) => {
            #[cfg(target_arch = "wasm32")]
            crate::dom::console_error(&format!("Failed to load catalog: {err}"));
            #[cfg(not(target_arch = "wasm32"))]
            log::warn!("Failed to load catalog: {err}");
            Catalog::default()
        }
    }
}
