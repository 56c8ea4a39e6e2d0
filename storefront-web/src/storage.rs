//! localStorage persistence for the cart and display preferences.
//!
//! Keys and value shapes match what the storefront has always written:
//! `cart` holds the serialized line array, `fontScale` a decimal string,
//! `highContrast` the strings `"true"`/`"false"`. Missing or unparsable
//! values silently fall back to defaults and are never surfaced to the
//! visitor.

use storefront_cart::{AccessibilityPrefs, Cart};

pub const CART_KEY: &str = "cart";
pub const FONT_SCALE_KEY: &str = "fontScale";
pub const HIGH_CONTRAST_KEY: &str = "highContrast";

#[cfg(target_arch = "wasm32")]
mod backend {
    use crate::dom;

    pub fn read(key: &str) -> Option<String> {
        let storage = dom::local_storage().ok()?;
        storage.get_item(key).ok().flatten()
    }

    pub fn write(key: &str, value: &str) {
        if let Ok(storage) = dom::local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    pub fn remove(key: &str) {
        if let Ok(storage) = dom::local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

// Host builds (server-side render tests) have no browser storage; every
// lookup behaves like a fresh visitor.
#[cfg(not(target_arch = "wasm32"))]
mod backend {
    pub fn read(_key: &str) -> Option<String> {
        None
    }

    pub fn write(_key: &str, _value: &str) {}

    pub fn remove(_key: &str) {}
}

/// Restore the persisted cart. Absent or corrupt entries yield an empty cart.
#[must_use]
pub fn load_cart() -> Cart {
    let Some(text) = backend::read(CART_KEY) else {
        return Cart::new();
    };
    match serde_json::from_str(&text) {
        Ok(cart) => cart,
        Err(err) => {
            log::warn!("discarding unparsable cart entry: {err}");
            Cart::new()
        }
    }
}

/// Mirror the cart to storage. Runs synchronously after every mutation.
pub fn save_cart(cart: &Cart) {
    match serde_json::to_string(cart) {
        Ok(json) => backend::write(CART_KEY, &json),
        Err(err) => log::warn!("cart serialization failed: {err}"),
    }
}

/// Drop the persisted cart entry entirely (successful order placement).
pub fn clear_cart() {
    backend::remove(CART_KEY);
}

/// Restore both display preferences. Defaults stand when nothing was saved
/// or a saved value does not parse.
#[must_use]
pub fn load_prefs() -> AccessibilityPrefs {
    let mut prefs = AccessibilityPrefs::default();
    if let Some(scale) = backend::read(FONT_SCALE_KEY).and_then(|v| v.parse::<f64>().ok()) {
        prefs.font_scale = scale;
    }
    if backend::read(HIGH_CONTRAST_KEY).as_deref() == Some("true") {
        prefs.high_contrast = true;
    }
    prefs
}

pub fn save_font_scale(scale: f64) {
    backend::write(FONT_SCALE_KEY, &scale.to_string());
}

pub fn save_high_contrast(enabled: bool) {
    backend::write(HIGH_CONTRAST_KEY, if enabled { "true" } else { "false" });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_builds_behave_like_a_fresh_visitor() {
        assert!(load_cart().is_empty());
        assert_eq!(load_prefs(), AccessibilityPrefs::default());
    }

    #[test]
    fn writes_are_safe_without_a_browser() {
        let mut cart = Cart::new();
        cart.add_item("mug", "Clay Mug", 45.0, "img/mug.jpg");
        save_cart(&cart);
        save_font_scale(1.2);
        save_high_contrast(true);
        clear_cart();
    }
}
