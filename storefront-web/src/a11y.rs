// Accessibility helpers

use crate::storage;
use storefront_cart::AccessibilityPrefs;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// CSS custom property the stylesheet's font-size rules consume.
const FONT_SCALE_PROP: &str = "--font-scale";
/// Body class marking that the visitor has touched the font-scale controls.
const FONT_RESIZE_CLASS: &str = "font-resize-active";
/// Body class enabling the high-contrast palette.
const HIGH_CONTRAST_CLASS: &str = "high-contrast";

/// Write the scale to the page and persist it.
///
/// Sets `--font-scale` on the root element and raises the body-level flag so
/// presentation rules know a scaled layout is active.
pub fn apply_font_scale(scale: f64) {
    #[cfg(target_arch = "wasm32")]
    if let Some(win) = web_sys::window()
        && let Some(doc) = win.document()
    {
        if let Some(root) = doc
            .document_element()
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        {
            let _ = root.style().set_property(FONT_SCALE_PROP, &scale.to_string());
        }
        if let Some(body) = doc.body() {
            let _ = body.class_list().add_1(FONT_RESIZE_CLASS);
        }
    }
    storage::save_font_scale(scale);
}

/// Toggle the high-contrast palette for visitors with visual impairments
/// and persist the choice.
pub fn set_high_contrast(enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    if let Some(win) = web_sys::window()
        && let Some(doc) = win.document()
        && let Some(body) = doc.body()
    {
        let _ = if enabled {
            body.class_list().add_1(HIGH_CONTRAST_CLASS)
        } else {
            body.class_list().remove_1(HIGH_CONTRAST_CLASS)
        };
    }
    storage::save_high_contrast(enabled);
}

/// Re-apply saved preferences on page load and return them.
///
/// The scale is only applied when it differs from the default, so an
/// untouched page never carries the resize flag. Contrast is applied only
/// when it was saved as enabled.
pub fn restore_on_load() -> AccessibilityPrefs {
    let prefs = storage::load_prefs();
    if !prefs.is_default_scale() {
        apply_font_scale(prefs.font_scale);
    }
    if prefs.high_contrast {
        set_high_contrast(true);
    }
    prefs
}

/// Update the polite live region so screen readers hear cart changes.
///
/// Updates the text content of the #cart-status element if present.
pub fn set_status(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(win) = web_sys::window()
        && let Some(doc) = win.document()
        && let Some(node) = doc.get_element_by_id("cart-status")
    {
        node.set_text_content(Some(msg));
    }
}
