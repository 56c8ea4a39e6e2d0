//! Thin wrappers over the browser globals the storefront touches.

use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Storage, Window};

/// The global `window` object.
///
/// # Panics
/// Panics outside of a browser context.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Write an error line to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// The browser `localStorage` handle.
///
/// # Errors
/// Returns an error when storage is blocked or the window is inaccessible.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Suspend the current task for `duration_ms` milliseconds via `setTimeout`.
///
/// This is the storefront's only suspension point; the order-placement flow
/// and notification dismissal are both built on it.
///
/// # Errors
/// Returns an error if the timer cannot be scheduled or the promise rejects.
///
/// # Panics
/// Panics if no browser `window` is available.
#[allow(clippy::future_not_send)] // `JsFuture` is not `Send`; fine on the single wasm thread.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });
    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;

    let fire = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });
    let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(
        fire.as_ref().unchecked_ref(),
        duration_ms,
    )?;
    fire.forget();

    JsFuture::from(promise).await?;
    Ok(())
}
