//! Storefront Cart Engine
//!
//! Platform-agnostic cart, order-summary, and accessibility-preference logic
//! for the storefront. This crate carries no DOM or storage dependencies; the
//! web front-end owns every side effect and applies the outcomes produced here.

pub mod cart;
pub mod catalog;
pub mod prefs;
pub mod summary;

// Re-export commonly used types
pub use cart::{Cart, CartChange, LineItem};
pub use catalog::{Catalog, CatalogLoadError, Product};
pub use prefs::{AccessibilityPrefs, FONT_SCALE_DEFAULT, FONT_SCALE_MAX, FONT_SCALE_STEP};
pub use summary::{CurrencyLabel, OrderSummary, SHIPPING_FEE};
