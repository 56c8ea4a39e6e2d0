//! Accessibility display preferences
//!
//! Pure preference state; the web layer applies the values to the page and
//! persists them.
use serde::{Deserialize, Serialize};

/// Font scale applied when the visitor has not changed anything.
pub const FONT_SCALE_DEFAULT: f64 = 1.0;
/// Increment applied by each font-scale increase.
pub const FONT_SCALE_STEP: f64 = 0.2;
/// Ceiling for the font scale, inclusive.
pub const FONT_SCALE_MAX: f64 = 1.4;

/// The two independent display preferences a visitor can set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityPrefs {
    pub font_scale: f64,
    pub high_contrast: bool,
}

impl Default for AccessibilityPrefs {
    fn default() -> Self {
        Self {
            font_scale: FONT_SCALE_DEFAULT,
            high_contrast: false,
        }
    }
}

impl AccessibilityPrefs {
    /// Bump the font scale by one step. At or above the ceiling the call is a
    /// no-op. Returns whether the scale changed.
    pub fn increase_font_scale(&mut self) -> bool {
        if self.font_scale < FONT_SCALE_MAX {
            self.font_scale += FONT_SCALE_STEP;
            true
        } else {
            false
        }
    }

    /// Reset the font scale to the default.
    pub fn reset_font_scale(&mut self) {
        self.font_scale = FONT_SCALE_DEFAULT;
    }

    /// Flip the high-contrast flag, returning the new value.
    pub fn toggle_high_contrast(&mut self) -> bool {
        self.high_contrast = !self.high_contrast;
        self.high_contrast
    }

    /// True while the visitor has not scaled the page, so the body-level
    /// "resize active" flag stays off.
    #[must_use]
    pub fn is_default_scale(&self) -> bool {
        (self.font_scale - FONT_SCALE_DEFAULT).abs() < f64::EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn increase_walks_the_step_sequence_and_stops_at_ceiling() {
        let mut prefs = AccessibilityPrefs::default();
        assert!(prefs.increase_font_scale());
        assert!(approx(prefs.font_scale, 1.2));
        assert!(prefs.increase_font_scale());
        assert!(approx(prefs.font_scale, 1.4));
        assert!(!prefs.increase_font_scale());
        assert!(approx(prefs.font_scale, 1.4));
    }

    #[test]
    fn reset_returns_to_default_scale() {
        let mut prefs = AccessibilityPrefs::default();
        prefs.increase_font_scale();
        prefs.reset_font_scale();
        assert!(prefs.is_default_scale());
    }

    #[test]
    fn toggling_contrast_twice_restores_original_state() {
        let mut prefs = AccessibilityPrefs::default();
        assert!(prefs.toggle_high_contrast());
        assert!(prefs.high_contrast);
        assert!(!prefs.toggle_high_contrast());
        assert!(!prefs.high_contrast);
    }
}
