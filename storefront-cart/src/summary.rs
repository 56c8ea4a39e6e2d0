//! Order totals and currency formatting
use crate::cart::{Cart, LineItem};

/// Flat shipping fee charged on every order, in pula.
pub const SHIPPING_FEE: f64 = 500.0;

/// Currency label used when rendering a monetary amount.
///
/// The cart page prefixes amounts with `P`, the checkout page with `BWP `.
/// Both label the same value; the difference is kept deliberately until
/// product settles on one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyLabel {
    /// `P` prefix, as shown on the cart page.
    Pula,
    /// `BWP ` prefix, as shown on the checkout summary.
    PulaIso,
}

impl CurrencyLabel {
    /// Render an amount with this label and exactly two decimal places.
    #[must_use]
    pub fn format(self, amount: f64) -> String {
        match self {
            Self::Pula => format!("P{amount:.2}"),
            Self::PulaIso => format!("BWP {amount:.2}"),
        }
    }
}

/// Derived totals for the cart or checkout summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderSummary {
    pub subtotal: f64,
    pub shipping: f64,
    pub total: f64,
}

impl OrderSummary {
    /// Compute the summary for the given cart: subtotal over every line plus
    /// the flat shipping fee.
    #[must_use]
    pub fn of(cart: &Cart) -> Self {
        let subtotal: f64 = cart.lines.iter().map(LineItem::line_total).sum();
        Self {
            subtotal,
            shipping: SHIPPING_FEE,
            total: subtotal + SHIPPING_FEE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn summary_is_subtotal_plus_flat_shipping() {
        let mut cart = Cart::new();
        cart.add_item("a", "A", 100.0, "a.jpg");
        cart.update_quantity("a", 1);
        cart.add_item("b", "B", 49.5, "b.jpg");

        let summary = OrderSummary::of(&cart);
        assert!(approx(summary.subtotal, 249.5));
        assert!(approx(summary.shipping, 500.0));
        assert!(approx(summary.total, 749.5));
    }

    #[test]
    fn summary_is_stable_under_reordering() {
        let mut forward = Cart::new();
        forward.add_item("a", "A", 12.3, "a.jpg");
        forward.add_item("b", "B", 45.6, "b.jpg");
        forward.add_item("c", "C", 78.9, "c.jpg");

        let mut reversed = Cart::new();
        reversed.add_item("c", "C", 78.9, "c.jpg");
        reversed.add_item("b", "B", 45.6, "b.jpg");
        reversed.add_item("a", "A", 12.3, "a.jpg");

        let lhs = OrderSummary::of(&forward);
        let rhs = OrderSummary::of(&reversed);
        assert!(approx(lhs.total, rhs.total));
    }

    #[test]
    fn empty_cart_still_carries_shipping() {
        let summary = OrderSummary::of(&Cart::new());
        assert!(approx(summary.subtotal, 0.0));
        assert!(approx(summary.total, SHIPPING_FEE));
    }

    #[test]
    fn labels_render_two_decimal_places() {
        assert_eq!(CurrencyLabel::Pula.format(45.0), "P45.00");
        assert_eq!(CurrencyLabel::Pula.format(749.5), "P749.50");
        assert_eq!(CurrencyLabel::PulaIso.format(500.0), "BWP 500.00");
        assert_eq!(CurrencyLabel::PulaIso.format(0.0), "BWP 0.00");
    }
}
