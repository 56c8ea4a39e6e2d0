//! Cart state and mutations
use serde::{Deserialize, Serialize};

/// One distinct product in the cart.
///
/// A line with `quantity <= 0` must never exist; mutations that would drive a
/// quantity to zero remove the line instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: String,
    pub name: String,
    /// Unit price in pula. Kept as a plain number so the persisted cart array
    /// round-trips unchanged.
    pub price: f64,
    pub image: String,
    pub quantity: i32,
}

impl LineItem {
    /// Price of this line (unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Outcome of applying a cart mutation.
///
/// Callers map each case to its own side effects (persist, notify, refresh),
/// so the mutations themselves stay free of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartChange {
    /// A new line was appended with quantity 1.
    Added { id: String },
    /// An existing line's quantity changed.
    Updated { id: String, quantity: i32 },
    /// The line was removed. `now_empty` is true when it was the last one.
    Removed { id: String, now_empty: bool },
    /// Nothing matched; the cart is unchanged.
    Noop,
}

/// Ordered cart contents, unique by product id.
///
/// Serializes transparently as the bare line array, which is the shape the
/// `cart` storage entry has always used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    pub lines: Vec<LineItem>,
}

impl Cart {
    /// Create a new empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a line by product id.
    #[must_use]
    pub fn find_line(&self, id: &str) -> Option<&LineItem> {
        self.lines.iter().find(|line| line.id == id)
    }

    fn find_line_mut(&mut self, id: &str) -> Option<&mut LineItem> {
        self.lines.iter_mut().find(|line| line.id == id)
    }

    /// Add one unit of a product. An existing line is incremented; otherwise a
    /// new line is appended at the end with quantity 1.
    pub fn add_item(&mut self, id: &str, name: &str, price: f64, image: &str) -> CartChange {
        if let Some(line) = self.find_line_mut(id) {
            line.quantity += 1;
            CartChange::Updated {
                id: id.to_string(),
                quantity: line.quantity,
            }
        } else {
            self.lines.push(LineItem {
                id: id.to_string(),
                name: name.to_string(),
                price,
                image: image.to_string(),
                quantity: 1,
            });
            CartChange::Added { id: id.to_string() }
        }
    }

    /// Remove the line matching `id`. Unknown ids leave the cart unchanged.
    pub fn remove_item(&mut self, id: &str) -> CartChange {
        let before = self.lines.len();
        self.lines.retain(|line| line.id != id);
        if self.lines.len() == before {
            CartChange::Noop
        } else {
            CartChange::Removed {
                id: id.to_string(),
                now_empty: self.lines.is_empty(),
            }
        }
    }

    /// Add `delta` to the quantity of the line matching `id`.
    ///
    /// A resulting quantity of zero or less removes the line outright, with
    /// the same outcome as [`Cart::remove_item`]. Unknown ids are a no-op.
    pub fn update_quantity(&mut self, id: &str, delta: i32) -> CartChange {
        let Some(line) = self.find_line_mut(id) else {
            return CartChange::Noop;
        };
        line.quantity += delta;
        if line.quantity <= 0 {
            self.remove_item(id)
        } else {
            CartChange::Updated {
                id: id.to_string(),
                quantity: line.quantity,
            }
        }
    }

    /// Current quantity of a product (0 when absent).
    #[must_use]
    pub fn quantity_of(&self, id: &str) -> i32 {
        self.find_line(id).map_or(0, |line| line.quantity)
    }

    /// Total units across all lines, for the cart-count badge.
    #[must_use]
    pub fn total_quantity(&self) -> i32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Check if the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
