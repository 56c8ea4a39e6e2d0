//! Product catalog for the shop listing
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One product offered on the shop page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    #[serde(default)]
    pub desc: String,
}

/// The full shop listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
}

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Catalog {
    /// Parse a catalog from its embedded JSON representation.
    ///
    /// # Errors
    /// Returns an error when the JSON does not match the catalog shape.
    pub fn from_json(text: &str) -> Result<Self, CatalogLoadError> {
        let catalog: Self = serde_json::from_str(text)?;
        Ok(catalog)
    }

    /// Find a product by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_products_from_json() {
        let catalog = Catalog::from_json(
            r#"{"products":[{"id":"mug","name":"Clay Mug","price":45.0,"image":"img/mug.jpg"}]}"#,
        )
        .expect("catalog");
        assert_eq!(catalog.products.len(), 1);
        assert_eq!(catalog.find("mug").map(|p| p.name.as_str()), Some("Clay Mug"));
        assert!(catalog.find("ghost").is_none());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(Catalog::from_json("{not json").is_err());
    }
}
