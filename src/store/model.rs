//! Product record and payload types.

use serde::{Deserialize, Serialize};

/// A single catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque unique identifier, assigned at creation, immutable after.
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Compared case-insensitively for filtering and stats grouping
    /// uses the stored spelling.
    pub category: String,
    pub in_stock: bool,
}

/// A fully validated create payload. Becomes a `Product` once an id
/// is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

impl ProductDraft {
    /// Attach an id, producing a storable record.
    pub fn into_product(self, id: String) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            in_stock: self.in_stock,
        }
    }
}

/// A validated partial-update payload. `None` fields keep the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}

impl Product {
    /// Merge a patch into this record, field by field. Absent fields are
    /// left untouched; the id never changes.
    pub fn apply_patch(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(in_stock) = patch.in_stock {
            self.in_stock = in_stock;
        }
    }
}

/// Fixed bootstrap records, trusted as valid by construction.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Laptop".to_string(),
            description: "High-performance laptop with 16GB RAM".to_string(),
            price: 1200.0,
            category: "electronics".to_string(),
            in_stock: true,
        },
        Product {
            id: "2".to_string(),
            name: "Smartphone".to_string(),
            description: "Latest model with 128GB storage".to_string(),
            price: 800.0,
            category: "electronics".to_string(),
            in_stock: true,
        },
        Product {
            id: "3".to_string(),
            name: "Coffee Maker".to_string(),
            description: "Programmable coffee maker with timer".to_string(),
            price: 50.0,
            category: "kitchen".to_string(),
            in_stock: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_in_stock_as_camel_case() {
        let product = seed_products().remove(0);
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["inStock"], serde_json::json!(true));
        assert!(json.get("in_stock").is_none());
    }

    #[test]
    fn test_patch_keeps_unset_fields() {
        let mut product = seed_products().remove(0);
        product.apply_patch(ProductPatch {
            price: Some(999.0),
            ..ProductPatch::default()
        });
        assert_eq!(product.price, 999.0);
        assert_eq!(product.name, "Laptop");
        assert_eq!(product.id, "1");
    }

    #[test]
    fn test_full_patch_replaces_everything_but_id() {
        let mut product = seed_products().remove(0);
        product.apply_patch(ProductPatch {
            name: Some("Desktop".into()),
            description: Some("Tower PC".into()),
            price: Some(1500.0),
            category: Some("electronics".into()),
            in_stock: Some(false),
        });
        assert_eq!(product.id, "1");
        assert_eq!(product.name, "Desktop");
        assert!(!product.in_stock);
    }
}
