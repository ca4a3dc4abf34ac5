//! The in-memory product catalog.
//!
//! # Responsibilities
//! - Hold the ordered product list for the process lifetime
//! - Linear-scan lookup by id, category, and name substring
//! - Append, merge-update, and removal by id
//! - Category statistics in a single scan

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::store::model::{seed_products, Product, ProductPatch};

/// Ordered, process-lifetime product collection.
///
/// Shared across handlers via `Arc`; the inner mutex serializes each
/// operation so the type is usable from a multi-threaded runtime.
#[derive(Debug, Default)]
pub struct ProductStore {
    products: Mutex<Vec<Product>>,
}

impl ProductStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with the bootstrap records.
    pub fn with_seed_data() -> Self {
        Self {
            products: Mutex::new(seed_products()),
        }
    }

    /// A poisoned lock only means a handler panicked mid-operation; the
    /// data itself is still a plain Vec, so recover the guard.
    fn lock(&self) -> MutexGuard<'_, Vec<Product>> {
        self.products.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of all products in insertion order.
    pub fn all(&self) -> Vec<Product> {
        self.lock().clone()
    }

    /// Lookup by exact id.
    pub fn get(&self, id: &str) -> Option<Product> {
        self.lock().iter().find(|p| p.id == id).cloned()
    }

    /// All products whose category equals `category`, case-insensitively.
    pub fn by_category(&self, category: &str) -> Vec<Product> {
        let wanted = category.to_lowercase();
        self.lock()
            .iter()
            .filter(|p| p.category.to_lowercase() == wanted)
            .cloned()
            .collect()
    }

    /// All products whose name contains `query`, case-insensitively.
    pub fn search_name(&self, query: &str) -> Vec<Product> {
        let needle = query.to_lowercase();
        self.lock()
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Append a record. The caller is responsible for id uniqueness
    /// (ids are freshly generated UUIDs on the create path).
    pub fn insert(&self, product: Product) {
        self.lock().push(product);
    }

    /// Merge `patch` into the record with `id`, returning the updated
    /// record, or `None` if no such record exists.
    pub fn update(&self, id: &str, patch: ProductPatch) -> Option<Product> {
        let mut products = self.lock();
        let product = products.iter_mut().find(|p| p.id == id)?;
        product.apply_patch(patch);
        Some(product.clone())
    }

    /// Remove the record with `id`, returning it, or `None` if absent.
    pub fn remove(&self, id: &str) -> Option<Product> {
        let mut products = self.lock();
        let index = products.iter().position(|p| p.id == id)?;
        Some(products.remove(index))
    }

    /// Count of records per category (stored spelling), one full scan.
    pub fn stats(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for product in self.lock().iter() {
            *counts.entry(product.category.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str, name: &str, category: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: "desc".to_string(),
            price: 10.0,
            category: category.to_string(),
            in_stock: true,
        }
    }

    #[test]
    fn test_seed_data_loaded() {
        let store = ProductStore::with_seed_data();
        assert_eq!(store.len(), 3);
        assert_eq!(store.get("1").unwrap().name, "Laptop");
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        let store = ProductStore::with_seed_data();
        assert!(store.get("999").is_none());
    }

    #[test]
    fn test_category_filter_is_case_insensitive() {
        let store = ProductStore::with_seed_data();
        let kitchen = store.by_category("KITCHEN");
        assert_eq!(kitchen.len(), 1);
        assert_eq!(kitchen[0].name, "Coffee Maker");
    }

    #[test]
    fn test_search_matches_substring_case_insensitively() {
        let store = ProductStore::with_seed_data();
        let hits = store.search_name("LAP");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Laptop");

        assert!(store.search_name("xyz").is_empty());
    }

    #[test]
    fn test_insert_preserves_order() {
        let store = ProductStore::new();
        store.insert(sample("a", "First", "misc"));
        store.insert(sample("b", "Second", "misc"));
        let all = store.all();
        assert_eq!(all[0].id, "a");
        assert_eq!(all[1].id, "b");
    }

    #[test]
    fn test_update_merges_and_returns_record() {
        let store = ProductStore::with_seed_data();
        let updated = store
            .update(
                "3",
                ProductPatch {
                    in_stock: Some(true),
                    ..ProductPatch::default()
                },
            )
            .unwrap();
        assert!(updated.in_stock);
        assert_eq!(updated.name, "Coffee Maker");
        assert_eq!(store.get("3").unwrap(), updated);
    }

    #[test]
    fn test_update_unknown_id_is_none() {
        let store = ProductStore::with_seed_data();
        assert!(store.update("999", ProductPatch::default()).is_none());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_remove_returns_record_and_shrinks_store() {
        let store = ProductStore::with_seed_data();
        let removed = store.remove("2").unwrap();
        assert_eq!(removed.name, "Smartphone");
        assert_eq!(store.len(), 2);
        assert!(store.get("2").is_none());
    }

    #[test]
    fn test_remove_unknown_id_leaves_store_unchanged() {
        let store = ProductStore::with_seed_data();
        let before = store.all();
        assert!(store.remove("999").is_none());
        assert_eq!(store.all(), before);
    }

    #[test]
    fn test_stats_counts_by_category() {
        let store = ProductStore::with_seed_data();
        let stats = store.stats();
        assert_eq!(stats.get("electronics"), Some(&2));
        assert_eq!(stats.get("kitchen"), Some(&1));
        assert_eq!(stats.len(), 2);
    }
}
