//! Ordered, id-unique inventory collection.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use stockroom_core::{DomainError, DomainResult, Entity, ItemId};

use crate::item::InventoryItem;
use crate::update::QuantityUpdate;

/// Inventory rows in insertion order. No two rows share an [`ItemId`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryCollection {
    items: Vec<InventoryItem>,
}

impl InventoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection, rejecting duplicate ids.
    pub fn from_items(items: impl IntoIterator<Item = InventoryItem>) -> DomainResult<Self> {
        let mut collection = Self::new();
        for item in items {
            collection.push(item)?;
        }
        Ok(collection)
    }

    /// Append an item at the end.
    pub fn push(&mut self, item: InventoryItem) -> DomainResult<()> {
        if self.get(*item.id()).is_some() {
            return Err(DomainError::conflict(format!("duplicate item id {}", item.id())));
        }
        self.items.push(item);
        Ok(())
    }

    pub fn get(&self, id: ItemId) -> Option<&InventoryItem> {
        self.items.iter().find(|item| *item.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items whose product name contains `term`, ignoring case, in collection
    /// order. An empty term matches every item.
    pub fn search<'a>(&'a self, term: &str) -> impl Iterator<Item = &'a InventoryItem> + use<'a> {
        let needle = term.to_lowercase();
        self.items
            .iter()
            .filter(move |item| item.product_matches(&needle))
    }

    /// Number of items strictly between zero and the low-stock threshold.
    pub fn low_stock_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.quantity().is_low_stock())
            .count()
    }

    /// Replace the quantity of every item whose SKU equals `update.sku`.
    ///
    /// Order and ids are untouched. Returns how many items matched; zero is
    /// not an error.
    pub fn apply_update(&mut self, update: &QuantityUpdate) -> usize {
        let mut matched = 0;
        for item in self.items.iter_mut().filter(|item| item.sku() == update.sku) {
            item.set_quantity(update.quantity);
            matched += 1;
        }

        if matched == 0 {
            tracing::debug!(sku = %update.sku, "quantity update matched no items");
        } else {
            tracing::debug!(sku = %update.sku, quantity = %update.quantity, matched, "quantity update applied");
        }
        matched
    }

    /// SKUs shared by more than one item (each reported once, first-seen order).
    pub fn duplicate_skus(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for item in &self.items {
            if !seen.insert(item.sku()) && reported.insert(item.sku()) {
                duplicates.push(item.sku());
            }
        }
        duplicates
    }
}
