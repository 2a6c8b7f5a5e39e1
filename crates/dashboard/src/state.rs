//! Application shell state.
//!
//! Owns the authoritative inventory and the search term. The UI holds one
//! `Dashboard` in a signal and re-derives its views from [`Dashboard::project`]
//! and the narrower projections after every mutation.

use stockroom_inventory::{InventoryCollection, QuantityUpdate};
use thiserror::Error;

use crate::config::DashboardConfig;
use crate::view::{DashboardView, LowStockBanner, ReadyView, TableRow};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DashboardError {
    #[error("initial inventory load already completed")]
    AlreadyLoaded,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    config: DashboardConfig,
    inventory: InventoryCollection,
    loading: bool,
    search_term: String,
}

impl Dashboard {
    /// A dashboard waiting for its initial load.
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            inventory: InventoryCollection::new(),
            loading: true,
            search_term: String::new(),
        }
    }

    pub fn inventory(&self) -> &InventoryCollection {
        &self.inventory
    }

    /// Install the initial inventory and leave the loading state.
    ///
    /// One-shot: once loaded, later calls leave state untouched and return
    /// [`DashboardError::AlreadyLoaded`].
    pub fn finish_loading(&mut self, inventory: InventoryCollection) -> Result<(), DashboardError> {
        if !self.loading {
            tracing::warn!("ignoring repeated initial load");
            return Err(DashboardError::AlreadyLoaded);
        }

        tracing::info!(items = inventory.len(), "inventory loaded");
        let shared = inventory.duplicate_skus();
        if !shared.is_empty() {
            tracing::debug!(skus = ?shared, "inventory contains shared SKUs; updates hit every match");
        }

        self.inventory = inventory;
        self.loading = false;
        Ok(())
    }

    /// Replace the search term (called on every keystroke).
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        tracing::debug!(term = %self.search_term, "search term changed");
    }

    /// Apply a form update to every item with the same SKU. Returns the
    /// number of matched items; a miss is silent.
    pub fn apply_update(&mut self, update: &QuantityUpdate) -> usize {
        self.inventory.apply_update(update)
    }

    /// Table rows: the inventory filtered by the search term.
    pub fn rows(&self) -> Vec<TableRow> {
        self.inventory
            .search(&self.search_term)
            .map(TableRow::from_item)
            .collect()
    }

    /// Banner over the full, unfiltered inventory.
    pub fn banner(&self) -> Option<LowStockBanner> {
        LowStockBanner::from_inventory(&self.inventory)
    }

    /// Project the whole state into what should be on screen.
    pub fn project(&self) -> DashboardView {
        if self.loading {
            return DashboardView::Loading;
        }

        DashboardView::Ready(ReadyView {
            heading: self.config.title.clone(),
            banner: self.banner(),
            search_term: self.search_term.clone(),
            rows: self.rows(),
        })
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}
