//! View projections shared by the shell and the frontend.
//!
//! Everything here is a pure function of dashboard state. The frontend only
//! turns these values into DOM nodes.

use stockroom_core::{Entity, ItemId};
use stockroom_inventory::{InventoryCollection, InventoryItem, Quantity, StockStatus};

/// Shown alone until the initial load completes.
pub const LOADING_MESSAGE: &str = "Loading inventory...";

/// Fixed table header, left to right.
pub const TABLE_COLUMNS: [&str; 5] = ["SKU", "Product", "Quantity", "Location", "Status"];

/// One rendered inventory row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: ItemId,
    pub sku: String,
    pub product: String,
    pub quantity: Quantity,
    pub location: String,
    pub status: StockStatus,
}

impl TableRow {
    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            id: *item.id(),
            sku: item.sku().to_string(),
            product: item.product().to_string(),
            quantity: item.quantity(),
            location: item.location().to_string(),
            status: item.status(),
        }
    }

    /// Quantity cell is bold below the low-stock threshold.
    pub fn is_bold(&self) -> bool {
        self.quantity.is_emphasized()
    }

    /// Quantity cell is colored only at exactly zero.
    pub fn is_out_of_stock(&self) -> bool {
        self.quantity.is_out_of_stock()
    }

    /// Inline style of the quantity cell.
    pub fn quantity_style(&self) -> &'static str {
        match (self.is_out_of_stock(), self.is_bold()) {
            (true, _) => "color: red; font-weight: bold",
            (false, true) => "color: black; font-weight: bold",
            (false, false) => "color: black; font-weight: normal",
        }
    }

    pub fn status_text(&self) -> String {
        self.status.to_string()
    }
}

/// The low-stock notice above the update form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LowStockBanner {
    pub count: usize,
}

impl LowStockBanner {
    /// `None` when nothing is low; the banner then has no DOM presence at all.
    pub fn from_inventory(inventory: &InventoryCollection) -> Option<Self> {
        match inventory.low_stock_count() {
            0 => None,
            count => Some(Self { count }),
        }
    }

    pub fn message(&self) -> String {
        format!("{} items need reorder", self.count)
    }
}

/// Fully loaded dashboard, in composition order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadyView {
    pub heading: String,
    pub banner: Option<LowStockBanner>,
    pub search_term: String,
    pub rows: Vec<TableRow>,
}

/// What the shell renders for a given state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardView {
    Loading,
    Ready(ReadyView),
}

impl DashboardView {
    pub fn is_loading(&self) -> bool {
        matches!(self, DashboardView::Loading)
    }

    pub fn ready(&self) -> Option<&ReadyView> {
        match self {
            DashboardView::Loading => None,
            DashboardView::Ready(view) => Some(view),
        }
    }

    /// Page heading; empty while loading.
    pub fn heading(&self) -> &str {
        self.ready().map_or("", |ready| ready.heading.as_str())
    }

    pub fn banner(&self) -> Option<LowStockBanner> {
        self.ready().and_then(|ready| ready.banner)
    }

    /// Search field contents; empty while loading.
    pub fn search_term(&self) -> &str {
        self.ready().map_or("", |ready| ready.search_term.as_str())
    }

    /// Visible table rows; none while loading.
    pub fn rows(&self) -> &[TableRow] {
        self.ready().map(|ready| ready.rows.as_slice()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_inventory::sample_inventory;

    fn rows() -> Vec<TableRow> {
        sample_inventory().unwrap().iter().map(TableRow::from_item).collect()
    }

    #[test]
    fn quantity_cell_styles() {
        let rows = rows();
        assert_eq!(rows[0].quantity_style(), "color: black; font-weight: normal");
        assert_eq!(rows[2].quantity_style(), "color: red; font-weight: bold");
        assert_eq!(rows[3].quantity_style(), "color: black; font-weight: bold");
    }

    #[test]
    fn status_text_has_icon_and_label() {
        let rows = rows();
        assert_eq!(rows[2].status_text(), "🔴 Out of Stock");
        assert_eq!(rows[3].status_text(), "🟡 Low Stock");
    }

    #[test]
    fn loading_view_exposes_no_sections() {
        let view = DashboardView::Loading;
        assert_eq!(view.heading(), "");
        assert_eq!(view.banner(), None);
        assert_eq!(view.search_term(), "");
        assert!(view.rows().is_empty());
    }

    #[test]
    fn banner_absent_when_nothing_is_low() {
        let inventory = InventoryCollection::from_items([InventoryItem::new(
            ItemId::new(1),
            "A",
            "Alpha",
            0,
            "Aisle 1",
        )])
        .unwrap();
        assert_eq!(LowStockBanner::from_inventory(&inventory), None);
    }

    #[test]
    fn banner_message_counts_items() {
        let banner = LowStockBanner::from_inventory(&sample_inventory().unwrap()).unwrap();
        assert_eq!(banner.message(), "1 items need reorder");
    }
}
