//! Mock inventory installed by the dashboard after its simulated fetch.

use stockroom_core::{DomainResult, ItemId};

use crate::collection::InventoryCollection;
use crate::item::InventoryItem;

/// The fixed four-item seed set (ids 1–4).
pub fn sample_inventory() -> DomainResult<InventoryCollection> {
    InventoryCollection::from_items([
        InventoryItem::new(ItemId::new(1), "ABC-123", "Widget", 150, "Aisle 3"),
        InventoryItem::new(ItemId::new(2), "XYZ-789", "Gadget", 42, "Aisle 1"),
        InventoryItem::new(ItemId::new(3), "DEF-456", "Tool", 0, "Aisle 2"),
        InventoryItem::new(ItemId::new(4), "GHI-789", "Sensor", 5, "Aisle 4"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::StockStatus;
    use stockroom_core::Entity;

    #[test]
    fn seed_has_four_items_in_id_order() {
        let inventory = sample_inventory().unwrap();
        let ids: Vec<ItemId> = inventory.iter().map(|i| *i.id()).collect();
        assert_eq!(ids, (1..=4).map(ItemId::new).collect::<Vec<_>>());
    }

    #[test]
    fn seed_covers_every_status() {
        let statuses: Vec<StockStatus> = sample_inventory()
            .unwrap()
            .iter()
            .map(|i| i.status())
            .collect();
        assert_eq!(
            statuses,
            vec![
                StockStatus::InStock,
                StockStatus::InStock,
                StockStatus::OutOfStock,
                StockStatus::LowStock,
            ]
        );
    }
}
