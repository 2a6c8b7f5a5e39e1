use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, ItemId};

use crate::quantity::Quantity;
use crate::status::StockStatus;

/// Entity: InventoryItem.
///
/// `sku` is the human-facing lookup key for updates; it is not required to be
/// unique. `id` is the only identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    id: ItemId,
    sku: String,
    product: String,
    quantity: Quantity,
    location: String,
}

impl InventoryItem {
    pub fn new(
        id: ItemId,
        sku: impl Into<String>,
        product: impl Into<String>,
        quantity: impl Into<Quantity>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id,
            sku: sku.into(),
            product: product.into(),
            quantity: quantity.into(),
            location: location.into(),
        }
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn status(&self) -> StockStatus {
        self.quantity.status()
    }

    /// Case-insensitive substring match against the product name.
    ///
    /// `needle_lower` must already be lowercased; an empty needle matches.
    pub fn product_matches(&self, needle_lower: &str) -> bool {
        self.product.to_lowercase().contains(needle_lower)
    }

    pub(crate) fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
