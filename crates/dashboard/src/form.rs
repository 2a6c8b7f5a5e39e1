//! Update-form input state.

use stockroom_inventory::{QuantityParsing, QuantityUpdate};

/// The two text fields of the update form, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateFormState {
    pub sku: String,
    pub new_quantity: String,
}

impl UpdateFormState {
    /// Turn the current input into an update and clear both fields.
    ///
    /// Fields are cleared whether or not the input produced an update. With
    /// [`QuantityParsing::Lenient`] an update is always produced, carrying
    /// `NotANumber` when the quantity text has no leading digits.
    pub fn submit(&mut self, parsing: QuantityParsing) -> Option<QuantityUpdate> {
        let sku = std::mem::take(&mut self.sku);
        let raw_quantity = std::mem::take(&mut self.new_quantity);

        match parsing.parse(&raw_quantity) {
            Ok(quantity) => {
                if quantity.is_nan() {
                    tracing::warn!(%sku, input = %raw_quantity, "forwarding non-numeric quantity");
                }
                Some(QuantityUpdate { sku, quantity })
            }
            Err(err) => {
                tracing::warn!(%sku, input = %raw_quantity, error = %err, "quantity update rejected");
                None
            }
        }
    }
}
