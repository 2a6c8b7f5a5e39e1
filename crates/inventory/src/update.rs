//! Manual quantity updates submitted from the dashboard form.

use serde::{Deserialize, Serialize};
use stockroom_core::DomainResult;

use crate::quantity::Quantity;

/// Set the quantity of every item whose SKU equals `sku` (exact, case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityUpdate {
    pub sku: String,
    pub quantity: Quantity,
}

impl QuantityUpdate {
    pub fn new(sku: impl Into<String>, quantity: impl Into<Quantity>) -> Self {
        Self {
            sku: sku.into(),
            quantity: quantity.into(),
        }
    }
}

/// How the textual quantity field is turned into a [`Quantity`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityParsing {
    /// Forward whatever parses, `NotANumber` included. Never fails.
    #[default]
    Lenient,
    /// Only whole non-negative numbers are accepted.
    Strict,
}

impl QuantityParsing {
    pub fn parse(self, input: &str) -> DomainResult<Quantity> {
        match self {
            QuantityParsing::Lenient => Ok(Quantity::parse_lenient(input)),
            QuantityParsing::Strict => Quantity::parse_strict(input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_mode_never_fails() {
        assert_eq!(QuantityParsing::Lenient.parse("oops"), Ok(Quantity::NotANumber));
        assert_eq!(QuantityParsing::Lenient.parse("3"), Ok(Quantity::Units(3)));
    }

    #[test]
    fn strict_mode_rejects_garbage() {
        assert!(QuantityParsing::Strict.parse("oops").is_err());
        assert_eq!(QuantityParsing::Strict.parse("3"), Ok(Quantity::Units(3)));
    }

    #[test]
    fn default_is_lenient() {
        assert_eq!(QuantityParsing::default(), QuantityParsing::Lenient);
    }
}
