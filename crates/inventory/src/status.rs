//! Stock-status classification.

use serde::{Deserialize, Serialize};

/// Quantities strictly below this (and above zero) are "low stock".
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Stock band an item falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    /// Classify a unit count.
    ///
    /// - `0` → [`StockStatus::OutOfStock`]
    /// - below [`LOW_STOCK_THRESHOLD`] → [`StockStatus::LowStock`]
    /// - otherwise → [`StockStatus::InStock`]
    ///
    /// Negative counts only arise from unvalidated form input; they fall in
    /// the low band.
    pub fn classify(units: i64) -> Self {
        if units == 0 {
            StockStatus::OutOfStock
        } else if units < LOW_STOCK_THRESHOLD {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Stable key (CSS class, serde).
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "out_of_stock",
            StockStatus::LowStock => "low_stock",
            StockStatus::InStock => "in_stock",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::InStock => "In Stock",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "🔴",
            StockStatus::LowStock => "🟡",
            StockStatus::InStock => "🟢",
        }
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.icon(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_boundaries() {
        assert_eq!(StockStatus::classify(0), StockStatus::OutOfStock);
        assert_eq!(StockStatus::classify(5), StockStatus::LowStock);
        assert_eq!(StockStatus::classify(9), StockStatus::LowStock);
        assert_eq!(StockStatus::classify(10), StockStatus::InStock);
        assert_eq!(StockStatus::classify(150), StockStatus::InStock);
    }

    #[test]
    fn display_combines_icon_and_label() {
        assert_eq!(StockStatus::OutOfStock.to_string(), "🔴 Out of Stock");
        assert_eq!(StockStatus::LowStock.to_string(), "🟡 Low Stock");
        assert_eq!(StockStatus::InStock.to_string(), "🟢 In Stock");
    }

    #[test]
    fn negative_counts_read_as_low_stock() {
        assert_eq!(StockStatus::classify(-3), StockStatus::LowStock);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: every count at or above the threshold is in stock.
            #[test]
            fn at_or_above_threshold_is_in_stock(units in LOW_STOCK_THRESHOLD..i64::MAX) {
                prop_assert_eq!(StockStatus::classify(units), StockStatus::InStock);
            }

            /// Property: every count strictly inside (0, threshold) is low stock.
            #[test]
            fn between_zero_and_threshold_is_low_stock(units in 1i64..LOW_STOCK_THRESHOLD) {
                prop_assert_eq!(StockStatus::classify(units), StockStatus::LowStock);
            }
        }
    }
}
