//! Dashboard configuration.

use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use stockroom_inventory::QuantityParsing;

/// Id of the host-page element (`<script type="application/json">`) holding
/// an optional config override.
pub const CONFIG_ELEMENT_ID: &str = "stockroom-config";

/// Tunables for the dashboard shell. Every field has a default, so a partial
/// JSON document is a valid override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Page heading.
    pub title: String,
    /// Simulated fetch latency before the seed inventory appears.
    pub load_delay_ms: u64,
    /// Placeholder text of the product search field.
    pub search_placeholder: String,
    /// How the update form turns quantity text into a value.
    pub quantity_parsing: QuantityParsing,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "📦 Supply Chain Inventory".to_string(),
            load_delay_ms: 1000,
            search_placeholder: "🔍 Search by product...".to_string(),
            quantity_parsing: QuantityParsing::Lenient,
        }
    }
}

impl DashboardConfig {
    /// Parse a JSON override document.
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("failed to parse dashboard config JSON")
    }

    /// Resolve the effective config from an optional embedded override.
    ///
    /// A missing or blank override gives the defaults. So does an unparseable
    /// one, after logging a warning.
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
            None => Self::default(),
            Some(raw) => Self::from_json(raw).unwrap_or_else(|err| {
                tracing::warn!(error = ?err, "invalid dashboard config override; using defaults");
                Self::default()
            }),
        }
    }

    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }
}
