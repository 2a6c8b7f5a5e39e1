//! `stockroom-dashboard`
//!
//! **Responsibility:** single-page inventory dashboard.
//!
//! This crate provides:
//! - The application shell state (inventory, search term, loading flag)
//! - Update-form input handling
//! - Pure view projections of that state
//! - A Leptos client-side frontend rendering those projections (wasm32 only)
//!
//! Nothing is persisted; state lives for the browser session.

pub mod config;
pub mod form;
pub mod state;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use config::{CONFIG_ELEMENT_ID, DashboardConfig};
pub use form::UpdateFormState;
pub use state::{Dashboard, DashboardError};
pub use view::{DashboardView, LowStockBanner, ReadyView, TableRow};
