//! Leptos frontend (client-side rendering in the browser).

pub mod app;

use leptos::*;
use wasm_bindgen::prelude::*;

use crate::config::{CONFIG_ELEMENT_ID, DashboardConfig};
use app::App;

/// WASM entry point for the frontend.
/// This is called automatically when the WASM module loads.
#[wasm_bindgen(start)]
pub fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();
    stockroom_observability::init();

    let config = DashboardConfig::resolve(embedded_config().as_deref());
    mount_to_body(move || view! { <App config=config/> });
}

/// Text of the host page's config override element, if present.
fn embedded_config() -> Option<String> {
    document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
}
