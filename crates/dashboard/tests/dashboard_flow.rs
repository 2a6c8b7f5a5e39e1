//! Black-box walk through the dashboard shell: load, search, update.

use stockroom_dashboard::{Dashboard, DashboardConfig, DashboardView, UpdateFormState};
use stockroom_inventory::{Quantity, QuantityParsing, QuantityUpdate, StockStatus, sample_inventory};

fn loaded_dashboard() -> Dashboard {
    let mut dashboard = Dashboard::new(DashboardConfig::default());
    dashboard
        .finish_loading(sample_inventory().expect("seed inventory"))
        .expect("first load");
    dashboard
}

fn row_skus(dashboard: &Dashboard) -> Vec<String> {
    dashboard.rows().into_iter().map(|row| row.sku).collect()
}

#[test]
fn only_loading_indicator_before_the_load_completes() {
    let dashboard = Dashboard::new(DashboardConfig::default());
    let view = dashboard.project();
    assert!(view.is_loading());
    assert!(view.ready().is_none());
    assert_eq!(view.heading(), "");
    assert_eq!(view.banner(), None);
    assert!(view.rows().is_empty());
}

#[test]
fn load_reveals_full_ui_exactly_once() {
    let mut dashboard = Dashboard::new(DashboardConfig::default());
    dashboard.finish_loading(sample_inventory().unwrap()).unwrap();

    let view = dashboard.project();
    let DashboardView::Ready(ready) = &view else {
        panic!("dashboard should be ready after the load");
    };
    assert_eq!(ready.rows.len(), 4);
    assert_eq!(view.heading(), "📦 Supply Chain Inventory");
    assert_eq!(view.banner().map(|banner| banner.count), Some(1));
    assert_eq!(view.search_term(), "");
    let skus: Vec<&str> = view.rows().iter().map(|row| row.sku.as_str()).collect();
    assert_eq!(skus, vec!["ABC-123", "XYZ-789", "DEF-456", "GHI-789"]);

    assert!(dashboard.finish_loading(sample_inventory().unwrap()).is_err());
    assert_eq!(dashboard.project(), view);
}

#[test]
fn banner_reports_one_low_stock_item_for_the_seed() {
    let dashboard = loaded_dashboard();
    let banner = dashboard.banner().expect("banner should be shown");
    assert_eq!(banner.count, 1);
    assert_eq!(banner.message(), "1 items need reorder");
}

#[test]
fn search_filters_by_product_case_insensitively() {
    let mut dashboard = loaded_dashboard();

    for term in ["tool", "TOOL", "ToOl"] {
        dashboard.set_search_term(term);
        let rows = dashboard.rows();
        assert_eq!(rows.len(), 1, "term {term:?}");
        assert_eq!(rows[0].sku, "DEF-456");
        assert_eq!(rows[0].product, "Tool");
    }

    dashboard.set_search_term("");
    assert_eq!(
        row_skus(&dashboard),
        vec!["ABC-123", "XYZ-789", "DEF-456", "GHI-789"]
    );
}

#[test]
fn submitted_update_changes_only_the_matching_row() {
    let mut dashboard = loaded_dashboard();
    let mut form = UpdateFormState {
        sku: "XYZ-789".to_string(),
        new_quantity: "3".to_string(),
    };

    let update = form.submit(QuantityParsing::Lenient).unwrap();
    assert_eq!(dashboard.apply_update(&update), 1);
    assert_eq!(form, UpdateFormState::default());

    let rows = dashboard.rows();
    assert_eq!(
        row_skus(&dashboard),
        vec!["ABC-123", "XYZ-789", "DEF-456", "GHI-789"]
    );
    assert_eq!(rows[1].quantity, Quantity::Units(3));
    assert_eq!(rows[1].status, StockStatus::LowStock);
    assert_eq!(rows[0].quantity, Quantity::Units(150));
    assert_eq!(rows[2].quantity, Quantity::Units(0));
    assert_eq!(rows[3].quantity, Quantity::Units(5));
    assert_eq!(dashboard.banner().unwrap().count, 2);

    let before = dashboard.inventory().clone();
    assert_eq!(dashboard.apply_update(&QuantityUpdate::new("ZZZ-000", 7)), 0);
    assert_eq!(dashboard.inventory(), &before);
}

#[test]
fn repeating_an_update_is_idempotent() {
    let mut once = loaded_dashboard();
    once.apply_update(&QuantityUpdate::new("ABC-123", 150));

    let mut twice = loaded_dashboard();
    twice.apply_update(&QuantityUpdate::new("ABC-123", 150));
    twice.apply_update(&QuantityUpdate::new("ABC-123", 150));

    assert_eq!(once.inventory(), twice.inventory());
    assert_eq!(once.inventory(), &sample_inventory().unwrap());
}

#[test]
fn non_numeric_quantity_is_stored_and_rendered_as_nan() {
    let mut dashboard = loaded_dashboard();
    let mut form = UpdateFormState {
        sku: "GHI-789".to_string(),
        new_quantity: "a few".to_string(),
    };
    let update = form.submit(QuantityParsing::Lenient).unwrap();
    dashboard.apply_update(&update);

    let rows = dashboard.rows();
    let sensor = &rows[3];
    assert_eq!(sensor.quantity.to_string(), "NaN");
    assert_eq!(sensor.status, StockStatus::InStock);
    assert!(!sensor.is_bold());
    assert!(dashboard.banner().is_none());
}

#[test]
fn strict_parsing_keeps_inventory_untouched_on_bad_input() {
    let dashboard = loaded_dashboard();
    let mut form = UpdateFormState {
        sku: "GHI-789".to_string(),
        new_quantity: "a few".to_string(),
    };
    assert!(form.submit(QuantityParsing::Strict).is_none());
    assert_eq!(form, UpdateFormState::default());
    assert_eq!(dashboard.inventory(), &sample_inventory().unwrap());
}
