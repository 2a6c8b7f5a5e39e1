//! Leptos components for the dashboard page.

use leptos::*;

use stockroom_inventory::{QuantityParsing, QuantityUpdate, sample_inventory};

use crate::config::DashboardConfig;
use crate::form::UpdateFormState;
use crate::state::Dashboard;
use crate::view::{DashboardView, LOADING_MESSAGE, LowStockBanner, TABLE_COLUMNS, TableRow};

/// Application shell: owns the dashboard state and composes the page.
#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let load_delay = config.load_delay();
    let parsing = config.quantity_parsing;
    let placeholder = config.search_placeholder.clone();

    let dashboard = create_rw_signal(Dashboard::new(config));

    // Simulated fetch: fires once, cannot be cancelled.
    set_timeout(
        move || match sample_inventory() {
            Ok(inventory) => dashboard.update(|state| {
                if let Err(err) = state.finish_loading(inventory) {
                    tracing::debug!(error = %err, "initial load skipped");
                }
            }),
            Err(err) => tracing::error!(error = %err, "failed to build seed inventory"),
        },
        load_delay,
    );

    // Every section reads a slice of this one projection. The form and the
    // search input are built once and never re-created by state changes.
    let projection = create_memo(move |_| dashboard.with(Dashboard::project));
    let loading = create_memo(move |_| projection.with(DashboardView::is_loading));
    let heading = create_memo(move |_| projection.with(|view| view.heading().to_string()));
    let banner = create_memo(move |_| projection.with(DashboardView::banner));
    let rows = create_memo(move |_| projection.with(|view| view.rows().to_vec()));
    let search_term = create_memo(move |_| projection.with(|view| view.search_term().to_string()));

    let on_update = Callback::new(move |update: QuantityUpdate| {
        dashboard.update(|state| {
            state.apply_update(&update);
        });
    });
    let on_search = Callback::new(move |term: String| {
        dashboard.update(|state| state.set_search_term(term));
    });

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <div class="loading">{LOADING_MESSAGE}</div> }
        >
            <div class="App">
                <h1>{move || heading.get()}</h1>
                <LowStockAlert banner=banner/>
                <UpdateForm parsing=parsing on_update=on_update/>
                <SearchBox placeholder=placeholder.clone() term=search_term on_search=on_search/>
                <InventoryTable rows=rows/>
            </div>
        </Show>
    }
}

/// Low-stock notice; renders nothing when no item is low.
#[component]
fn LowStockAlert(#[prop(into)] banner: Signal<Option<LowStockBanner>>) -> impl IntoView {
    move || {
        banner.get().map(|banner| {
            view! {
                <div class="low-stock-alert">
                    <strong>"⚠️ Low Stock Alert:"</strong>
                    " "
                    {banner.message()}
                </div>
            }
        })
    }
}

/// SKU + quantity form emitting one update per submit.
#[component]
fn UpdateForm(
    parsing: QuantityParsing,
    #[prop(into)] on_update: Callback<QuantityUpdate>,
) -> impl IntoView {
    let form = create_rw_signal(UpdateFormState::default());

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let mut update = None;
        form.update(|state| update = state.submit(parsing));
        if let Some(update) = update {
            on_update.call(update);
        }
    };

    view! {
        <form class="update-form" on:submit=submit>
            <h3>"✏️ Update Inventory"</h3>
            <input
                placeholder="Enter SKU"
                prop:value=move || form.with(|state| state.sku.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|state| state.sku = value);
                }
            />
            <input
                placeholder="New Quantity"
                type="number"
                prop:value=move || form.with(|state| state.new_quantity.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|state| state.new_quantity = value);
                }
            />
            <button type="submit">"Update"</button>
        </form>
    }
}

/// Live product-name filter (no debounce).
#[component]
fn SearchBox(
    placeholder: String,
    #[prop(into)] term: Signal<String>,
    #[prop(into)] on_search: Callback<String>,
) -> impl IntoView {
    view! {
        <input
            type="text"
            class="search"
            placeholder=placeholder
            prop:value=move || term.get()
            on:input=move |ev| on_search.call(event_target_value(&ev))
        />
    }
}

#[component]
fn InventoryTable(#[prop(into)] rows: Signal<Vec<TableRow>>) -> impl IntoView {
    view! {
        <table class="inventory-table">
            <thead>
                <tr>
                    {TABLE_COLUMNS.iter().map(|column| view! { <th>{*column}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>
                {move || {
                    rows.get()
                        .into_iter()
                        .map(|row| {
                            let quantity_style = row.quantity_style();
                            let quantity = row.quantity.to_string();
                            let status_class = row.status.as_str();
                            let status_text = row.status_text();
                            view! {
                                <tr>
                                    <td>{row.sku}</td>
                                    <td>{row.product}</td>
                                    <td class="quantity" style=quantity_style>{quantity}</td>
                                    <td>{row.location}</td>
                                    <td class=status_class>{status_text}</td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}
