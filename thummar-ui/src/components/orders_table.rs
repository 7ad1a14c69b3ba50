//! Orders Table Component
//!
//! "Recent Orders" table filtered by the header search, with a CSV download
//! of the rows currently shown.

use leptos::*;
use thummar::export::orders_csv;
use thummar::store::{OrderRow, OrderStatus};
use wasm_bindgen::{JsCast, JsValue};

use crate::state::global::{use_global_state, GlobalState};

const COLUMNS: [&str; 6] = ["Order", "Customer", "Product", "Amount", "Status", "Date"];

/// Filtered orders table
#[component]
pub fn OrdersTable() -> impl IntoView {
    let state = use_global_state();

    let rows = create_memo(move |_| {
        state
            .store
            .with(|s| s.filtered_orders().into_iter().cloned().collect::<Vec<OrderRow>>())
    });

    view! {
        <div class="bg-white dark:bg-gray-800 rounded-2xl shadow-sm overflow-hidden">
            <div class="p-6 border-b border-gray-100 dark:border-gray-700 flex items-center justify-between">
                <h3 class="text-lg font-bold text-gray-900 dark:text-white">"Recent Orders"</h3>
                <button
                    class="px-4 py-2 text-sm rounded-lg border border-primary text-primary hover:bg-primary/10"
                    on:click=move |_| download_csv(state)
                >
                    "Export CSV"
                </button>
            </div>
            <div class="overflow-x-auto">
                <table class="w-full">
                    <thead class="bg-gray-50 dark:bg-gray-700/50">
                        <tr>
                            {COLUMNS.iter().map(|col| view! {
                                <th class="px-6 py-4 text-left text-xs font-semibold text-gray-500 dark:text-gray-400 uppercase">
                                    {*col}
                                </th>
                            }).collect_view()}
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-100 dark:divide-gray-700">
                        <For
                            each=move || rows.get()
                            key=|row| row.id
                            children=|row| view! { <OrderRowView row=row /> }
                        />
                    </tbody>
                </table>
                <Show when=move || rows.with(|r| r.is_empty())>
                    <p class="px-6 py-8 text-center text-gray-400">"No orders match your search"</p>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn OrderRowView(row: OrderRow) -> impl IntoView {
    view! {
        <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/30">
            <td class="px-6 py-4">
                <span class="font-mono text-sm font-medium text-primary">{row.order_number}</span>
            </td>
            <td class="px-6 py-4">
                <span class="text-gray-900 dark:text-white font-medium">{row.customer}</span>
            </td>
            <td class="px-6 py-4">
                <span class="text-gray-600 dark:text-gray-300">{row.product}</span>
            </td>
            <td class="px-6 py-4">
                <span class="font-medium text-gray-900 dark:text-white">{format!("${}", row.amount)}</span>
            </td>
            <td class="px-6 py-4">
                <span class=format!("px-3 py-1 rounded-full text-xs font-medium {}", status_badge(row.status))>
                    {row.status.to_string()}
                </span>
            </td>
            <td class="px-6 py-4">
                <span class="text-gray-500 dark:text-gray-400 text-sm">{row.date.to_string()}</span>
            </td>
        </tr>
    }
}

fn status_badge(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Completed => "bg-green-100 text-green-700",
        OrderStatus::Processing => "bg-blue-100 text-blue-700",
    }
}

/// Build a CSV of the visible rows and hand it to the browser as a download
fn download_csv(state: GlobalState) {
    let csv = match state.store.with_untracked(|s| orders_csv(s)) {
        Ok(csv) => csv,
        Err(e) => {
            state.show_error(&format!("Export failed: {}", e));
            return;
        }
    };

    match trigger_download(&csv, "thummar-orders.csv") {
        Ok(()) => state.show_success("Orders exported"),
        Err(e) => {
            web_sys::console::error_1(&e);
            state.show_error("Export failed");
        }
    }
}

fn trigger_download(content: &str, filename: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(
        &js_sys::Array::of1(&JsValue::from_str(content)),
        &options,
    )?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor = document.create_element("a")?;
    anchor.set_attribute("href", &url)?;
    anchor.set_attribute("download", filename)?;
    anchor.unchecked_ref::<web_sys::HtmlElement>().click();

    web_sys::Url::revoke_object_url(&url)
}
