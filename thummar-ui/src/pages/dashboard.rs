//! Dashboard Page
//!
//! Title, date range, KPI cards, the two monthly charts and the orders table.
//! While the store is pending, skeletons stand in for KPIs, charts and rows.

use leptos::*;
use thummar::store::{DateRange, LoadState};
use thummar::view::view_title;

use crate::components::{
    ChartKind, ChartSkeleton, KpiCard, KpiSkeleton, MonthlyChart, OrdersTable, RowSkeleton,
};
use crate::state::global::use_global_state;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_global_state();

    let title = create_memo(move |_| state.store.with(|s| view_title(s.current_view())));
    let loading = create_memo(move |_| state.store.with(|s| s.load_state() == LoadState::Pending));
    let kpis = create_memo(move |_| state.store.with(|s| s.kpis().to_vec()));

    view! {
        <div class="flex-1 overflow-auto p-6">
            // Page header
            <div class="mb-6 flex items-start justify-between">
                <div>
                    <h1 class="text-3xl font-bold text-gray-900 dark:text-white">{title}</h1>
                    <p class="text-gray-500 mt-1">"Welcome back! Here's what's happening."</p>
                </div>
                <DateRangeSelect />
            </div>

            // KPI cards
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
                {move || {
                    if loading.get() {
                        (0..4).map(|_| view! { <KpiSkeleton /> }).collect_view()
                    } else {
                        kpis.get()
                            .into_iter()
                            .map(|kpi| view! { <KpiCard kpi=kpi /> })
                            .collect_view()
                    }
                }}
            </div>

            // Charts
            <div class="grid lg:grid-cols-2 gap-6 mb-8">
                <Show
                    when=move || !loading.get()
                    fallback=|| view! {
                        <ChartSkeleton />
                        <ChartSkeleton />
                    }
                >
                    <MonthlyChart kind=ChartKind::RevenueLine />
                    <MonthlyChart kind=ChartKind::OrdersBar />
                </Show>
            </div>

            // Orders
            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="bg-white dark:bg-gray-800 rounded-2xl shadow-sm">
                        <RowSkeleton count=5 />
                    </div>
                }
            >
                <OrdersTable />
            </Show>
        </div>
    }
}

/// Reporting window selector
#[component]
fn DateRangeSelect() -> impl IntoView {
    let state = use_global_state();
    let current = move || state.store.with(|s| s.date_range().code().to_string());

    view! {
        <select
            class="bg-white dark:bg-gray-700 dark:text-white border border-gray-200 dark:border-gray-600 rounded-lg px-3 py-2 text-sm"
            prop:value=current
            on:change=move |ev| {
                match event_target_value(&ev).parse::<DateRange>() {
                    Ok(range) => state.set_date_range(range),
                    Err(e) => web_sys::console::error_1(&e.into()),
                }
            }
        >
            {DateRange::all()
                .iter()
                .map(|range| view! { <option value=range.code()>{range.label()}</option> })
                .collect_view()}
        </select>
    }
}
