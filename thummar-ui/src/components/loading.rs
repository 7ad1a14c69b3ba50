//! Loading Component
//!
//! Skeleton placeholders shown while the dataset is pending.

use leptos::*;

/// Skeleton loader for a KPI card
#[component]
pub fn KpiSkeleton() -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 rounded-2xl p-6 shadow-sm animate-pulse">
            <div class="h-4 w-24 bg-gray-200 dark:bg-gray-700 rounded mb-4" />
            <div class="h-8 w-32 bg-gray-200 dark:bg-gray-700 rounded mb-2" />
            <div class="h-4 w-16 bg-gray-200 dark:bg-gray-700 rounded" />
        </div>
    }
}

/// Skeleton loader for chart
#[component]
pub fn ChartSkeleton() -> impl IntoView {
    view! {
        <div class="h-[280px] bg-gray-100 dark:bg-gray-700 rounded-xl animate-pulse" />
    }
}

/// Skeleton loader for table rows
#[component]
pub fn RowSkeleton(
    #[prop(default = 5)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="p-6 space-y-3 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-gray-100 dark:bg-gray-700 rounded h-10" />
            }).collect_view()}
        </div>
    }
}
