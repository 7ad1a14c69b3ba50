//! KPI Card Component
//!
//! Displays a single KPI with its formatted value and change vs last period.

use leptos::*;
use thummar::store::Kpi;
use thummar::view::{format_change, format_with_affixes, Trend};

/// KPI card component
#[component]
pub fn KpiCard(kpi: Kpi) -> impl IntoView {
    let value = format_with_affixes(kpi.value, kpi.prefix.as_deref(), kpi.suffix.as_deref());
    let (change, trend) = format_change(kpi.change);
    let trend_class = match trend {
        Trend::Up => "text-green-500",
        Trend::Down => "text-red-500",
    };

    view! {
        <div class="bg-white dark:bg-gray-800 rounded-2xl p-6 shadow-sm hover:shadow-md transition-shadow">
            <div class="flex items-center justify-between mb-4">
                <span class="text-sm font-medium text-gray-500 dark:text-gray-400">{kpi.title}</span>
                <span class=format!("text-2xl w-10 h-10 rounded-xl bg-gradient-to-br {} flex items-center justify-center", kpi.color)>
                    {kpi.icon}
                </span>
            </div>

            <div class="text-3xl font-bold text-gray-900 dark:text-white mb-2">{value}</div>

            <div class="flex items-center gap-2">
                <span class=format!("text-sm font-medium flex items-center gap-1 {}", trend_class)>
                    {trend.arrow()}
                    {change}
                </span>
                <span class="text-gray-400 text-sm">"vs last period"</span>
            </div>
        </div>
    }
}
