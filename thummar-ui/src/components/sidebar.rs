//! Sidebar Component
//!
//! Brand, view navigation and logout. Labels hide when collapsed.

use leptos::*;
use thummar::store::View;

use crate::state::global::use_global_state;

/// Collapsible navigation sidebar
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_global_state();
    let open = create_memo(move |_| state.store.with(|s| s.sidebar_open()));

    view! {
        <aside class=move || {
            let width = if open.get() { "w-64" } else { "w-20" };
            format!(
                "bg-white dark:bg-gray-800 border-r border-gray-100 dark:border-gray-700 flex flex-col transition-all duration-300 {}",
                width
            )
        }>
            <div class="p-4 border-b border-gray-100 dark:border-gray-700">
                <div class="flex items-center gap-3">
                    <div class="w-10 h-10 rounded-xl bg-gradient-to-br from-primary to-primaryDark flex items-center justify-center text-white font-bold text-xl flex-shrink-0">
                        "T"
                    </div>
                    <Show when=move || open.get()>
                        <span class="font-bold text-lg text-gray-800 dark:text-white">"Thummar Analytics"</span>
                    </Show>
                </div>
            </div>

            <nav class="flex-1 p-4 space-y-2">
                {View::navigable()
                    .iter()
                    .map(|view| view! { <NavItem view=*view open=open /> })
                    .collect_view()}
            </nav>

            <div class="p-4 border-t border-gray-100 dark:border-gray-700">
                <button
                    class="w-full flex items-center gap-3 px-4 py-3 rounded-xl text-red-500 hover:bg-red-50 dark:hover:bg-red-900/20"
                    on:click=move |_| state.logout()
                >
                    <span class="w-6 text-center">"⎋"</span>
                    <Show when=move || open.get()>
                        <span class="font-medium">"Logout"</span>
                    </Show>
                </button>
            </div>
        </aside>
    }
}

/// Single navigation button
#[component]
fn NavItem(view: View, open: Memo<bool>) -> impl IntoView {
    let state = use_global_state();
    let is_active = create_memo(move |_| state.store.with(|s| s.current_view() == view));

    view! {
        <button
            on:click=move |_| state.set_view(view)
            class=move || {
                let base = "w-full flex items-center gap-3 px-4 py-3 rounded-xl transition-all";
                if is_active.get() {
                    format!("{} bg-primary/10 text-primary", base)
                } else {
                    format!("{} text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700", base)
                }
            }
        >
            <span class="w-6 text-center flex-shrink-0">{nav_icon(view)}</span>
            <Show when=move || open.get()>
                <span class="font-medium">{view.label()}</span>
            </Show>
        </button>
    }
}

fn nav_icon(view: View) -> &'static str {
    match view {
        View::Dashboard => "📊",
        View::Sales => "📈",
        View::Customers => "👥",
        View::Inventory => "📦",
        View::Users => "⚙",
        View::Landing => "🏠",
    }
}
