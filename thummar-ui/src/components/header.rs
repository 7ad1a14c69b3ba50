//! Header Component
//!
//! Sidebar toggle, order search, theme toggle and the signed-in user.

use leptos::*;

use crate::components::ThemeToggle;
use crate::state::global::use_global_state;

/// Dashboard header bar
#[component]
pub fn Header() -> impl IntoView {
    let state = use_global_state();

    let search = move || state.store.with(|s| s.search_query().to_string());
    let user = create_memo(move |_| state.store.with(|s| s.current_user().cloned()));

    view! {
        <header class="bg-white dark:bg-gray-800 border-b border-gray-100 dark:border-gray-700 px-6 py-4">
            <div class="flex items-center justify-between">
                <div class="flex items-center gap-4">
                    <button
                        class="p-2 rounded-lg hover:bg-gray-100 dark:hover:bg-gray-700 text-gray-600 dark:text-gray-300"
                        title="Toggle sidebar"
                        on:click=move |_| state.toggle_sidebar()
                    >
                        "☰"
                    </button>
                    <div class="relative">
                        <input
                            type="text"
                            placeholder="Search..."
                            class="pl-10 pr-4 py-2 rounded-xl border border-gray-200 dark:border-gray-600 dark:bg-gray-700 dark:text-white focus:ring-2 focus:ring-primary w-64"
                            prop:value=search
                            on:input=move |ev| state.set_search(event_target_value(&ev))
                        />
                        <span class="absolute left-3 top-1/2 -translate-y-1/2 text-gray-400">"🔍"</span>
                    </div>
                </div>

                <div class="flex items-center gap-4">
                    <ThemeToggle />
                    <div class="flex items-center gap-3 pl-4 border-l border-gray-200 dark:border-gray-700">
                        <div class="text-right">
                            <div class="font-medium text-gray-800 dark:text-white">
                                {move || user.get().map(|u| u.name).unwrap_or_default()}
                            </div>
                            <div class="text-xs text-gray-500 capitalize">
                                {move || user.get().map(|u| u.role).unwrap_or_default()}
                            </div>
                        </div>
                        <div class="w-10 h-10 rounded-full bg-primary/10 flex items-center justify-center text-xl">
                            {move || user.get().map(|u| u.avatar).unwrap_or_default()}
                        </div>
                    </div>
                </div>
            </div>
        </header>
    }
}
