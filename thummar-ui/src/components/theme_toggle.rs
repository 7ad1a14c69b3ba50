//! Dark/light theme toggle button

use leptos::*;

use crate::state::global::use_global_state;

/// Sun in dark mode, moon in light mode; each click flips the store's theme
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let state = use_global_state();
    let is_dark = create_memo(move |_| state.store.with(|s| s.dark_mode()));

    view! {
        <button
            class="p-2 rounded-lg hover:bg-gray-100 dark:hover:bg-gray-700"
            title="Toggle theme"
            on:click=move |_| state.toggle_dark_mode()
        >
            {move || {
                if is_dark.get() {
                    view! { <span class="text-xl text-yellow-500">"\u{2600}"</span> }
                } else {
                    view! { <span class="text-xl text-gray-600">"\u{263E}"</span> }
                }
            }}
        </button>
    }
}
