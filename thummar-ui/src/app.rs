//! App Root Component
//!
//! Provides global state, keeps the `dark` class on `<html>` in sync with the
//! store, and shows either the landing page or the dashboard shell.

use leptos::*;

use crate::components::{Header, Sidebar, Toast};
use crate::pages::{Dashboard, Landing};
use crate::state::global::{provide_global_state, use_global_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();
    let state = use_global_state();

    let dark_mode = create_memo(move |_| state.store.with(|s| s.dark_mode()));
    let authenticated = create_memo(move |_| state.store.with(|s| s.is_authenticated()));

    create_effect(move |_| apply_theme(dark_mode.get()));

    view! {
        <div class="h-full">
            <Show when=move || authenticated.get() fallback=|| view! { <Landing /> }>
                <div class="h-full flex">
                    <Sidebar />
                    <div class="flex-1 flex flex-col overflow-hidden">
                        <Header />
                        <Dashboard />
                    </div>
                </div>
            </Show>

            // Toast notifications
            <Toast />
        </div>
    }
}

/// Toggle the Tailwind `dark` class on the document element
fn apply_theme(dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    if let Err(e) = root.class_list().toggle_with_force("dark", dark) {
        web_sys::console::error_1(&format!("Failed to apply theme: {:?}", e).into());
    }
}
