//! Thummar Analytics Dashboard
//!
//! Client-side analytics dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Marketing landing page with demo login
//! - KPI cards, revenue and order charts, filterable order table
//! - Dark mode and collapsible sidebar
//! - CSV download of the visible orders
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All data is synthesized in the browser by the `thummar`
//! store; there is no backend.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
