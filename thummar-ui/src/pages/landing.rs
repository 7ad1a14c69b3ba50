//! Landing Page
//!
//! Public marketing page shown before sign-in. Every call to action signs
//! in as the demo user.

use leptos::*;
use thummar::view::landing::{
    BADGE, BRAND, COPYRIGHT, CTA_BODY, CTA_TITLE, FEATURES, FEATURES_SUBTITLE, FEATURES_TITLE,
    HERO_STATS, PREVIEW_HOST, PREVIEW_STATS, SUBTITLE,
};

use crate::components::ThemeToggle;
use crate::state::global::use_global_state;

const PREVIEW_BARS: usize = 12;

/// Landing page component
#[component]
pub fn Landing() -> impl IntoView {
    let state = use_global_state();
    let login = move |_: ev::MouseEvent| state.login_demo();

    view! {
        <div class="min-h-full bg-gradient-to-br from-gray-50 to-white dark:from-gray-900 dark:to-gray-800">
            // Navigation
            <nav class="max-w-7xl mx-auto px-6 py-4 flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <div class="w-10 h-10 rounded-xl bg-gradient-to-br from-primary to-primaryDark flex items-center justify-center text-white font-bold text-xl">
                        "T"
                    </div>
                    <span class="font-bold text-xl text-gray-900 dark:text-white">{BRAND}</span>
                </div>
                <div class="flex items-center gap-4">
                    <ThemeToggle />
                    <button class="px-4 py-2 text-gray-600 dark:text-gray-300 hover:text-primary font-medium" on:click=login>
                        "Login"
                    </button>
                    <button class="px-6 py-2 bg-gradient-to-r from-primary to-primaryDark text-white rounded-lg font-medium" on:click=login>
                        "Get Started"
                    </button>
                </div>
            </nav>

            // Hero
            <section class="max-w-7xl mx-auto px-6 pt-16 pb-20 grid lg:grid-cols-2 gap-12 items-center">
                <div>
                    <div class="inline-flex items-center gap-2 px-4 py-2 bg-primary/10 rounded-full text-primary font-medium text-sm mb-6">
                        <span>{BADGE.0}</span>
                        {BADGE.1}
                    </div>
                    <h1 class="text-5xl lg:text-6xl font-bold text-gray-900 dark:text-white leading-tight mb-6">
                        <span class="bg-gradient-to-r from-primary to-primaryDark bg-clip-text text-transparent">"Turning Data"</span>
                        <br />
                        "into "
                        <span class="text-primary">"Decisions"</span>
                    </h1>
                    <p class="text-xl text-gray-600 dark:text-gray-300 mb-8">{SUBTITLE}</p>
                    <div class="flex flex-wrap gap-4">
                        <button class="px-8 py-4 bg-gradient-to-r from-primary to-primaryDark text-white rounded-xl font-semibold text-lg" on:click=login>
                            "Start Free Trial →"
                        </button>
                        <button class="px-8 py-4 border-2 border-primary text-primary rounded-xl font-semibold text-lg hover:bg-primary/10" on:click=login>
                            "View Demo"
                        </button>
                    </div>
                    <div class="flex items-center gap-8 mt-10">
                        {HERO_STATS
                            .iter()
                            .map(|(value, label)| view! {
                                <div class="text-center">
                                    <div class="text-3xl font-bold text-gray-900 dark:text-white">{*value}</div>
                                    <div class="text-gray-500 text-sm">{*label}</div>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
                <DashboardPreview />
            </section>

            // Features
            <section class="py-20 px-6 bg-white/50 dark:bg-gray-800/50">
                <div class="max-w-7xl mx-auto">
                    <div class="text-center mb-16">
                        <h2 class="text-4xl font-bold text-gray-900 dark:text-white mb-4">{FEATURES_TITLE}</h2>
                        <p class="text-xl text-gray-600 dark:text-gray-300">{FEATURES_SUBTITLE}</p>
                    </div>
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {FEATURES
                            .iter()
                            .map(|(icon, title, description)| view! {
                                <div class="bg-white dark:bg-gray-800 rounded-2xl p-8 shadow-lg hover:shadow-xl">
                                    <div class="w-14 h-14 bg-primary/10 rounded-xl flex items-center justify-center text-3xl mb-6">{*icon}</div>
                                    <h3 class="text-xl font-bold text-gray-900 dark:text-white mb-3">{*title}</h3>
                                    <p class="text-gray-600 dark:text-gray-300">{*description}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            // Call to action
            <section class="py-20 px-6">
                <div class="max-w-4xl mx-auto text-center">
                    <div class="bg-gradient-to-br from-primary to-primaryDark rounded-3xl p-12 text-white">
                        <h2 class="text-4xl font-bold mb-4">{CTA_TITLE}</h2>
                        <p class="text-xl opacity-90 mb-8">{CTA_BODY}</p>
                        <button class="px-8 py-4 bg-white text-primary rounded-xl font-semibold text-lg hover:bg-gray-100" on:click=login>
                            "Start Free Trial"
                        </button>
                    </div>
                </div>
            </section>

            <footer class="bg-gray-900 text-white py-12 px-6">
                <div class="max-w-7xl mx-auto flex flex-col md:flex-row justify-between items-center gap-6">
                    <div class="flex items-center gap-3">
                        <div class="w-10 h-10 rounded-xl bg-primary flex items-center justify-center text-white font-bold text-xl">"T"</div>
                        <span class="font-bold text-xl">{BRAND}</span>
                    </div>
                    <p class="text-gray-400">{COPYRIGHT}</p>
                </div>
            </footer>
        </div>
    }
}

/// Decorative mini dashboard beside the hero text
#[component]
fn DashboardPreview() -> impl IntoView {
    // Heights are drawn once per mount and carry no meaning
    let heights: Vec<f64> = (0..PREVIEW_BARS)
        .map(|_| 30.0 + js_sys::Math::random() * 70.0)
        .collect();

    view! {
        <div class="relative bg-white dark:bg-gray-800 rounded-3xl shadow-2xl p-6 border border-gray-100 dark:border-gray-700">
            <div class="flex items-center justify-between mb-6">
                <div class="flex items-center gap-2">
                    <div class="w-3 h-3 rounded-full bg-red-400" />
                    <div class="w-3 h-3 rounded-full bg-yellow-400" />
                    <div class="w-3 h-3 rounded-full bg-green-400" />
                </div>
                <div class="text-xs text-gray-400 font-mono">{PREVIEW_HOST}</div>
            </div>
            <div class="grid grid-cols-3 gap-3 mb-4">
                {PREVIEW_STATS
                    .iter()
                    .map(|(icon, value, label)| view! {
                        <div class="bg-primary/10 rounded-xl p-4">
                            <div class="text-2xl mb-2">{*icon}</div>
                            <div class="font-bold text-gray-800 dark:text-white">{*value}</div>
                            <div class="text-xs text-gray-500">{*label}</div>
                        </div>
                    })
                    .collect_view()}
            </div>
            <div class="bg-gray-50 dark:bg-gray-700/50 rounded-xl p-4 h-32 flex items-end gap-1">
                {heights
                    .into_iter()
                    .map(|h| view! {
                        <div class="flex-1 bg-gradient-to-t from-primary to-primary/60 rounded-t" style=format!("height: {:.0}%", h) />
                    })
                    .collect_view()}
            </div>
            <div class="flex gap-4 text-xs text-gray-400 mt-4">
                <span class="flex items-center gap-1"><span class="w-2 h-2 bg-primary rounded-full" />"Revenue"</span>
                <span class="flex items-center gap-1"><span class="w-2 h-2 bg-purple-400 rounded-full" />"Orders"</span>
            </div>
        </div>
    }
}
