//! Global Application State
//!
//! The dashboard `Store` wrapped in a Leptos signal, plus toast messages.
//! Components read through `with` and mutate only through the methods here,
//! which forward to the store's own operations.

use leptos::*;
use thummar::store::{DateRange, Store, User, View};

/// How long the skeletons stay up after a view switch
pub const LOADING_DELAY_MS: u32 = 350;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Session, search, date range and dataset
    pub store: RwSignal<Store>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

/// Fetch the global state from context
pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}

impl GlobalState {
    pub fn new() -> Self {
        Self {
            store: create_rw_signal(Store::new()),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
        }
    }

    /// Sign in as the demo user; the first dataset is ready on return
    pub fn login_demo(&self) {
        self.store.update(|store| {
            store.login(User::demo());
            store.refresh_if_pending();
        });
    }

    pub fn logout(&self) {
        self.store.update(|store| store.logout());
    }

    /// Switch view; fresh data follows once the loading delay has passed
    pub fn set_view(&self, view: View) {
        self.store.update(|store| store.set_view(view));
        self.schedule_refresh();
    }

    pub fn toggle_dark_mode(&self) {
        self.store.update(|store| store.toggle_dark_mode());
    }

    pub fn toggle_sidebar(&self) {
        self.store.update(|store| store.toggle_sidebar());
    }

    pub fn set_search(&self, query: String) {
        self.store.update(|store| store.set_search(query));
    }

    pub fn set_date_range(&self, range: DateRange) {
        self.store.update(|store| store.set_date_range(range));
    }

    /// Generate data for a pending store after a short delay
    fn schedule_refresh(&self) {
        let store = self.store;
        gloo_timers::callback::Timeout::new(LOADING_DELAY_MS, move || {
            store.update(|store| {
                store.refresh_if_pending();
            });
        })
        .forget();
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thummar::store::LoadState;

    #[test]
    fn test_login_demo_shows_data_immediately() {
        let runtime = create_runtime();
        let state = GlobalState::new();

        state.login_demo();

        state.store.with(|s| {
            assert!(s.is_authenticated());
            assert_eq!(s.current_view(), View::Dashboard);
            assert_eq!(s.load_state(), LoadState::Ready);
            assert_eq!(s.kpis().len(), 4);
            assert_eq!(s.orders().len(), 10);
        });

        runtime.dispose();
    }

    #[test]
    fn test_theme_and_search_forward_to_store() {
        let runtime = create_runtime();
        let state = GlobalState::new();

        state.toggle_dark_mode();
        state.set_search("Carol".to_string());
        state.set_date_range(DateRange::Last7Days);

        state.store.with(|s| {
            assert!(s.dark_mode());
            assert_eq!(s.search_query(), "Carol");
            assert_eq!(s.date_range(), DateRange::Last7Days);
        });

        runtime.dispose();
    }
}
