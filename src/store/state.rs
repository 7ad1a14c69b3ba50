//! The dashboard store
//!
//! `Store` owns the session, the search query, the selected date range, the
//! load state and the generated dataset. It is passed explicitly to whatever
//! renders it; the only way to change it is through the methods below, each
//! of which is a total, synchronous state transition.

use super::generator;
use super::random::{RandomSource, StdRandom};
use super::types::{
    ChartData, Dataset, DateRange, Kpi, LoadState, OrderRow, Session, User, View,
};
use crate::view::{filter_orders, monthly_series, MonthPoint};

/// Notification sent to subscribers after each mutation
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    LoggedIn(User),
    LoggedOut,
    ViewChanged(View),
    DarkModeToggled(bool),
    SidebarToggled(bool),
    SearchChanged(String),
    DateRangeChanged(DateRange),
    DataGenerated,
}

/// Handle returned by [`Store::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// Initial preferences applied when the store is created
#[derive(Debug, Clone, Copy, Default)]
pub struct Preferences {
    pub dark_mode: bool,
    pub sidebar_open: bool,
    pub date_range: DateRange,
}

/// Single owned state container for the dashboard
pub struct Store<R: RandomSource = StdRandom> {
    session: Session,
    search_query: String,
    date_range: DateRange,
    load_state: LoadState,
    data: Dataset,
    rng: R,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Store<StdRandom> {
    /// Store backed by an entropy-seeded generator
    pub fn new() -> Self {
        Self::with_source(StdRandom::from_entropy())
    }
}

impl Default for Store<StdRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> Store<R> {
    /// Store with default session state and the given randomness source
    pub fn with_source(rng: R) -> Self {
        Self {
            session: Session::default(),
            search_query: String::new(),
            date_range: DateRange::default(),
            load_state: LoadState::Pending,
            data: Dataset::default(),
            rng,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Apply theme, sidebar and date-range preferences to a fresh store
    pub fn with_preferences(mut self, prefs: Preferences) -> Self {
        self.session.dark_mode = prefs.dark_mode;
        self.session.sidebar_open = prefs.sidebar_open;
        self.date_range = prefs.date_range;
        self
    }

    // ===== Mutators =====

    /// Sign in and land on the dashboard; data becomes pending
    pub fn login(&mut self, user: User) {
        tracing::debug!(user = %user.name, "Login");
        self.session.is_authenticated = true;
        self.session.current_user = Some(user.clone());
        self.session.current_view = View::Dashboard;
        self.load_state = LoadState::Pending;
        self.emit(StoreEvent::LoggedIn(user));
    }

    /// Sign out and return to the landing page
    ///
    /// The generated dataset is kept; the next login regenerates it.
    pub fn logout(&mut self) {
        tracing::debug!("Logout");
        self.session.is_authenticated = false;
        self.session.current_user = None;
        self.session.current_view = View::Landing;
        self.emit(StoreEvent::LoggedOut);
    }

    pub fn set_view(&mut self, view: View) {
        tracing::debug!(view = %view, "Switching view");
        self.session.current_view = view;
        self.load_state = LoadState::Pending;
        self.emit(StoreEvent::ViewChanged(view));
    }

    pub fn toggle_dark_mode(&mut self) {
        self.session.dark_mode = !self.session.dark_mode;
        let dark = self.session.dark_mode;
        self.emit(StoreEvent::DarkModeToggled(dark));
    }

    pub fn toggle_sidebar(&mut self) {
        self.session.sidebar_open = !self.session.sidebar_open;
        let open = self.session.sidebar_open;
        self.emit(StoreEvent::SidebarToggled(open));
    }

    /// Store the search text exactly as typed
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        let query = self.search_query.clone();
        self.emit(StoreEvent::SearchChanged(query));
    }

    pub fn set_date_range(&mut self, range: DateRange) {
        self.date_range = range;
        self.emit(StoreEvent::DateRangeChanged(range));
    }

    /// Replace the dataset and mark it ready in one step
    pub fn generate_data(&mut self) {
        self.data = generator::generate(&mut self.rng);
        self.load_state = LoadState::Ready;
        tracing::info!(
            view = %self.session.current_view,
            orders = self.data.orders.len(),
            "Dataset regenerated"
        );
        self.emit(StoreEvent::DataGenerated);
    }

    /// Generate only if a view change left the data pending
    pub fn refresh_if_pending(&mut self) -> bool {
        if self.load_state == LoadState::Pending {
            self.generate_data();
            true
        } else {
            false
        }
    }

    // ===== Subscriptions =====

    /// Register a listener called after every mutation
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn emit(&mut self, event: StoreEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }

    // ===== Readers =====

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.current_user.as_ref()
    }

    pub fn current_view(&self) -> View {
        self.session.current_view
    }

    pub fn dark_mode(&self) -> bool {
        self.session.dark_mode
    }

    pub fn sidebar_open(&self) -> bool {
        self.session.sidebar_open
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn date_range(&self) -> DateRange {
        self.date_range
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Pending
    }

    pub fn dataset(&self) -> &Dataset {
        &self.data
    }

    pub fn kpis(&self) -> &[Kpi] {
        &self.data.kpis
    }

    pub fn chart(&self) -> Option<&ChartData> {
        self.data.chart.as_ref()
    }

    pub fn orders(&self) -> &[OrderRow] {
        &self.data.orders
    }

    /// Orders matching the current search query
    pub fn filtered_orders(&self) -> Vec<&OrderRow> {
        filter_orders(&self.data.orders, &self.search_query)
    }

    /// Chart data as one record per month; empty before the first generation
    pub fn monthly_series(&self) -> Vec<MonthPoint> {
        self.data
            .chart
            .as_ref()
            .map(monthly_series)
            .unwrap_or_default()
    }
}

impl<R: RandomSource> std::fmt::Debug for Store<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("session", &self.session)
            .field("search_query", &self.search_query)
            .field("date_range", &self.date_range)
            .field("load_state", &self.load_state)
            .field("orders", &self.data.orders.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::random::ScriptedRandom;
    use crate::store::types::{KPI_COUNT, MONTHS_PER_YEAR, ORDER_ROW_COUNT};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn scripted_store() -> Store<ScriptedRandom> {
        Store::with_source(ScriptedRandom::new(vec![0.1, 0.5, 0.9]))
    }

    #[test]
    fn test_login_sets_session() {
        let mut store = scripted_store();
        let user = User::demo();
        store.login(user.clone());

        assert!(store.is_authenticated());
        assert_eq!(store.current_view(), View::Dashboard);
        assert_eq!(store.current_user(), Some(&user));
        assert_eq!(store.load_state(), LoadState::Pending);
    }

    #[test]
    fn test_logout_keeps_dataset() {
        let mut store = scripted_store();
        store.login(User::demo());
        store.generate_data();
        let before = store.dataset().clone();

        store.logout();

        assert!(!store.is_authenticated());
        assert!(store.current_user().is_none());
        assert_eq!(store.current_view(), View::Landing);
        assert_eq!(store.dataset(), &before);
    }

    #[test]
    fn test_generate_invariants_and_ready() {
        let mut store = Store::with_source(StdRandom::seeded(3));
        assert!(store.is_loading());
        for _ in 0..10 {
            store.generate_data();
            assert_eq!(store.kpis().len(), KPI_COUNT);
            let chart = store.chart().unwrap();
            assert_eq!(chart.labels.len(), MONTHS_PER_YEAR);
            assert_eq!(chart.revenue.len(), chart.labels.len());
            assert_eq!(chart.orders.len(), chart.labels.len());
            assert_eq!(store.orders().len(), ORDER_ROW_COUNT);
            assert_eq!(store.load_state(), LoadState::Ready);
        }
    }

    #[test]
    fn test_set_view_is_pending_until_refresh() {
        let mut store = scripted_store();
        store.login(User::demo());
        store.generate_data();

        store.set_view(View::Sales);
        assert_eq!(store.current_view(), View::Sales);
        assert!(store.is_loading());

        assert!(store.refresh_if_pending());
        assert!(!store.is_loading());
        assert!(!store.refresh_if_pending());
    }

    #[test]
    fn test_toggles_are_involutions() {
        let mut store = scripted_store();
        let dark = store.dark_mode();
        store.toggle_dark_mode();
        assert_ne!(store.dark_mode(), dark);
        store.toggle_dark_mode();
        assert_eq!(store.dark_mode(), dark);

        let open = store.sidebar_open();
        store.toggle_sidebar();
        store.toggle_sidebar();
        assert_eq!(store.sidebar_open(), open);
    }

    #[test]
    fn test_search_stored_verbatim() {
        let mut store = scripted_store();
        store.set_search("  ALICE ");
        assert_eq!(store.search_query(), "  ALICE ");
    }

    #[test]
    fn test_empty_search_returns_all_rows_in_order() {
        let mut store = scripted_store();
        store.generate_data();
        store.set_search("");
        let ids: Vec<u32> = store.filtered_orders().iter().map(|r| r.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_case_insensitive_search() {
        let mut store = scripted_store();
        store.generate_data();
        store.set_search("ALICE");
        let rows = store.filtered_orders();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.customer.to_lowercase().contains("alice")));
        // Underlying data untouched
        assert_eq!(store.orders().len(), ORDER_ROW_COUNT);
    }

    #[test]
    fn test_preferences_applied() {
        let store = scripted_store().with_preferences(Preferences {
            dark_mode: true,
            sidebar_open: false,
            date_range: DateRange::Last7Days,
        });
        assert!(store.dark_mode());
        assert!(!store.sidebar_open());
        assert_eq!(store.date_range(), DateRange::Last7Days);
    }

    #[test]
    fn test_monthly_series_empty_before_generation() {
        let mut store = scripted_store();
        assert!(store.monthly_series().is_empty());
        store.generate_data();
        assert_eq!(store.monthly_series().len(), MONTHS_PER_YEAR);
    }

    #[test]
    fn test_subscribers_receive_events() {
        let mut store = scripted_store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = store.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        store.login(User::demo());
        store.generate_data();
        store.set_date_range(DateRange::Last90Days);
        assert!(store.unsubscribe(id));
        store.logout();

        assert_eq!(
            *seen.borrow(),
            vec![
                StoreEvent::LoggedIn(User::demo()),
                StoreEvent::DataGenerated,
                StoreEvent::DateRangeChanged(DateRange::Last90Days),
            ]
        );
        assert!(!store.unsubscribe(id));
    }
}
