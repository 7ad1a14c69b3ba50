//! # Thummar Analytics
//!
//! Client-side analytics dashboard core: a small owned state store, a
//! synthetic data generator behind an injectable randomness source, and the
//! derived view computations used by the Leptos front end (`thummar-ui`) and
//! the terminal binaries.
//!
//! ## Modules
//!
//! - [`store`]: Session state, dataset generation and the `Store`
//! - [`view`]: Number formatting, chart/table projections, text rendering
//! - [`export`]: CSV and JSON export of what the dashboard shows
//! - [`config`]: TOML configuration with environment overrides
//! - [`logging`]: Subscriber setup and store event logging for the binaries
//!
//! ## Quick Start
//!
//! ```rust
//! use thummar::store::{Store, StdRandom, User, View};
//! use thummar::view::format_with_affixes;
//!
//! let mut store = Store::with_source(StdRandom::seeded(42));
//! store.login(User::demo());
//! store.generate_data();
//!
//! for kpi in store.kpis() {
//!     let shown = format_with_affixes(kpi.value, kpi.prefix.as_deref(), kpi.suffix.as_deref());
//!     println!("{} {}", kpi.title, shown);
//! }
//!
//! store.set_view(View::Sales);
//! assert!(store.is_loading());
//! store.refresh_if_pending();
//! assert!(!store.is_loading());
//! ```

pub mod config;
pub mod export;
pub mod logging;
pub mod store;
pub mod view;

// Re-export top-level types for convenience
pub use store::{
    ChartData, Dataset, DateRange, Kpi, LoadState, OrderRow, OrderStatus, Preferences,
    RandomSource, ScriptedRandom, Session, StdRandom, Store, StoreEvent, SubscriptionId, User,
    View,
};

pub use view::{
    filter_orders, format_change, format_number, format_with_affixes, monthly_series,
    view_title, MonthPoint, Trend,
};

pub use export::{orders_csv, write_orders_csv, write_snapshot_json, ExportError, ExportResult};

pub use config::{Config, ConfigError, LoggingConfig, UiConfig};
