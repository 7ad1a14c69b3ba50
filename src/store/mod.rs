//! Dashboard State Store
//!
//! This module provides the state container behind both the web UI and the
//! terminal binaries:
//!
//! - **types**: Session, User, KPI, chart and order types
//! - **random**: Injectable randomness sources
//! - **generator**: Synthetic dataset generation
//! - **state**: The `Store` and its operations
//!
//! # Lifecycle
//!
//! ```text
//! login ─► Pending ─► generate_data ─► Ready
//!             ▲                          │
//!             └──────── set_view ◄───────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use thummar::store::{ScriptedRandom, Store, User};
//!
//! let mut store = Store::with_source(ScriptedRandom::constant(0.5));
//! store.login(User::demo());
//! store.generate_data();
//!
//! assert_eq!(store.kpis().len(), 4);
//! store.set_search("bob");
//! assert!(store.filtered_orders().iter().all(|row| row.customer == "Bob"));
//! ```

pub mod generator;
pub mod random;
pub mod state;
pub mod types;

pub use generator::{generate, CUSTOMERS};
pub use random::{round_to, RandomSource, ScriptedRandom, StdRandom};
pub use state::{Preferences, Store, StoreEvent, SubscriptionId};
pub use types::{
    ChartData, Dataset, DateRange, Kpi, LoadState, OrderRow, OrderStatus, Session, User, View,
    KPI_COUNT, MONTHS_PER_YEAR, MONTH_LABELS, ORDER_ROW_COUNT,
};
