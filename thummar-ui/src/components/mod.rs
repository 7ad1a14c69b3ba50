//! UI Components
//!
//! Reusable Leptos components for the dashboard shell.

pub mod chart;
pub mod header;
pub mod kpi_card;
pub mod loading;
pub mod orders_table;
pub mod sidebar;
pub mod theme_toggle;
pub mod toast;

pub use chart::{ChartKind, MonthlyChart};
pub use header::Header;
pub use kpi_card::KpiCard;
pub use loading::{ChartSkeleton, KpiSkeleton, RowSkeleton};
pub use orders_table::OrdersTable;
pub use sidebar::Sidebar;
pub use theme_toggle::ThemeToggle;
pub use toast::Toast;
