//! View Layer Helpers
//!
//! Pure functions shared by the Leptos front end and the terminal binaries.
//!
//! - **format**: KPI number, change and axis formatting
//! - **landing**: Signed-out marketing copy
//! - **projections**: Chart records, order filtering, page titles
//! - **text**: Plain-text page rendering

pub mod format;
pub mod landing;
pub mod projections;
pub mod text;

pub use format::{format_change, format_locale, format_number, format_with_affixes, revenue_tick, Trend};
pub use projections::{filter_orders, monthly_series, series_max, view_title, MonthPoint};
pub use text::render;
