//! Pages
//!
//! Top-level page components: the public landing page and the dashboard.

pub mod dashboard;
pub mod landing;

pub use dashboard::Dashboard;
pub use landing::Landing;
