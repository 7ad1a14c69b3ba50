//! Core data types for the dashboard store
//!
//! This module defines the values the store owns and hands out by reference:
//! - `Session` and `User`: who is signed in and what they are looking at
//! - `View`, `DateRange`, `LoadState`: small enums driving the UI
//! - `Kpi`, `ChartData`, `OrderRow`: the synthetic dataset
//! - `Dataset`: the bundle replaced on every generation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of KPI cards produced per generation
pub const KPI_COUNT: usize = 4;

/// Number of points in each chart series
pub const MONTHS_PER_YEAR: usize = 12;

/// Number of order rows produced per generation
pub const ORDER_ROW_COUNT: usize = 10;

/// Month labels used on the chart x-axis
pub const MONTH_LABELS: [&str; MONTHS_PER_YEAR] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A signed-in user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub avatar: String,
}

impl User {
    /// The demo account every login button signs in as
    pub fn demo() -> Self {
        Self {
            id: 1,
            name: "Demo User".to_string(),
            role: "admin".to_string(),
            avatar: "👨‍💼".to_string(),
        }
    }
}

/// Top-level page shown by the UI
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Landing,
    Dashboard,
    Sales,
    Customers,
    Inventory,
    Users,
}

impl View {
    /// Views reachable from the sidebar, in display order
    pub fn navigable() -> &'static [View] {
        &[
            View::Dashboard,
            View::Sales,
            View::Customers,
            View::Inventory,
            View::Users,
        ]
    }

    /// Lowercase identifier, as used in config files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Landing => "landing",
            View::Dashboard => "dashboard",
            View::Sales => "sales",
            View::Customers => "customers",
            View::Inventory => "inventory",
            View::Users => "users",
        }
    }

    /// Sidebar label
    pub fn label(&self) -> &'static str {
        match self {
            View::Landing => "Home",
            View::Dashboard => "Dashboard",
            View::Sales => "Sales",
            View::Customers => "Customers",
            View::Inventory => "Inventory",
            View::Users => "Users",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "landing" => Ok(View::Landing),
            "dashboard" => Ok(View::Dashboard),
            "sales" => Ok(View::Sales),
            "customers" => Ok(View::Customers),
            "inventory" => Ok(View::Inventory),
            "users" => Ok(View::Users),
            other => Err(format!("unknown view: {}", other)),
        }
    }
}

/// Reporting window picked in the dashboard header
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DateRange {
    #[serde(rename = "7d")]
    Last7Days,
    #[default]
    #[serde(rename = "30d")]
    Last30Days,
    #[serde(rename = "90d")]
    Last90Days,
    #[serde(rename = "1y")]
    LastYear,
}

impl DateRange {
    pub fn all() -> &'static [DateRange] {
        &[
            DateRange::Last7Days,
            DateRange::Last30Days,
            DateRange::Last90Days,
            DateRange::LastYear,
        ]
    }

    /// Short code (`7d`, `30d`, ...)
    pub fn code(&self) -> &'static str {
        match self {
            DateRange::Last7Days => "7d",
            DateRange::Last30Days => "30d",
            DateRange::Last90Days => "90d",
            DateRange::LastYear => "1y",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateRange::Last7Days => "Last 7 days",
            DateRange::Last30Days => "Last 30 days",
            DateRange::Last90Days => "Last 90 days",
            DateRange::LastYear => "Last year",
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DateRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateRange::all()
            .iter()
            .copied()
            .find(|range| range.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown date range: {}", s))
    }
}

/// Whether the dataset reflects the current view
///
/// Only a completed generation moves the store to `Ready`; every
/// view-changing operation moves it back to `Pending`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    #[default]
    Pending,
    Ready,
}

/// Authentication, navigation and theme state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub is_authenticated: bool,
    pub current_user: Option<User>,
    pub current_view: View,
    pub dark_mode: bool,
    pub sidebar_open: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            is_authenticated: false,
            current_user: None,
            current_view: View::Landing,
            dark_mode: false,
            sidebar_open: true,
        }
    }
}

/// A single KPI card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Kpi {
    /// Slot id, 1 through 4
    pub id: u8,
    pub title: String,
    pub value: f64,
    /// Signed percentage change vs the previous period, one decimal
    pub change: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    pub icon: String,
    /// Tailwind gradient stops for the card accent
    pub color: String,
}

/// Twelve months of revenue and order counts
///
/// `labels[i]`, `revenue[i]` and `orders[i]` describe the same month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub revenue: Vec<f64>,
    pub orders: Vec<f64>,
}

impl ChartData {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Fulfilment status of an order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OrderStatus {
    Completed,
    Processing,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Completed => write!(f, "Completed"),
            OrderStatus::Processing => write!(f, "Processing"),
        }
    }
}

/// One synthetic order shown in the "Recent Orders" table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRow {
    pub id: u32,
    pub order_number: String,
    pub customer: String,
    pub product: String,
    pub amount: u32,
    pub status: OrderStatus,
    pub date: NaiveDate,
}

/// Everything produced by one generation
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    pub kpis: Vec<Kpi>,
    pub chart: Option<ChartData>,
    pub orders: Vec<OrderRow>,
}

impl Dataset {
    /// True until the first generation has run
    pub fn is_empty(&self) -> bool {
        self.kpis.is_empty() && self.chart.is_none() && self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_defaults() {
        let session = Session::default();
        assert!(!session.is_authenticated);
        assert!(session.current_user.is_none());
        assert_eq!(session.current_view, View::Landing);
        assert!(!session.dark_mode);
        assert!(session.sidebar_open);
    }

    #[test]
    fn test_view_parse_and_display() {
        for view in View::navigable() {
            assert_eq!(view.to_string().parse::<View>().unwrap(), *view);
        }
        assert_eq!("SALES".parse::<View>().unwrap(), View::Sales);
        assert!("reports".parse::<View>().is_err());
    }

    #[test]
    fn test_date_range_codes() {
        assert_eq!(DateRange::default(), DateRange::Last30Days);
        assert_eq!("90d".parse::<DateRange>().unwrap(), DateRange::Last90Days);
        assert_eq!(
            serde_json::to_string(&DateRange::LastYear).unwrap(),
            "\"1y\""
        );
        assert!("2w".parse::<DateRange>().is_err());
    }

    #[test]
    fn test_dataset_starts_empty() {
        assert!(Dataset::default().is_empty());
    }
}
