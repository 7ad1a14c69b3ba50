//! Derived view data
//!
//! Read-only computations over store contents: chart records, the filtered
//! order list and page titles. Nothing here mutates its input.

use serde::Serialize;

use crate::store::{ChartData, OrderRow, View};

/// One month of chart data, ready for plotting
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthPoint {
    pub name: String,
    pub revenue: f64,
    pub orders: f64,
}

/// Zip the parallel chart sequences into per-month records
pub fn monthly_series(chart: &ChartData) -> Vec<MonthPoint> {
    chart
        .labels
        .iter()
        .zip(chart.revenue.iter())
        .zip(chart.orders.iter())
        .map(|((name, revenue), orders)| MonthPoint {
            name: name.clone(),
            revenue: *revenue,
            orders: *orders,
        })
        .collect()
}

/// Rows whose customer contains `query`, ignoring case
///
/// An empty query matches every row. Input order is preserved.
pub fn filter_orders<'a>(rows: &'a [OrderRow], query: &str) -> Vec<&'a OrderRow> {
    if query.is_empty() {
        return rows.iter().collect();
    }
    let needle = query.to_lowercase();
    rows.iter()
        .filter(|row| row.customer.to_lowercase().contains(&needle))
        .collect()
}

/// Heading shown at the top of the dashboard
pub fn view_title(view: View) -> String {
    match view {
        View::Dashboard => "Dashboard Overview".to_string(),
        other => {
            let id = other.as_str();
            let mut chars = id.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

/// Largest value across a series, used to scale chart axes
pub fn series_max(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    values.into_iter().fold(None, |acc, v| match acc {
        Some(max) if max >= v => Some(max),
        _ => Some(v),
    })
}
