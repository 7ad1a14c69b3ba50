//! Plain-text rendering of the store
//!
//! Used by the terminal binaries. Mirrors the web UI: a landing page when
//! signed out, otherwise the dashboard with KPIs, monthly figures and the
//! filtered order table.

use std::fmt::Write;

use super::format::{format_change, format_with_affixes};
use super::landing::{
    BADGE, BRAND, COPYRIGHT, CTA_BODY, CTA_TITLE, FEATURES, FEATURES_TITLE, HEADLINE, HERO_STATS,
    SUBTITLE,
};
use super::projections::view_title;
use crate::store::{Kpi, OrderRow, RandomSource, Store};

/// Render whichever page the store currently shows
pub fn render<R: RandomSource>(store: &Store<R>) -> String {
    if store.is_authenticated() {
        render_dashboard(store)
    } else {
        render_landing()
    }
}

pub fn render_landing() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", BRAND);
    let _ = writeln!(out, "{} {}", BADGE.0, BADGE.1);
    let _ = writeln!(out, "{}", HEADLINE);
    let _ = writeln!(out, "{}", SUBTITLE);
    let _ = writeln!(out);
    let stats: Vec<String> = HERO_STATS
        .iter()
        .map(|(value, label)| format!("{} {}", value, label))
        .collect();
    let _ = writeln!(out, "  {}", stats.join(" | "));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", FEATURES_TITLE);
    for (_, title, desc) in FEATURES {
        let _ = writeln!(out, "  - {}: {}", title, desc);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", CTA_TITLE);
    let _ = writeln!(out, "{}", CTA_BODY);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", COPYRIGHT);
    out
}

pub fn render_dashboard<R: RandomSource>(store: &Store<R>) -> String {
    let mut out = String::new();

    if let Some(user) = store.current_user() {
        let _ = writeln!(out, "{} {} ({})", user.avatar, user.name, user.role);
    }
    let _ = writeln!(out, "{}", view_title(store.current_view()));
    let _ = writeln!(out, "Welcome back! Here's what's happening. [{}]", store.date_range().label());
    let _ = writeln!(out);

    if store.is_loading() {
        let _ = writeln!(out, "Loading...");
        return out;
    }

    for kpi in store.kpis() {
        let _ = writeln!(out, "{}", kpi_line(kpi));
    }
    let _ = writeln!(out);

    let series = store.monthly_series();
    if !series.is_empty() {
        let _ = writeln!(out, "{:<5} {:>10} {:>7}", "Month", "Revenue", "Orders");
        for point in &series {
            let _ = writeln!(
                out,
                "{:<5} {:>10} {:>7}",
                point.name, point.revenue, point.orders
            );
        }
        let _ = writeln!(out);
    }

    let rows = store.filtered_orders();
    let _ = writeln!(out, "Recent Orders ({} shown)", rows.len());
    for row in rows {
        let _ = writeln!(out, "{}", order_line(row));
    }
    out
}

/// `"💰 Total Revenue  $1.2M  ↑ 4.5% vs last period"`
pub fn kpi_line(kpi: &Kpi) -> String {
    let (change, trend) = format_change(kpi.change);
    format!(
        "{} {:<16} {:>8}  {} {} vs last period",
        kpi.icon,
        kpi.title,
        format_with_affixes(kpi.value, kpi.prefix.as_deref(), kpi.suffix.as_deref()),
        trend.arrow(),
        change
    )
}

pub fn order_line(row: &OrderRow) -> String {
    format!(
        "{:<10} {:<8} {:<15} ${:<6} {:<11} {}",
        row.order_number, row.customer, row.product, row.amount, row.status, row.date
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ScriptedRandom, User, View};

    fn store() -> Store<ScriptedRandom> {
        Store::with_source(ScriptedRandom::constant(0.25))
    }

    #[test]
    fn test_signed_out_renders_landing() {
        let text = render(&store());
        assert!(text.starts_with(BRAND));
        assert!(text.contains("Powerful Features"));
        assert!(text.contains("Powered by Advanced Analytics"));
        assert!(text.contains("Ready to Transform Your Data?"));
        assert!(text.trim_end().ends_with("© 2024 Thummar Analytics. All rights reserved."));
    }

    #[test]
    fn test_pending_dashboard_shows_loading() {
        let mut store = store();
        store.login(User::demo());
        let text = render(&store);
        assert!(text.contains("Dashboard Overview"));
        assert!(text.contains("Loading..."));
        assert!(!text.contains("Recent Orders"));
    }

    #[test]
    fn test_ready_dashboard_lists_filtered_orders() {
        let mut store = store();
        store.login(User::demo());
        store.set_view(View::Sales);
        store.refresh_if_pending();
        store.set_search("bob");

        let text = render(&store);
        assert!(text.contains("Sales"));
        assert!(text.contains("Total Revenue"));
        assert!(text.contains("$1.1M"));
        assert!(text.contains("Recent Orders (3 shown)"));
        assert!(text.contains("ORD-10001"));
        assert!(!text.contains("ORD-10000"));
    }

    #[test]
    fn test_kpi_line_down_trend() {
        let kpi = Kpi {
            id: 3,
            title: "Active Users".into(),
            value: 5_500.0,
            change: -1.8,
            prefix: None,
            suffix: None,
            icon: "👥".into(),
            color: String::new(),
        };
        let line = kpi_line(&kpi);
        assert!(line.contains("5.5K"));
        assert!(line.contains("↓ 1.8%"));
    }
}
