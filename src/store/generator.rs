//! Synthetic dataset generation
//!
//! Produces the four KPI cards, twelve months of chart data and ten order
//! rows. Draw order is fixed (revenue series, order series, then each KPI's
//! value followed by its change) so a scripted source maps to exact output.

use chrono::NaiveDate;

use super::random::{round_to, RandomSource};
use super::types::{
    ChartData, Dataset, Kpi, OrderRow, OrderStatus, MONTH_LABELS, ORDER_ROW_COUNT,
};

/// Customers cycled through the order table
pub const CUSTOMERS: [&str; 4] = ["Alice", "Bob", "Carol", "David"];

const PRODUCT: &str = "Sample Product";
const FIRST_ORDER_NUMBER: u32 = 10_000;

/// Date stamped on every generated order
pub fn order_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default()
}

/// Build a fresh dataset from the given randomness source
pub fn generate(rng: &mut impl RandomSource) -> Dataset {
    let chart = generate_chart(rng);
    let kpis = generate_kpis(rng);
    let orders = generate_orders();

    tracing::debug!(
        kpis = kpis.len(),
        months = chart.len(),
        orders = orders.len(),
        "Generated dataset"
    );

    Dataset {
        kpis,
        chart: Some(chart),
        orders,
    }
}

/// Revenue in `[50_000, 150_000)` and orders in `[500, 2_500)` per month
pub fn generate_chart(rng: &mut impl RandomSource) -> ChartData {
    let labels: Vec<String> = MONTH_LABELS.iter().map(|m| m.to_string()).collect();
    let revenue = labels
        .iter()
        .map(|_| rng.next_int(50_000, 100_000) as f64)
        .collect();
    let orders = labels
        .iter()
        .map(|_| rng.next_int(500, 2_000) as f64)
        .collect();

    ChartData {
        labels,
        revenue,
        orders,
    }
}

pub fn generate_kpis(rng: &mut impl RandomSource) -> Vec<Kpi> {
    let revenue = rng.next_int(1_000_000, 500_000) as f64;
    let revenue_change = rng.next_rounded(-5.0, 20.0, 1);

    let orders = rng.next_int(10_000, 5_000) as f64;
    let orders_change = rng.next_rounded(-3.0, 15.0, 1);

    let users = rng.next_int(5_000, 2_000) as f64;
    let users_change = rng.next_rounded(-8.0, 25.0, 1);

    let conversion = round_to(rng.next_unit() * 3.0 + 2.0, 2);
    let conversion_change = rng.next_rounded(-2.0, 10.0, 1);

    vec![
        Kpi {
            id: 1,
            title: "Total Revenue".to_string(),
            value: revenue,
            change: revenue_change,
            prefix: Some("$".to_string()),
            suffix: None,
            icon: "💰".to_string(),
            color: "from-emerald-400 to-emerald-600".to_string(),
        },
        Kpi {
            id: 2,
            title: "Total Orders".to_string(),
            value: orders,
            change: orders_change,
            prefix: None,
            suffix: None,
            icon: "📦".to_string(),
            color: "from-blue-400 to-blue-600".to_string(),
        },
        Kpi {
            id: 3,
            title: "Active Users".to_string(),
            value: users,
            change: users_change,
            prefix: None,
            suffix: None,
            icon: "👥".to_string(),
            color: "from-purple-400 to-purple-600".to_string(),
        },
        Kpi {
            id: 4,
            title: "Conversion Rate".to_string(),
            value: conversion,
            change: conversion_change,
            prefix: None,
            suffix: Some("%".to_string()),
            icon: "📈".to_string(),
            color: "from-orange-400 to-orange-600".to_string(),
        },
    ]
}

/// Order rows have a fixed shape; nothing here consumes randomness
pub fn generate_orders() -> Vec<OrderRow> {
    let date = order_date();
    (0..ORDER_ROW_COUNT as u32)
        .map(|i| OrderRow {
            id: i + 1,
            order_number: format!("ORD-{}", FIRST_ORDER_NUMBER + i),
            customer: CUSTOMERS[i as usize % CUSTOMERS.len()].to_string(),
            product: PRODUCT.to_string(),
            amount: 100 + i * 10,
            status: if i % 2 == 0 {
                OrderStatus::Completed
            } else {
                OrderStatus::Processing
            },
            date,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::random::{ScriptedRandom, StdRandom};
    use crate::store::types::{KPI_COUNT, MONTHS_PER_YEAR};

    #[test]
    fn test_shape_invariants() {
        let mut rng = StdRandom::seeded(1);
        for _ in 0..50 {
            let data = generate(&mut rng);
            assert_eq!(data.kpis.len(), KPI_COUNT);
            let chart = data.chart.unwrap();
            assert_eq!(chart.labels.len(), MONTHS_PER_YEAR);
            assert_eq!(chart.revenue.len(), MONTHS_PER_YEAR);
            assert_eq!(chart.orders.len(), MONTHS_PER_YEAR);
            assert_eq!(data.orders.len(), ORDER_ROW_COUNT);
        }
    }

    #[test]
    fn test_value_ranges() {
        let mut rng = StdRandom::seeded(99);
        for _ in 0..200 {
            let data = generate(&mut rng);
            let chart = data.chart.unwrap();
            assert!(chart.revenue.iter().all(|v| (50_000.0..150_000.0).contains(v)));
            assert!(chart.orders.iter().all(|v| (500.0..2_500.0).contains(v)));

            let kpis = &data.kpis;
            assert!((1_000_000.0..1_500_000.0).contains(&kpis[0].value));
            assert!((-5.0..=15.0).contains(&kpis[0].change));
            assert!((10_000.0..15_000.0).contains(&kpis[1].value));
            assert!((5_000.0..7_000.0).contains(&kpis[2].value));
            assert!((2.0..=5.0).contains(&kpis[3].value));
            assert!((-2.0..=8.0).contains(&kpis[3].change));
        }
    }

    #[test]
    fn test_scripted_values_are_exact() {
        let mut rng = ScriptedRandom::constant(0.25);
        let data = generate(&mut rng);

        let chart = data.chart.unwrap();
        assert!(chart.revenue.iter().all(|v| *v == 75_000.0));
        assert!(chart.orders.iter().all(|v| *v == 1_000.0));

        assert_eq!(data.kpis[0].value, 1_125_000.0);
        assert_eq!(data.kpis[0].change, 0.0);
        assert_eq!(data.kpis[1].value, 11_250.0);
        assert_eq!(data.kpis[1].change, 0.8);
        assert_eq!(data.kpis[2].value, 5_500.0);
        assert_eq!(data.kpis[2].change, -1.8);
        assert_eq!(data.kpis[3].value, 2.75);
        assert_eq!(data.kpis[3].change, 0.5);

        // 24 chart draws + 2 per KPI
        assert_eq!(rng.draws(), 32);
    }

    #[test]
    fn test_kpi_slots_and_affixes() {
        let kpis = generate_kpis(&mut ScriptedRandom::constant(0.0));
        let ids: Vec<u8> = kpis.iter().map(|k| k.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(kpis[0].prefix.as_deref(), Some("$"));
        assert_eq!(kpis[3].suffix.as_deref(), Some("%"));
        assert!(kpis[1].prefix.is_none() && kpis[1].suffix.is_none());
    }

    #[test]
    fn test_order_rows() {
        let rows = generate_orders();
        assert_eq!(rows[0].order_number, "ORD-10000");
        assert_eq!(rows[9].order_number, "ORD-10009");
        assert_eq!(rows[4].customer, "Alice");
        assert_eq!(rows[7].customer, "David");
        assert_eq!(rows[3].amount, 130);
        assert_eq!(rows[0].status, OrderStatus::Completed);
        assert_eq!(rows[1].status, OrderStatus::Processing);
        assert!(rows.iter().all(|r| r.date == order_date()));
    }
}
