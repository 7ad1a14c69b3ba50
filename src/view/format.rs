//! Number formatting for KPI cards and chart axes
//!
//! Halfway values round away from zero (`1.25` shows as `1.3`), matching how
//! browsers render fixed decimals.

use crate::store::round_to;

/// Direction of a KPI change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn of(change: f64) -> Self {
        if change >= 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
        }
    }
}

/// Compact display of a KPI value
///
/// Millions and thousands collapse to one decimal with an `M`/`K` unit;
/// smaller values keep up to three decimals with thousands separators.
pub fn format_number(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", round_to(value / 1_000_000.0, 1))
    } else if value >= 1_000.0 {
        format!("{:.1}K", round_to(value / 1_000.0, 1))
    } else {
        format_locale(value)
    }
}

/// [`format_number`] wrapped in optional prefix and suffix strings
pub fn format_with_affixes(value: f64, prefix: Option<&str>, suffix: Option<&str>) -> String {
    format!(
        "{}{}{}",
        prefix.unwrap_or(""),
        format_number(value),
        suffix.unwrap_or("")
    )
}

/// en-US style: grouped integer part, at most three fraction digits, no
/// trailing zeros
pub fn format_locale(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = format!("{:.3}", round_to(value.abs(), 3));
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = value < 0.0 && (int_part != "0" || !frac_part.is_empty());
    let sign = if negative { "-" } else { "" };

    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

/// Magnitude of a change as shown under a KPI (`"12.5%"`), with its direction
pub fn format_change(change: f64) -> (String, Trend) {
    (format!("{}%", change.abs()), Trend::of(change))
}

/// Revenue axis tick, `75000` → `"$75k"`
pub fn revenue_tick(value: f64) -> String {
    format!("${}k", value / 1_000.0)
}
