//! Chart Component
//!
//! Monthly revenue (line) and orders (bar) charts drawn on an HTML5 canvas.

use leptos::*;
use thummar::view::{format_locale, revenue_tick, series_max, MonthPoint};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::use_global_state;

/// Series color shared by both charts
const ACCENT: &str = "#5ebec4";

const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 36.0;
const GRID_LINES: usize = 4;

/// Which monthly series a chart plots
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    RevenueLine,
    OrdersBar,
}

impl ChartKind {
    fn title(self) -> &'static str {
        match self {
            ChartKind::RevenueLine => "Revenue Trend",
            ChartKind::OrdersBar => "Orders by Month",
        }
    }

    fn value(self, point: &MonthPoint) -> f64 {
        match self {
            ChartKind::RevenueLine => point.revenue,
            ChartKind::OrdersBar => point.orders,
        }
    }

    fn tick(self, value: f64) -> String {
        match self {
            ChartKind::RevenueLine => revenue_tick(value),
            ChartKind::OrdersBar => format_locale(value),
        }
    }
}

/// Grid and label colors for the current theme
#[derive(Clone, Copy)]
struct Palette {
    background: &'static str,
    grid: &'static str,
    axis: &'static str,
}

impl Palette {
    fn for_mode(dark: bool) -> Self {
        if dark {
            Self {
                background: "#1f2937",
                grid: "rgba(75, 85, 99, 0.3)",
                axis: "#e5e7eb",
            }
        } else {
            Self {
                background: "#ffffff",
                grid: "rgba(229, 231, 235, 0.8)",
                axis: "#374151",
            }
        }
    }
}

/// Card holding one monthly chart
#[component]
pub fn MonthlyChart(kind: ChartKind) -> impl IntoView {
    let state = use_global_state();
    let canvas_ref = create_node_ref::<html::Canvas>();

    let series = create_memo(move |_| state.store.with(|s| s.monthly_series()));
    let dark = create_memo(move |_| state.store.with(|s| s.dark_mode()));

    // Redraw when data or theme changes
    create_effect(move |_| {
        let points = series.get();
        let palette = Palette::for_mode(dark.get());

        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, kind, &points, palette);
        }
    });

    view! {
        <div class="bg-white dark:bg-gray-800 rounded-2xl p-6 shadow-sm">
            <h3 class="text-lg font-bold text-gray-900 dark:text-white mb-6">{kind.title()}</h3>
            <canvas
                node_ref=canvas_ref
                width="600"
                height="280"
                class="w-full h-[280px]"
            />
            <Show when=move || kind == ChartKind::OrdersBar>
                <div class="flex justify-center items-center space-x-2 mt-2 text-sm text-gray-500">
                    <span class="w-3 h-3 rounded-sm" style=format!("background-color: {}", ACCENT) />
                    <span>"orders"</span>
                </div>
            </Show>
        </div>
    }
}

/// Round up to a readable axis maximum (1, 2 or 5 times a power of ten)
pub fn nice_ceiling(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(max.log10().floor() as i32);
    [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|step| step * magnitude)
        .find(|candidate| *candidate >= max)
        .unwrap_or(10.0 * magnitude)
}

/// Canvas y for `value` in a plot of `plot_height` whose top is `max`
pub fn scale_y(value: f64, max: f64, plot_height: f64) -> f64 {
    MARGIN_TOP + plot_height * (1.0 - value / max)
}

/// Center x of band `index` when `count` bands share `plot_width`
pub fn band_center(index: usize, count: usize, plot_width: f64) -> f64 {
    let band = plot_width / count.max(1) as f64;
    MARGIN_LEFT + band * (index as f64 + 0.5)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Draw the chart on canvas
fn draw_chart(
    canvas: &HtmlCanvasElement,
    kind: ChartKind,
    points: &[MonthPoint],
    palette: Palette,
) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let plot_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    ctx.set_fill_style(&palette.background.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    if points.is_empty() {
        ctx.set_fill_style(&palette.axis.into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data yet", width / 2.0 - 40.0, height / 2.0);
        return;
    }

    let max = nice_ceiling(series_max(points.iter().map(|p| kind.value(p))).unwrap_or(0.0));

    // Dashed horizontal grid with y-axis labels
    let dash = js_sys::Array::of2(&JsValue::from(3.0), &JsValue::from(3.0));
    let _ = ctx.set_line_dash(&dash);
    ctx.set_stroke_style(&palette.grid.into());
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for i in 0..=GRID_LINES {
        let fraction = i as f64 / GRID_LINES as f64;
        let y = MARGIN_TOP + fraction * plot_height;
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        ctx.set_fill_style(&palette.axis.into());
        let _ = ctx.fill_text(&kind.tick(max * (1.0 - fraction)), 4.0, y + 4.0);
    }
    let _ = ctx.set_line_dash(&js_sys::Array::new());

    // Month labels
    for (i, point) in points.iter().enumerate() {
        let x = band_center(i, points.len(), plot_width);
        let _ = ctx.fill_text(&point.name, x - 10.0, height - 12.0);
    }

    match kind {
        ChartKind::RevenueLine => {
            ctx.set_stroke_style(&ACCENT.into());
            ctx.set_line_width(3.0);
            ctx.begin_path();
            for (i, point) in points.iter().enumerate() {
                let x = band_center(i, points.len(), plot_width);
                let y = scale_y(kind.value(point), max, plot_height);
                if i == 0 {
                    ctx.move_to(x, y);
                } else {
                    ctx.line_to(x, y);
                }
            }
            ctx.stroke();
        }
        ChartKind::OrdersBar => {
            let bar_width = plot_width / points.len() as f64 * 0.6;
            ctx.set_fill_style(&ACCENT.into());
            for (i, point) in points.iter().enumerate() {
                let x = band_center(i, points.len(), plot_width) - bar_width / 2.0;
                let y = scale_y(kind.value(point), max, plot_height);
                ctx.fill_rect(x, y, bar_width, MARGIN_TOP + plot_height - y);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_ceiling() {
        assert_eq!(nice_ceiling(149_000.0), 200_000.0);
        assert_eq!(nice_ceiling(2_400.0), 5_000.0);
        assert_eq!(nice_ceiling(1_200.0), 2_000.0);
        assert_eq!(nice_ceiling(0.0), 1.0);
    }

    #[test]
    fn test_scale_y_bounds() {
        assert_eq!(scale_y(0.0, 100.0, 200.0), MARGIN_TOP + 200.0);
        assert_eq!(scale_y(100.0, 100.0, 200.0), MARGIN_TOP);
    }

    #[test]
    fn test_band_center() {
        assert_eq!(band_center(0, 12, 120.0), MARGIN_LEFT + 5.0);
        assert_eq!(band_center(11, 12, 120.0), MARGIN_LEFT + 115.0);
    }

    #[test]
    fn test_ticks() {
        assert_eq!(ChartKind::RevenueLine.tick(150_000.0), "$150k");
        assert_eq!(ChartKind::OrdersBar.tick(2_500.0), "2,500");
    }
}
