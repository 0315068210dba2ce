// src/gui/components/charts.rs
//
// Renders the three charts from precomputed report data.

use std::ops::RangeInclusive;

use eframe::egui::{self, Color32};
use egui_plot::{Bar, BarChart, GridMark, Plot, PlotBounds, Points};

use crate::core::sanitize::ellipsize;
use crate::report::charts::{Histogram, ScatterPoint, TopN};

const TOMATO: Color32 = Color32::from_rgb(0xFF, 0x63, 0x47);
const TITLE_LABEL_CHARS: usize = 18;
const SCATTER_SHADES: usize = 8;

const VIRIDIS: &[[u8; 3]] = &[
    [0x44, 0x01, 0x54],
    [0x3b, 0x52, 0x8b],
    [0x21, 0x91, 0x8c],
    [0x5e, 0xc9, 0x62],
    [0xfd, 0xe7, 0x25],
];

// Lightest stop dropped so low prices stay visible on white.
const BLUES: &[[u8; 3]] = &[
    [0xc6, 0xdb, 0xef],
    [0x6b, 0xae, 0xd6],
    [0x21, 0x71, 0xb5],
    [0x08, 0x30, 0x6b],
];

/// Piecewise-linear color scale; `t` is clamped to `[0, 1]`.
pub fn gradient(stops: &[[u8; 3]], t: f64) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    if stops.len() < 2 {
        let [r, g, b] = stops.first().copied().unwrap_or([0, 0, 0]);
        return Color32::from_rgb(r, g, b);
    }
    let pos = t * (stops.len() - 1) as f64;
    let i = (pos.floor() as usize).min(stops.len() - 2);
    let f = pos - i as f64;
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * f).round() as u8;
    let (a, b) = (stops[i], stops[i + 1]);
    Color32::from_rgb(lerp(a[0], b[0]), lerp(a[1], b[1]), lerp(a[2], b[2]))
}

pub fn histogram(ui: &mut egui::Ui, hist: &Histogram, height: f32) {
    let bars: Vec<Bar> = hist
        .bins
        .iter()
        .map(|b| {
            Bar::new(b.center(), b.count as f64)
                .width(b.width())
                .name(format!("£{:.2} – £{:.2}", b.start, b.end))
        })
        .collect();
    let chart = BarChart::new("Book price distribution", bars).color(TOMATO);

    Plot::new("price_histogram")
        .height(height)
        .x_axis_label("Price (£)")
        .y_axis_label("Count")
        .allow_scroll(false)
        .show(ui, |plot_ui| plot_ui.bar_chart(chart));
}

pub fn top_n(ui: &mut egui::Ui, top: &TopN, height: f32) {
    let n = top.rows.len();
    let (lo, hi) = top
        .rows
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| (lo.min(r.price), hi.max(r.price)));
    let span = hi - lo;

    let bars: Vec<Bar> = top
        .rows
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let t = if span > 0.0 { (r.price - lo) / span } else { 1.0 };
            Bar::new(i as f64, r.price)
                .width(0.7)
                .fill(gradient(VIRIDIS, t))
                .name(&r.title)
        })
        .collect();

    let labels: Vec<String> = top.rows.iter().map(|r| ellipsize(&r.title, TITLE_LABEL_CHARS)).collect();
    let window = top.y_window();

    Plot::new("top_n_prices")
        .height(height)
        .x_axis_label("Book title")
        .y_axis_label("Price (£)")
        .show_background(false)
        .allow_scroll(false)
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            let v = mark.value;
            if v < 0.0 || (v - v.round()).abs() > 1e-6 {
                return String::new();
            }
            labels.get(v.round() as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new("Most expensive books", bars));
            if let Some((min, max)) = window {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max([-0.5, min], [n as f64 - 0.5, max]));
            }
        });

    let hidden = top.hidden_count();
    if hidden > 0 {
        ui.label(
            egui::RichText::new(format!("{hidden} of {n} bars fall outside the fixed price axis"))
                .color(ui.visuals().warn_fg_color),
        );
    }
}

pub fn scatter(ui: &mut egui::Ui, points: &[ScatterPoint], height: f32) {
    // One series per shade; a series has a single color.
    let mut buckets: Vec<Vec<[f64; 2]>> = vec![Vec::new(); SCATTER_SHADES];
    for p in points {
        let ix = ((p.shade * (SCATTER_SHADES - 1) as f64).round() as usize).min(SCATTER_SHADES - 1);
        buckets[ix].push([p.order as f64, p.price]);
    }

    Plot::new("price_by_order")
        .height(height)
        .x_axis_label("Extraction order")
        .y_axis_label("Price (£)")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (ix, series) in buckets.into_iter().enumerate() {
                if series.is_empty() {
                    continue;
                }
                let t = ix as f64 / (SCATTER_SHADES - 1) as f64;
                plot_ui.points(
                    Points::new(format!("Price band {}", ix + 1), series)
                        .color(gradient(BLUES, t))
                        .radius(3.0),
                );
            }
        });
}
