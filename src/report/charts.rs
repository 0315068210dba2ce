// src/report/charts.rs
//
// Chart data, computed once per load. Rendering lives in gui::components::charts.

use crate::config::options::TopNAxis;

use super::clean::CleanedTable;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 { 0.5 * (self.start + self.end) }
    pub fn width(&self) -> f64 { self.end - self.start }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    /// `bins` equal-width bins over `[min, max]`; `max` lands in the last bin.
    /// Identical values collapse into one unit-wide bin.
    pub fn build(prices: &[f64], bins: usize) -> Self {
        if prices.is_empty() || bins == 0 {
            return Self::default();
        }
        let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
        let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        if max <= min {
            let bin = HistogramBin { start: min - 0.5, end: min + 0.5, count: prices.len() };
            return Self { bins: vec![bin] };
        }

        let width = (max - min) / bins as f64;
        let mut out: Vec<HistogramBin> = (0..bins)
            .map(|i| HistogramBin {
                start: min + width * i as f64,
                end: if i + 1 == bins { max } else { min + width * (i + 1) as f64 },
                count: 0,
            })
            .collect();

        for &p in prices {
            let ix = (((p - min) / width) as usize).min(bins - 1);
            out[ix].count += 1;
        }
        Self { bins: out }
    }

    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

/// One bar of the top-N chart.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedRow {
    /// 0-based row in the cleaned table.
    pub index: usize,
    pub title: String,
    pub price: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TopN {
    pub rows: Vec<RankedRow>,
    pub axis: TopNAxis,
}

impl TopN {
    /// Highest `n` prices; ties keep table order (stable sort).
    pub fn select(table: &CleanedTable, n: usize, axis: TopNAxis) -> Self {
        let mut order: Vec<usize> = (0..table.len()).collect();
        let src = table.rows();
        order.sort_by(|&a, &b| src[b].price.total_cmp(&src[a].price));
        order.truncate(n);

        let rows = order
            .into_iter()
            .map(|i| RankedRow { index: i, title: src[i].title.clone(), price: src[i].price })
            .collect();
        Self { rows, axis }
    }

    /// Value-axis window, `None` for data-driven bounds.
    pub fn y_window(&self) -> Option<(f64, f64)> {
        match self.axis {
            TopNAxis::DataDriven => None,
            TopNAxis::Fixed { min, max } => Some((min, max)),
        }
    }

    /// Bars the fixed window cannot show (bar top outside `[min, max]`).
    pub fn hidden_count(&self) -> usize {
        match self.y_window() {
            None => 0,
            Some((lo, hi)) => self.rows.iter().filter(|r| r.price < lo || r.price > hi).count(),
        }
    }

    pub fn max_price(&self) -> Option<f64> {
        self.rows.first().map(|r| r.price)
    }
}

/// Price by extraction order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterPoint {
    /// 1-based row position.
    pub order: usize,
    pub price: f64,
    /// Price normalized to `[0, 1]` over the table, for coloring.
    pub shade: f64,
}

pub fn scatter_points(table: &CleanedTable) -> Vec<ScatterPoint> {
    let prices = table.prices();
    let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    prices
        .into_iter()
        .enumerate()
        .map(|(i, price)| ScatterPoint {
            order: i + 1,
            price,
            shade: if span > 0.0 { (price - min) / span } else { 1.0 },
        })
        .collect()
}
