// src/report/stats.rs

use super::clean::CleanedTable;

/// The four headline numbers. `None` when the table has no rows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub count: usize,
    /// Rounded to 2 decimal places.
    pub mean: Option<f64>,
    pub max: Option<f64>,
    pub min: Option<f64>,
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

impl Summary {
    pub fn of(table: &CleanedTable) -> Self {
        let prices = table.prices();
        let count = prices.len();
        if count == 0 {
            return Self { count, mean: None, max: None, min: None };
        }
        let sum: f64 = prices.iter().sum();
        let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
        Self {
            count,
            mean: Some(round2(sum / count as f64)),
            max: Some(max),
            min: Some(min),
        }
    }
}
