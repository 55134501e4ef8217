// File: crates/heatmap-core/src/coverage.rs
// Summary: Distinct occupied cells and the occupied/total percentage.

use std::collections::BTreeSet;
use std::fmt;

use crate::types::Cell;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoverageResult {
    pub occupied: usize,
    pub total: usize,
    /// Percentage rounded to two decimals.
    pub percent: f64,
}

impl CoverageResult {
    /// True when the rounded percentage has no fractional part.
    pub fn is_whole(&self) -> bool {
        self.percent.fract() == 0.0
    }
}

/// `50%`, `33.33%`, `12.5%`: no trailing zeros.
impl fmt::Display for CoverageResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_whole() {
            write!(f, "{}%", self.percent as i64)
        } else {
            write!(f, "{}%", self.percent)
        }
    }
}

/// Deduplicate `cells` and compare against `total`.
///
/// Precondition: `total > 0`, which holds for any grid built from axes with
/// at least two ticks.
pub fn coverage(cells: &[Cell], total: usize) -> CoverageResult {
    debug_assert!(total > 0, "coverage over an empty grid");
    let occupied = distinct(cells).len();
    let raw = occupied as f64 / total as f64 * 100.0;
    CoverageResult { occupied, total, percent: round2(raw) }
}

/// Distinct cells in `(col, row)` order.
pub fn distinct(cells: &[Cell]) -> BTreeSet<Cell> {
    cells.iter().copied().collect()
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
