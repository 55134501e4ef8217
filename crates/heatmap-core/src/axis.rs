// File: crates/heatmap-core/src/axis.rs
// Summary: Axis ranges and discrete tick sequences derived from a range and a grid step.

use serde::{Deserialize, Serialize};

use crate::error::{HeatmapError, Result};

/// Continuous `[min, max]` bounds of one axis. Deserializes from `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

impl From<[f64; 2]> for AxisRange {
    fn from([min, max]: [f64; 2]) -> Self {
        Self { min, max }
    }
}

impl From<AxisRange> for [f64; 2] {
    fn from(r: AxisRange) -> Self {
        [r.min, r.max]
    }
}

/// Upper bound on ticks per axis; larger range/step ratios are rejected as
/// `InvalidRange` instead of being allocated.
pub const MAX_TICKS: usize = 1_000_000;

/// Ordered tick values of one axis.
///
/// Contract: at least two ticks; the first is `floor(min)`, the last is
/// `floor(max)` even when `step` does not divide the range.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    ticks: Vec<f64>,
}

impl Axis {
    /// Number of ticks `build` would produce, without allocating them.
    ///
    /// Fails when the step is not positive, the bounds are inverted or
    /// non-finite, or the axis would need [`MAX_TICKS`] ticks or more.
    pub fn tick_count(range: AxisRange, step: f64) -> Result<usize> {
        let invalid = || HeatmapError::InvalidRange { min: range.min, max: range.max, step };
        if !(step.is_finite() && step > 0.0) {
            return Err(invalid());
        }
        if !(range.min.is_finite() && range.max.is_finite()) || range.max < range.min {
            return Err(invalid());
        }
        let cells = (range.span() / step).ceil();
        if !cells.is_finite() || cells >= MAX_TICKS as f64 {
            return Err(invalid());
        }
        // A zero-width range still yields one (empty) cell.
        let len = (cells as usize).checked_add(1).ok_or_else(invalid)?;
        Ok(len.max(2))
    }

    /// Build the tick sequence for `range` sampled every `step`.
    pub fn build(range: AxisRange, step: f64) -> Result<Self> {
        let len = Self::tick_count(range, step)?;
        let ticks = (0..len)
            .map(|i| {
                if i + 1 < len {
                    (range.min + i as f64 * step).floor()
                } else {
                    range.max.floor()
                }
            })
            .collect();
        Ok(Self { ticks })
    }

    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    /// Number of cells between consecutive ticks.
    pub fn cell_count(&self) -> usize {
        self.ticks.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.ticks.get(index).copied()
    }

    /// Display text for the tick at `index`.
    pub fn label(&self, index: usize) -> Option<String> {
        self.get(index).map(format_tick)
    }
}

impl std::ops::Index<usize> for Axis {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.ticks[index]
    }
}

/// Ticks are floored, so they print as integers; `-0` prints as `0`.
pub fn format_tick(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}
