// File: crates/heatmap-core/src/types.rs
// Summary: Shared types and constants (points, cells, default sizes, zoom limits).

use serde::{Deserialize, Serialize};

/// Default surface width in pixels.
pub const WIDTH: u32 = 320;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 320;
/// Default padding around the drawable panel, in pixels.
pub const PADDING: f32 = 40.0;
/// Default grid step on both axes.
pub const GRAD: f64 = 100.0;
/// Multiplicative factor applied to the grid step per wheel tick.
pub const ZOOM_SCALE: f64 = 2.0;
/// Smallest cell edge, in pixels, a zoom-in may produce.
pub const MIN_CELL_PX: f32 = 4.0;

/// A data point in axis space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// Index of one grid rectangle (column along X, row along Y).
/// Not a pixel coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub col: usize,
    pub row: usize,
}

impl Cell {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((col, row): (usize, usize)) -> Self {
        Self { col, row }
    }
}

/// Which corner of a hit rectangle identifies the emitted cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CornerMode {
    /// Emit `(i, j)`: the cell whose start corner the point follows.
    #[default]
    LeftTop,
    /// Emit `(i + 1, j + 1)`.
    RightBottom,
}
