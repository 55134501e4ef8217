// File: crates/heatmap-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::grid::GridGeometry;
use crate::types::Cell;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF32 {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF32 {
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
}

/// Panel-local fill rectangle of `cell`, one pixel short on each axis so the
/// grid line stays visible.
pub fn cell_rect(grid: &GridGeometry, cell: Cell) -> RectF32 {
    RectF32::from_ltwh(
        cell.col as f32 * grid.cell_width,
        cell.row as f32 * grid.cell_height,
        grid.cell_width - 1.0,
        grid.cell_height - 1.0,
    )
}
