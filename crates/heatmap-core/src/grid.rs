// File: crates/heatmap-core/src/grid.rs
// Summary: Grid layout helpers: label stride per tick count and cell pixel geometry.

use crate::axis::Axis;

/// `(low_exclusive, high_inclusive, stride)`, tested in order.
const SPACING_BUCKETS: [(usize, usize, usize); 6] = [
    (0, 8, 1),
    (8, 16, 2),
    (16, 22, 3),
    (22, 50, 5),
    (50, 200, 10),
    (200, 1000, 14),
];

/// Label stride for an axis of `tick_count` ticks: draw a label every Nth tick.
///
/// Counts outside `(0, 1000]` clamp to the nearest bucket, so the stride is
/// never zero.
pub fn tick_spacing(tick_count: usize) -> usize {
    if let Some(&(_, _, stride)) = SPACING_BUCKETS
        .iter()
        .find(|(lo, hi, _)| tick_count > *lo && tick_count <= *hi)
    {
        return stride;
    }
    let (first, last) = (SPACING_BUCKETS[0], SPACING_BUCKETS[SPACING_BUCKETS.len() - 1]);
    let stride = if tick_count <= first.0 { first.2 } else { last.2 };
    log::warn!("tick count {tick_count} outside spacing table; using stride {stride}");
    stride
}

/// Pixel geometry of one rendered grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridGeometry {
    pub padding: f32,
    pub panel_width: f32,
    pub panel_height: f32,
    pub cell_width: f32,
    pub cell_height: f32,
}

impl GridGeometry {
    /// Cell size = `(surface - 2 * padding) / (ticks - 1)` per axis.
    pub fn new(surface_width: u32, surface_height: u32, padding: f32, x_axis: &Axis, y_axis: &Axis) -> Self {
        let panel_width = surface_width as f32 - padding * 2.0;
        let panel_height = surface_height as f32 - padding * 2.0;
        Self {
            padding,
            panel_width,
            panel_height,
            cell_width: panel_width / x_axis.cell_count() as f32,
            cell_height: panel_height / y_axis.cell_count() as f32,
        }
    }

    /// Map a surface pixel to panel-local coordinates, or `None` outside the panel.
    pub fn to_local(&self, offset_x: f32, offset_y: f32) -> Option<(f32, f32)> {
        let lx = offset_x - self.padding;
        let ly = offset_y - self.padding;
        let inside = lx >= 0.0 && ly >= 0.0 && lx <= self.panel_width && ly <= self.panel_height;
        inside.then_some((lx, ly))
    }

    /// Grid line offset for tick `index`; the half pixel keeps 1px lines crisp.
    pub fn line_x(&self, index: usize) -> f32 {
        self.cell_width * index as f32 - 0.5
    }

    pub fn line_y(&self, index: usize) -> f32 {
        self.cell_height * index as f32 - 0.5
    }

    pub fn smallest_cell(&self) -> f32 {
        self.cell_width.min(self.cell_height)
    }

    /// True when one cell already fills the panel along either axis.
    pub fn fills_panel(&self) -> bool {
        self.cell_width >= self.panel_width || self.cell_height >= self.panel_height
    }
}
