// File: crates/heatmap-core/src/render.rs
// Summary: Render pipeline: axes, gridlines and labels, binning, cell fills, coverage.

use crate::axis::Axis;
use crate::binning::bin;
use crate::coverage::{coverage, CoverageResult};
use crate::error::Result;
use crate::geometry::cell_rect;
use crate::grid::{tick_spacing, GridGeometry};
use crate::options::HeatmapOptions;
use crate::surface::{DrawingSurface, TextAlign};
use crate::theme::Theme;
use crate::types::Cell;

/// X labels sit this far above the panel.
const X_LABEL_OFFSET: f32 = -8.0;
/// Y labels end this far left of the panel.
const Y_LABEL_OFFSET: f32 = -5.0;
/// Baseline nudge to center Y labels on their gridline.
const Y_LABEL_BASELINE: f32 = 5.0;

/// Everything one render pass produced.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub grid: GridGeometry,
    /// Occupied cells in hit order, duplicates included.
    pub cells: Vec<Cell>,
    pub coverage: CoverageResult,
}

/// Both axes for `options`; fails before anything is drawn.
pub fn build_axes(options: &HeatmapOptions) -> Result<(Axis, Axis)> {
    let x_axis = Axis::build(options.x_axis, options.x_grad)?;
    let y_axis = Axis::build(options.y_axis, options.y_grad)?;
    Ok((x_axis, y_axis))
}

/// Draw one frame onto `surface`, which must be untranslated and clear.
///
/// Leaves the surface translated by the padding; undo it with [`clear`].
pub fn render<S: DrawingSurface + ?Sized>(surface: &mut S, options: &HeatmapOptions) -> Result<Frame> {
    let (x_axis, y_axis) = build_axes(options)?;
    Ok(render_axes(surface, options, x_axis, y_axis))
}

/// Draw one frame from already validated axes.
pub fn render_axes<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    options: &HeatmapOptions,
    x_axis: Axis,
    y_axis: Axis,
) -> Frame {
    let grid = GridGeometry::new(surface.width(), surface.height(), options.padding, &x_axis, &y_axis);

    surface.translate(options.padding, options.padding);
    draw_axes(surface, &grid, &x_axis, &y_axis, &options.theme);

    let cells = bin(&x_axis, &y_axis, &options.data, &*options.containment, options.corner);
    draw_cells(surface, &grid, &cells, &options.theme);

    let total = x_axis.cell_count() * y_axis.cell_count();
    let coverage = coverage(&cells, total);
    log::debug!(
        "rendered {}x{} ticks, cell {:.2}x{:.2}px, {} hits, coverage {}",
        x_axis.len(),
        y_axis.len(),
        grid.cell_width,
        grid.cell_height,
        cells.len(),
        coverage
    );
    Frame { x_axis, y_axis, grid, cells, coverage }
}

/// Undo the padding translation of a previous [`render`] and wipe the surface.
pub fn clear<S: DrawingSurface + ?Sized>(surface: &mut S, padding: f32) {
    surface.translate(-padding, -padding);
    let (w, h) = (surface.width() as f32, surface.height() as f32);
    surface.clear_rect(0.0, 0.0, w, h);
}

// ---- helpers ----------------------------------------------------------------

fn draw_axes<S: DrawingSurface + ?Sized>(surface: &mut S, grid: &GridGeometry, x_axis: &Axis, y_axis: &Axis, theme: &Theme) {
    // verticals with X labels
    let x_stride = tick_spacing(x_axis.len());
    for (i, &tick) in x_axis.ticks().iter().enumerate() {
        let x = grid.line_x(i);
        let color = if i % x_stride == 0 {
            surface.fill_text(&crate::axis::format_tick(tick), grid.cell_width * i as f32, X_LABEL_OFFSET, TextAlign::Center, theme.label);
            theme.grid_major
        } else {
            theme.grid_minor
        };
        surface.draw_line((x, 0.0), (x, grid.panel_height), color);
    }

    // horizontals with Y labels
    let y_stride = tick_spacing(y_axis.len());
    for (i, &tick) in y_axis.ticks().iter().enumerate() {
        let y = grid.line_y(i);
        let color = if i % y_stride == 0 {
            surface.fill_text(
                &crate::axis::format_tick(tick),
                Y_LABEL_OFFSET,
                grid.cell_height * i as f32 + Y_LABEL_BASELINE,
                TextAlign::Right,
                theme.label,
            );
            theme.grid_major
        } else {
            theme.grid_minor
        };
        surface.draw_line((0.0, y), (grid.panel_width, y), color);
    }
}

fn draw_cells<S: DrawingSurface + ?Sized>(surface: &mut S, grid: &GridGeometry, cells: &[Cell], theme: &Theme) {
    for &cell in cells {
        let r = cell_rect(grid, cell);
        surface.fill_rect(r.left, r.top, r.width(), r.height(), theme.cell_fill);
    }
}
