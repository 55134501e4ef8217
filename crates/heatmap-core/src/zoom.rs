// File: crates/heatmap-core/src/zoom.rs
// Summary: Cursor tracking and wheel-driven grid step scaling.

use crate::axis::{Axis, AxisRange};
use crate::grid::GridGeometry;
use crate::types::{MIN_CELL_PX, ZOOM_SCALE};

/// Pointer moved to `(offset_x, offset_y)` surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerMove {
    pub offset_x: f32,
    pub offset_y: f32,
}

/// Wheel tick; negative `delta_y` zooms in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wheel {
    pub delta_y: f32,
}

/// Last known pointer position in grid terms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorState {
    #[default]
    Idle,
    /// Tick indices under the pointer, `ceil(local / cell)` per axis.
    Inside { col: usize, row: usize },
    Outside,
}

impl CursorState {
    /// Grid point under the cursor, `(-1, -1)` when not inside.
    pub fn grid_point(&self) -> (i64, i64) {
        match *self {
            CursorState::Inside { col, row } => (col as i64, row as i64),
            _ => (-1, -1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Step pair a zoom wants to apply.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomRequest {
    pub direction: ZoomDirection,
    pub x_grad: f64,
    pub y_grad: f64,
}

/// Result of feeding a wheel tick to the heatmap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomOutcome {
    /// Re-rendered with the new steps.
    Applied(ZoomRequest),
    /// Hit a density limit; nothing changed.
    Rejected(ZoomDirection),
    /// Zoom disabled, cursor not over the grid, or zero delta.
    Ignored,
}

/// Owns the cursor state and decides whether a wheel tick may change the grid.
#[derive(Clone, Debug, Default)]
pub struct ZoomController {
    cursor: CursorState,
    last_pointer: Option<PointerMove>,
}

impl ZoomController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> CursorState {
        self.cursor
    }

    pub fn reset(&mut self) {
        self.cursor = CursorState::Idle;
        self.last_pointer = None;
    }

    /// Re-map the last pointer position onto a freshly rendered grid, so the
    /// cursor indices never refer to a previous tick sequence.
    pub fn retrack(&mut self, grid: &GridGeometry) -> CursorState {
        match self.last_pointer {
            Some(event) => self.pointer_move(event, grid),
            None => self.cursor,
        }
    }

    /// Track the pointer against the current grid.
    pub fn pointer_move(&mut self, event: PointerMove, grid: &GridGeometry) -> CursorState {
        let next = match grid.to_local(event.offset_x, event.offset_y) {
            Some((lx, ly)) => CursorState::Inside {
                col: (lx / grid.cell_width).ceil() as usize,
                row: (ly / grid.cell_height).ceil() as usize,
            },
            None => CursorState::Outside,
        };
        self.last_pointer = Some(event);
        if next != self.cursor {
            log::trace!("cursor {:?} -> {:?}", self.cursor, next);
        }
        self.cursor = next;
        next
    }

    /// Decide what a wheel tick does to the steps `(x_grad, y_grad)`.
    ///
    /// Zooming in halves the steps unless a resulting cell would be smaller
    /// than [`MIN_CELL_PX`]; zooming out doubles them unless a current cell
    /// already spans the panel. Rejections are not errors.
    pub fn wheel(
        &self,
        event: Wheel,
        grid: &GridGeometry,
        ranges: (AxisRange, AxisRange),
        grads: (f64, f64),
    ) -> ZoomOutcome {
        if !matches!(self.cursor, CursorState::Inside { .. }) || event.delta_y == 0.0 {
            return ZoomOutcome::Ignored;
        }
        let (x_grad, y_grad) = grads;

        if event.delta_y < 0.0 {
            let request = ZoomRequest { direction: ZoomDirection::In, x_grad: x_grad / ZOOM_SCALE, y_grad: y_grad / ZOOM_SCALE };
            let cell_w = resulting_cell(grid.panel_width, ranges.0, request.x_grad);
            let cell_h = resulting_cell(grid.panel_height, ranges.1, request.y_grad);
            match (cell_w, cell_h) {
                (Some(w), Some(h)) if w >= MIN_CELL_PX && h >= MIN_CELL_PX => ZoomOutcome::Applied(request),
                _ => {
                    log::debug!("zoom in rejected: cells would be {cell_w:?}x{cell_h:?}px");
                    ZoomOutcome::Rejected(ZoomDirection::In)
                }
            }
        } else {
            if grid.fills_panel() {
                log::debug!("zoom out rejected: cell {}x{}px fills the panel", grid.cell_width, grid.cell_height);
                return ZoomOutcome::Rejected(ZoomDirection::Out);
            }
            ZoomOutcome::Applied(ZoomRequest { direction: ZoomDirection::Out, x_grad: x_grad * ZOOM_SCALE, y_grad: y_grad * ZOOM_SCALE })
        }
    }
}

/// Cell edge a panel of `panel` pixels would get with the new step.
fn resulting_cell(panel: f32, range: AxisRange, step: f64) -> Option<f32> {
    let ticks = Axis::tick_count(range, step).ok()?;
    Some(panel / (ticks - 1) as f32)
}
