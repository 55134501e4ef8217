// File: crates/heatmap-core/src/heatmap.rs
// Summary: Heatmap facade owning one surface, its options, the last frame and the zoom state.

use crate::coverage::CoverageResult;
use crate::error::{HeatmapError, Result};
use crate::options::{HeatmapOptions, OptionsPatch};
use crate::render::{self, Frame};
use crate::surface::DrawingSurface;
use crate::zoom::{CursorState, PointerMove, Wheel, ZoomController, ZoomOutcome};

/// Resolves a named mount target to whatever the host attaches a heatmap to.
pub trait MountHost {
    type Target;
    fn resolve(&mut self, target: &str) -> Option<Self::Target>;
}

/// Tooltip content for the grid point under the cursor, in surface pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    /// `"<x tick>*<y tick>"`.
    pub text: String,
    pub left: f32,
    pub top: f32,
}

/// One interactive heatmap bound to one drawing surface.
///
/// Every entry point takes `&mut self`, so a clear/render pair always runs to
/// completion before the next event is handled.
pub struct Heatmap<S: DrawingSurface> {
    surface: S,
    options: HeatmapOptions,
    frame: Option<Frame>,
    zoom: ZoomController,
    mounted: Option<String>,
    renders: u64,
}

impl<S: DrawingSurface> Heatmap<S> {
    /// Take ownership of `surface` and draw the first frame.
    pub fn initialize(options: HeatmapOptions, surface: S) -> Result<Self> {
        let mut heatmap = Self {
            surface,
            options: options.clone(),
            frame: None,
            zoom: ZoomController::new(),
            mounted: None,
            renders: 0,
        };
        heatmap.render(options)?;
        Ok(heatmap)
    }

    /// Attach to `target` through `host`. Fails when the host cannot resolve it.
    pub fn mount<H: MountHost>(&mut self, host: &mut H, target: &str) -> Result<H::Target> {
        let resolved = host
            .resolve(target)
            .ok_or_else(|| HeatmapError::MountTarget { target: target.to_string() })?;
        log::debug!("mounted on `{target}`");
        self.mounted = Some(target.to_string());
        Ok(resolved)
    }

    /// Merge `patch` into the held options and redraw.
    pub fn update(&mut self, patch: &OptionsPatch) -> Result<&CoverageResult> {
        let next = self.options.merged(patch);
        self.render(next)
    }

    /// Redraw with `options`, which replace the held options on success.
    /// The cursor is re-mapped onto the new grid.
    ///
    /// Axes are validated before the surface is touched, so a failed render
    /// leaves the previous frame and options in place.
    pub fn render(&mut self, options: HeatmapOptions) -> Result<&CoverageResult> {
        let (x_axis, y_axis) = render::build_axes(&options)?;
        self.clear();
        let frame = render::render_axes(&mut self.surface, &options, x_axis, y_axis);
        self.renders += 1;
        self.options = options;
        let frame = self.frame.insert(frame);
        self.zoom.retrack(&frame.grid);
        Ok(&frame.coverage)
    }

    /// Undo the padding translation and wipe the surface. No-op when nothing
    /// is drawn.
    pub fn clear(&mut self) {
        if let Some(frame) = self.frame.take() {
            render::clear(&mut self.surface, frame.grid.padding);
        }
    }

    /// Track the pointer; returns the new cursor state.
    pub fn pointer_move(&mut self, event: PointerMove) -> CursorState {
        match &self.frame {
            Some(frame) => self.zoom.pointer_move(event, &frame.grid),
            None => self.zoom.cursor(),
        }
    }

    /// Apply a wheel tick: halve or double the grid steps and redraw.
    pub fn wheel(&mut self, event: Wheel) -> Result<ZoomOutcome> {
        let Some(frame) = &self.frame else { return Ok(ZoomOutcome::Ignored) };
        if self.options.disable_zoom {
            return Ok(ZoomOutcome::Ignored);
        }
        let outcome = self.zoom.wheel(
            event,
            &frame.grid,
            (self.options.x_axis, self.options.y_axis),
            (self.options.x_grad, self.options.y_grad),
        );
        if let ZoomOutcome::Applied(request) = outcome {
            let next = self.options.clone().with_grads(request.x_grad, request.y_grad);
            self.render(next)?;
            log::debug!("zoom {:?}: steps now {}x{}", request.direction, request.x_grad, request.y_grad);
        }
        Ok(outcome)
    }

    /// Tooltip for the grid point under the cursor.
    pub fn tooltip(&self) -> Option<Tooltip> {
        if self.options.disable_tooltip {
            return None;
        }
        let frame = self.frame.as_ref()?;
        let CursorState::Inside { col, row } = self.zoom.cursor() else { return None };
        let text = format!("{}*{}", frame.x_axis.label(col)?, frame.y_axis.label(row)?);
        Some(Tooltip {
            text,
            left: col as f32 * frame.grid.cell_width + frame.grid.padding,
            top: row as f32 * frame.grid.cell_height + frame.grid.padding,
        })
    }

    pub fn coverage(&self) -> Option<&CoverageResult> {
        self.frame.as_ref().map(|f| &f.coverage)
    }

    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    pub fn options(&self) -> &HeatmapOptions {
        &self.options
    }

    pub fn cursor(&self) -> CursorState {
        self.zoom.cursor()
    }

    pub fn mounted(&self) -> Option<&str> {
        self.mounted.as_deref()
    }

    /// Completed render passes since initialization.
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
