// File: crates/heatmap-core/src/lib.rs
// Summary: Core library entry point; exports the grid binning, coverage, render and zoom API.

pub mod axis;
pub mod binning;
pub mod containment;
pub mod coverage;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod heatmap;
pub mod options;
pub mod render;
pub mod surface;
pub mod theme;
pub mod types;
pub mod zoom;

pub use axis::{Axis, AxisRange};
pub use binning::bin;
pub use containment::{Containment, HalfOpen, SharedContainment};
pub use coverage::{coverage, CoverageResult};
pub use error::HeatmapError;
pub use grid::{tick_spacing, GridGeometry};
pub use heatmap::{Heatmap, MountHost, Tooltip};
pub use options::{HeatmapOptions, OptionsPatch};
pub use render::Frame;
pub use surface::{DrawCommand, DrawingSurface, RecordingSurface, TextAlign};
pub use theme::{Rgba, Theme};
pub use types::{Cell, CornerMode, Point};
pub use zoom::{CursorState, PointerMove, Wheel, ZoomController, ZoomDirection, ZoomOutcome};
