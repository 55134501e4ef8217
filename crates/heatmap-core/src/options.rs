// File: crates/heatmap-core/src/options.rs
// Summary: Heatmap configuration value and the partial patch merged by `update`.

use serde::{Deserialize, Serialize};

use crate::axis::AxisRange;
use crate::containment::{self, SharedContainment};
use crate::theme::Theme;
use crate::types::{CornerMode, Point, GRAD, HEIGHT, PADDING, WIDTH};

/// Immutable heatmap configuration. `update` builds a new value through
/// [`HeatmapOptions::merged`] instead of mutating the held one.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapOptions {
    /// Size used by surface factories such as `SkiaSurface::for_options`.
    /// Rendering always measures the surface it draws on, so patching
    /// `width`/`height` later does not resize an existing surface.
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    pub x_axis: AxisRange,
    pub y_axis: AxisRange,
    #[serde(default = "default_grad")]
    pub x_grad: f64,
    #[serde(default = "default_grad")]
    pub y_grad: f64,
    #[serde(default)]
    pub data: Vec<Point>,
    #[serde(default)]
    pub disable_zoom: bool,
    #[serde(default)]
    pub disable_tooltip: bool,
    #[serde(default = "default_padding")]
    pub padding: f32,
    #[serde(default)]
    pub corner: CornerMode,
    #[serde(skip, default = "containment::half_open")]
    pub containment: SharedContainment,
    #[serde(skip)]
    pub theme: Theme,
}

fn default_width() -> u32 { WIDTH }
fn default_height() -> u32 { HEIGHT }
fn default_grad() -> f64 { GRAD }
fn default_padding() -> f32 { PADDING }

impl HeatmapOptions {
    /// Options over the given axis ranges with every other field at its default.
    pub fn new(x_axis: AxisRange, y_axis: AxisRange) -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            x_axis,
            y_axis,
            x_grad: GRAD,
            y_grad: GRAD,
            data: Vec::new(),
            disable_zoom: false,
            disable_tooltip: false,
            padding: PADDING,
            corner: CornerMode::LeftTop,
            containment: containment::half_open(),
            theme: Theme::default(),
        }
    }

    pub fn with_grads(mut self, x_grad: f64, y_grad: f64) -> Self {
        self.x_grad = x_grad;
        self.y_grad = y_grad;
        self
    }

    pub fn with_data(mut self, data: impl IntoIterator<Item = impl Into<Point>>) -> Self {
        self.data = data.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_containment(mut self, containment: SharedContainment) -> Self {
        self.containment = containment;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// New options with every field set in `patch` replaced.
    pub fn merged(&self, patch: &OptionsPatch) -> Self {
        let mut next = self.clone();
        if let Some(v) = patch.width { next.width = v; }
        if let Some(v) = patch.height { next.height = v; }
        if let Some(v) = patch.x_axis { next.x_axis = v; }
        if let Some(v) = patch.y_axis { next.y_axis = v; }
        if let Some(v) = patch.x_grad { next.x_grad = v; }
        if let Some(v) = patch.y_grad { next.y_grad = v; }
        if let Some(v) = &patch.data { next.data = v.clone(); }
        if let Some(v) = patch.disable_zoom { next.disable_zoom = v; }
        if let Some(v) = patch.disable_tooltip { next.disable_tooltip = v; }
        if let Some(v) = patch.padding { next.padding = v; }
        if let Some(v) = patch.corner { next.corner = v; }
        if let Some(v) = &patch.containment { next.containment = v.clone(); }
        if let Some(v) = patch.theme { next.theme = v; }
        next
    }
}

/// Partial options; `None` keeps the current value.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsPatch {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub x_axis: Option<AxisRange>,
    pub y_axis: Option<AxisRange>,
    pub x_grad: Option<f64>,
    pub y_grad: Option<f64>,
    pub data: Option<Vec<Point>>,
    pub disable_zoom: Option<bool>,
    pub disable_tooltip: Option<bool>,
    pub padding: Option<f32>,
    pub corner: Option<CornerMode>,
    #[serde(skip)]
    pub containment: Option<SharedContainment>,
    #[serde(skip)]
    pub theme: Option<Theme>,
}

impl OptionsPatch {
    pub fn grads(x_grad: f64, y_grad: f64) -> Self {
        Self { x_grad: Some(x_grad), y_grad: Some(y_grad), ..Self::default() }
    }

    pub fn data(data: impl IntoIterator<Item = impl Into<Point>>) -> Self {
        Self { data: Some(data.into_iter().map(Into::into).collect()), ..Self::default() }
    }
}
