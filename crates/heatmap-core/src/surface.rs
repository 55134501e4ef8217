// File: crates/heatmap-core/src/surface.rs
// Summary: Immediate-mode 2-D drawing surface abstraction and a recording implementation.

use crate::theme::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// The primitives the render pipeline draws with. Coordinates are in pixels,
/// relative to the current translation.
pub trait DrawingSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn draw_line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgba);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba);
    /// Draw `text` with its baseline at `y`, anchored at `x` per `align`.
    fn fill_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign, color: Rgba);
    fn translate(&mut self, dx: f32, dy: f32);
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for &mut S {
    fn width(&self) -> u32 { (**self).width() }
    fn height(&self) -> u32 { (**self).height() }
    fn draw_line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgba) { (**self).draw_line(from, to, color) }
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) { (**self).fill_rect(x, y, w, h, color) }
    fn fill_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign, color: Rgba) { (**self).fill_text(text, x, y, align, color) }
    fn translate(&mut self, dx: f32, dy: f32) { (**self).translate(dx, dy) }
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) { (**self).clear_rect(x, y, w, h) }
}

/// One captured drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line { from: (f32, f32), to: (f32, f32), color: Rgba },
    FillRect { x: f32, y: f32, w: f32, h: f32, color: Rgba },
    Text { text: String, x: f32, y: f32, align: TextAlign, color: Rgba },
    Translate { dx: f32, dy: f32 },
    ClearRect { x: f32, y: f32, w: f32, h: f32 },
}

/// Surface that records calls instead of rasterizing them. Tracks the net
/// translation so callers can check that clear/render pairs balance.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    offset: (f32, f32),
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, offset: (0.0, 0.0), commands: Vec::new() }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Net translation currently applied.
    pub fn offset(&self) -> (f32, f32) {
        self.offset
    }

    pub fn filled_rects(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::FillRect { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl DrawingSurface for RecordingSurface {
    fn width(&self) -> u32 { self.width }
    fn height(&self) -> u32 { self.height }

    fn draw_line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgba) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        self.commands.push(DrawCommand::FillRect { x, y, w, h, color });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign, color: Rgba) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), x, y, align, color });
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.offset.0 += dx;
        self.offset.1 += dy;
        self.commands.push(DrawCommand::Translate { dx, dy });
    }

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::ClearRect { x, y, w, h });
    }
}
