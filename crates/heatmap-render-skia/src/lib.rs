// File: crates/heatmap-render-skia/src/lib.rs
// Summary: Skia CPU raster surface implementing `DrawingSurface`, plus RGBA and PNG export.

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use heatmap_core::{DrawingSurface, HeatmapOptions, Rgba, TextAlign};
use skia_safe as skia;

pub mod text;

pub use text::TextShaper;

#[inline]
pub fn to_skia(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// CPU raster surface with a fixed background used by `clear_rect`.
pub struct SkiaSurface {
    surface: skia::Surface,
    shaper: TextShaper,
    width: u32,
    height: u32,
    background: skia::Color,
}

impl SkiaSurface {
    pub fn new(width: u32, height: u32, background: Rgba) -> Result<Self> {
        let mut surface = skia::surfaces::raster_n32_premul((width as i32, height as i32))
            .ok_or_else(|| anyhow::anyhow!("failed to create {width}x{height} raster surface"))?;
        let background = to_skia(background);
        surface.canvas().clear(background);
        Ok(Self { surface, shaper: TextShaper::new(), width, height, background })
    }

    /// Surface sized and filled per `options`.
    pub fn for_options(options: &HeatmapOptions) -> Result<Self> {
        Self::new(options.width, options.height, options.theme.background)
    }

    /// Copy pixels out as unpremultiplied RGBA8, row-major, `width * 4` bytes per row.
    pub fn to_rgba8(&mut self) -> Result<Vec<u8>> {
        let info = skia::ImageInfo::new(
            (self.width as i32, self.height as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = self.width as usize * 4;
        let mut pixels = vec![0u8; row_bytes * self.height as usize];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("read_pixels failed");
        }
        Ok(pixels)
    }

    pub fn to_png_bytes(&mut self) -> Result<Vec<u8>> {
        let pixels = self.to_rgba8()?;
        let img = image::RgbaImage::from_raw(self.width, self.height, pixels)
            .ok_or_else(|| anyhow::anyhow!("pixel buffer does not match {}x{}", self.width, self.height))?;
        let mut out = Vec::new();
        img.write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
            .context("encode PNG failed")?;
        Ok(out)
    }

    pub fn write_png(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_png_bytes()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
        log::debug!("wrote {}", path.display());
        Ok(())
    }
}

impl DrawingSurface for SkiaSurface {
    fn width(&self) -> u32 { self.width }
    fn height(&self) -> u32 { self.height }

    fn draw_line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgba) {
        let mut paint = skia::Paint::default();
        paint.set_color(to_skia(color));
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(1.0);
        self.surface.canvas().draw_line(from, to, &paint);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        let mut paint = skia::Paint::default();
        paint.set_color(to_skia(color));
        paint.set_style(skia::paint::Style::Fill);
        self.surface.canvas().draw_rect(skia::Rect::from_xywh(x, y, w, h), &paint);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign, color: Rgba) {
        let canvas = self.surface.canvas();
        self.shaper.draw(canvas, text, x, y, align, crate::text::LABEL_SIZE, to_skia(color));
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.surface.canvas().translate((dx, dy));
    }

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let mut paint = skia::Paint::default();
        paint.set_color(self.background);
        paint.set_blend_mode(skia::BlendMode::Src);
        self.surface.canvas().draw_rect(skia::Rect::from_xywh(x, y, w, h), &paint);
    }
}
