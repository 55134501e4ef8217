// File: crates/window-demo/src/main.rs
// Summary: Interactive window demo: renders the heatmap through Skia, blits it via softbuffer, and
// feeds winit cursor/wheel events into the zoom controller.

use std::num::NonZeroU32;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use heatmap_core::{theme, DrawingSurface, Heatmap, HeatmapOptions, PointerMove, Wheel, ZoomOutcome};
use heatmap_demo::{data_ranges, load_points_csv};
use heatmap_render_skia::SkiaSurface;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, MouseScrollDelta, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

#[derive(Parser)]
#[command(name = "heatmap-window-demo")]
#[command(about = "Interactive coverage heatmap; scroll over the grid to change its density")]
struct Cli {
    /// CSV file with x,y columns
    points: PathBuf,

    /// Initial grid step on both axes
    #[arg(long)]
    grad: Option<f64>,

    /// Window edge in pixels
    #[arg(long, default_value_t = 640)]
    size: u32,

    /// Theme preset; the window has no backdrop, so prefer an opaque one
    #[arg(long, default_value = "dark")]
    theme: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let points = load_points_csv(&cli.points)
        .with_context(|| format!("failed to load CSV '{}'", cli.points.display()))?;
    let (x, y) = data_ranges(&points).context("no points loaded")?;
    let grad = cli.grad.unwrap_or_else(|| (x.span().max(y.span()) / 10.0).ceil().max(1.0));
    let options = HeatmapOptions::new(x, y)
        .with_size(cli.size, cli.size)
        .with_grads(grad, grad)
        .with_data(points)
        .with_theme(theme::find(&cli.theme));

    let surface = SkiaSurface::for_options(&options)?;
    let mut heatmap = Heatmap::initialize(options, surface)?;

    // Window + softbuffer setup
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(title(&heatmap))
        .with_inner_size(PhysicalSize::new(cli.size, cli.size))
        .with_resizable(false)
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut frame_surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::KeyboardInput { input, .. } => {
                    if input.state == ElementState::Pressed && input.virtual_keycode == Some(VirtualKeyCode::Escape) {
                        *cf = ControlFlow::Exit;
                    }
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let before = heatmap.cursor();
                    let after = heatmap.pointer_move(PointerMove { offset_x: position.x as f32, offset_y: position.y as f32 });
                    if before != after {
                        window.set_title(&title(&heatmap));
                    }
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    // winit reports scrolling up as positive; the heatmap expects DOM-style deltas.
                    let delta_y = match delta {
                        MouseScrollDelta::LineDelta(_, y) => -y,
                        MouseScrollDelta::PixelDelta(p) => -(p.y as f32),
                    };
                    match heatmap.wheel(Wheel { delta_y }) {
                        Ok(ZoomOutcome::Applied(_)) => {
                            window.set_title(&title(&heatmap));
                            window.request_redraw();
                        }
                        Ok(_) => {}
                        Err(e) => log::error!("zoom failed: {e}"),
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = present(&mut heatmap, &mut frame_surface) {
                    log::error!("present failed: {e:#}");
                }
            }
            _ => {}
        }
    });
}

/// Copy the Skia raster into the window as 0RGB pixels.
fn present(heatmap: &mut Heatmap<SkiaSurface>, frame_surface: &mut softbuffer::Surface) -> Result<()> {
    let (w, h) = (heatmap.surface().width(), heatmap.surface().height());
    let (Some(nw), Some(nh)) = (NonZeroU32::new(w), NonZeroU32::new(h)) else { return Ok(()) };
    frame_surface.resize(nw, nh).map_err(|e| anyhow::anyhow!("resize: {e}"))?;

    let rgba = heatmap.surface_mut().to_rgba8()?;
    let mut frame = frame_surface.buffer_mut().map_err(|e| anyhow::anyhow!("buffer: {e}"))?;
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        *dst = ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32;
    }
    frame.present().map_err(|e| anyhow::anyhow!("present: {e}"))?;
    Ok(())
}

fn title(heatmap: &Heatmap<SkiaSurface>) -> String {
    let at = heatmap.tooltip().map(|t| t.text).unwrap_or_else(|| "-".to_string());
    let cov = heatmap.coverage().map(|c| c.to_string()).unwrap_or_default();
    let o = heatmap.options();
    format!("Scatter Heatmap | {at} | step {}x{} | coverage {cov}", o.x_grad, o.y_grad)
}
