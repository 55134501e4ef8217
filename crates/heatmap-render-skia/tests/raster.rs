// File: crates/heatmap-render-skia/tests/raster.rs
// Purpose: Render heatmaps onto a Skia raster surface and check buffers, pixels and PNG output.

use heatmap_core::{AxisRange, Heatmap, HeatmapOptions, PointerMove, Theme, Wheel, ZoomOutcome};
use heatmap_render_skia::{to_skia, SkiaSurface};

fn options() -> HeatmapOptions {
    HeatmapOptions::new(AxisRange::new(0.0, 100.0), AxisRange::new(0.0, 100.0))
        .with_grads(50.0, 50.0)
        .with_data([(10.0, 10.0), (60.0, 60.0)])
        .with_theme(Theme::dark())
}

fn pixel(rgba: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * width + x) * 4) as usize;
    [rgba[i], rgba[i + 1], rgba[i + 2], rgba[i + 3]]
}

#[test]
fn rgba_buffer_has_surface_shape() {
    let opts = options();
    let surface = SkiaSurface::for_options(&opts).expect("surface");
    let mut h = Heatmap::initialize(opts, surface).expect("render");
    let px = h.surface_mut().to_rgba8().expect("rgba");
    assert_eq!(px.len(), 320 * 320 * 4);
    // Background alpha in the top-left corner.
    assert_eq!(px[3], 255);
}

#[test]
fn occupied_cells_are_filled_and_empty_ones_are_not() {
    let opts = options();
    let theme = opts.theme;
    let surface = SkiaSurface::for_options(&opts).unwrap();
    let mut h = Heatmap::initialize(opts, surface).unwrap();
    let px = h.surface_mut().to_rgba8().unwrap();

    let fill = to_skia(theme.cell_fill);
    let want = [fill.r(), fill.g(), fill.b(), 255];
    // Centers of cell (0,0) and (1,1), panel offset by 40px.
    assert_eq!(pixel(&px, 320, 100, 100), want);
    assert_eq!(pixel(&px, 320, 220, 220), want);
    // Center of empty cell (1,0).
    assert_ne!(pixel(&px, 320, 220, 100), want);
}

#[test]
fn zoom_redraws_into_the_same_surface() {
    let opts = options();
    let surface = SkiaSurface::for_options(&opts).unwrap();
    let mut h = Heatmap::initialize(opts, surface).unwrap();
    h.pointer_move(PointerMove { offset_x: 100.0, offset_y: 100.0 });
    assert!(matches!(h.wheel(Wheel { delta_y: -1.0 }).unwrap(), ZoomOutcome::Applied(_)));

    // 60px cells now: (10,10) lands in (0,0), (60,60) in (2,2); cell (1,1) is empty.
    let px = h.surface_mut().to_rgba8().unwrap();
    let fill = to_skia(Theme::dark().cell_fill);
    let want = [fill.r(), fill.g(), fill.b(), 255];
    assert_eq!(pixel(&px, 320, 70, 70), want);
    assert_eq!(pixel(&px, 320, 190, 190), want);
    assert_ne!(pixel(&px, 320, 130, 130), want);
}

#[test]
fn png_bytes_have_png_header() {
    let opts = options();
    let surface = SkiaSurface::for_options(&opts).unwrap();
    let mut h = Heatmap::initialize(opts, surface).unwrap();
    let bytes = h.surface_mut().to_png_bytes().expect("png");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let out = std::path::PathBuf::from("target/test_out/raster.png");
    h.surface_mut().write_png(&out).expect("write png");
    assert!(std::fs::metadata(&out).expect("output exists").len() > 0);
}
