// File: crates/demo/tests/points.rs
// Purpose: Validate CSV point loading, data-derived ranges, the output directory mount host and PNG export.

use std::path::Path;

use heatmap_core::{AxisRange, Heatmap, HeatmapError, HeatmapOptions, MountHost, Point};
use heatmap_demo::{data_ranges, export_png, load_points_csv, parse_range, OutputDirs};
use heatmap_render_skia::SkiaSurface;

fn write_csv(name: &str, body: &str) -> std::path::PathBuf {
    let path = std::path::PathBuf::from("target/test_out").join(name);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn loads_named_columns_and_skips_bad_rows() {
    let path = write_csv("named.csv", "id, Y, X\n1, 10, 20\n2, oops, 5\n3, 7.5, 0\n");
    let points = load_points_csv(&path).expect("load");
    assert_eq!(points, vec![Point::new(20.0, 10.0), Point::new(0.0, 7.5)]);
}

#[test]
fn falls_back_to_first_two_columns() {
    let path = write_csv("unnamed.csv", "a,b\n1,2\n3,4\n");
    let points = load_points_csv(&path).expect("load");
    assert_eq!(points, vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
}

#[test]
fn ranges_cover_the_maximum_point() {
    let pts = [Point::new(0.5, -3.2), Point::new(99.0, 12.0)];
    let (x, y) = data_ranges(&pts).expect("ranges");
    assert_eq!(x, AxisRange::new(0.0, 100.0));
    assert_eq!(y, AxisRange::new(-4.0, 13.0));
    assert!(data_ranges(&[]).is_none());
}

#[test]
fn parses_min_max_pairs() {
    assert_eq!(parse_range("0, 100"), Ok(AxisRange::new(0.0, 100.0)));
    assert!(parse_range("100").is_err());
    assert!(parse_range("a,1").is_err());
}

#[test]
fn output_dirs_resolve_existing_directories_only() {
    std::fs::create_dir_all("target/test_out").unwrap();
    assert!(OutputDirs.resolve("target/test_out").is_some());
    assert!(OutputDirs.resolve("target/test_out/definitely-missing").is_none());
}

fn small_heatmap() -> Heatmap<SkiaSurface> {
    let options = HeatmapOptions::new(AxisRange::new(0.0, 100.0), AxisRange::new(0.0, 100.0))
        .with_grads(50.0, 50.0)
        .with_data([(10.0, 10.0)]);
    let surface = SkiaSurface::for_options(&options).expect("surface");
    Heatmap::initialize(options, surface).expect("render")
}

#[test]
fn export_into_missing_directory_fails_to_mount() {
    let missing = "target/test_out/export-missing";
    let _ = std::fs::remove_dir_all(missing);
    let mut h = small_heatmap();

    let err = export_png(&mut h, missing, Path::new("pts.csv")).unwrap_err();
    assert_eq!(
        err.downcast_ref::<HeatmapError>(),
        Some(&HeatmapError::MountTarget { target: missing.to_string() })
    );
    assert!(!Path::new(missing).exists(), "directory must not be created");
    assert_eq!(h.mounted(), None);
}

#[test]
fn export_writes_named_png_into_existing_directory() {
    let dir = "target/test_out/export-ok";
    std::fs::create_dir_all(dir).unwrap();
    let mut h = small_heatmap();

    let out = export_png(&mut h, dir, Path::new("data/pts.csv")).expect("export");
    assert_eq!(out, Path::new(dir).join("heatmap_pts.png"));
    assert!(std::fs::metadata(&out).expect("png written").len() > 0);
    assert_eq!(h.mounted(), Some(dir));
}
