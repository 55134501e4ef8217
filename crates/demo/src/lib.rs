// File: crates/demo/src/lib.rs
// Summary: Shared demo helpers: CSV point loading, axis ranges from data, directory mount and PNG export.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use heatmap_core::{AxisRange, Heatmap, MountHost, Point};
use heatmap_render_skia::SkiaSurface;

/// Load `x,y` points from a CSV file.
///
/// Columns are picked by header name (`x`/`lon`/`col`, `y`/`lat`/`row`) and
/// fall back to the first two columns. Rows that do not parse are skipped.
pub fn load_points_csv(path: &Path) -> Result<Vec<Point>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    log::debug!("headers: {:?}", headers);

    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.contains(&h.as_str()))
    };
    let i_x = idx(&["x", "lon", "lng", "longitude", "col"]).unwrap_or(0);
    let i_y = idx(&["y", "lat", "latitude", "row"]).unwrap_or(1);

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: usize| -> Option<f64> { rec.get(i).and_then(|s| s.parse::<f64>().ok()) };
        match (parse(i_x), parse(i_y)) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => out.push(Point::new(x, y)),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        log::warn!("skipped {skipped} rows without numeric x/y in {}", path.display());
    }
    Ok(out)
}

/// Integral `[floor(min), floor(max) + 1]` bounds of the data on each axis.
pub fn data_ranges(points: &[Point]) -> Option<(AxisRange, AxisRange)> {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for p in points {
        x_min = x_min.min(p.x); x_max = x_max.max(p.x);
        y_min = y_min.min(p.y); y_max = y_max.max(p.y);
    }
    if !x_min.is_finite() || !y_min.is_finite() {
        return None;
    }
    // The last tick is exclusive; widen so the maximum still lands in a cell.
    let x = AxisRange::new(x_min.floor(), x_max.floor() + 1.0);
    let y = AxisRange::new(y_min.floor(), y_max.floor() + 1.0);
    Some((x, y))
}

/// Parse `"min,max"`.
pub fn parse_range(s: &str) -> Result<AxisRange, String> {
    let (a, b) = s.split_once(',').ok_or_else(|| format!("expected MIN,MAX, got `{s}`"))?;
    let min = a.trim().parse::<f64>().map_err(|e| format!("bad min `{a}`: {e}"))?;
    let max = b.trim().parse::<f64>().map_err(|e| format!("bad max `{b}`: {e}"))?;
    Ok(AxisRange::new(min, max))
}

/// Mounts heatmaps onto existing output directories.
pub struct OutputDirs;

impl MountHost for OutputDirs {
    type Target = PathBuf;

    fn resolve(&mut self, target: &str) -> Option<PathBuf> {
        let dir = PathBuf::from(target);
        dir.is_dir().then_some(dir)
    }
}

/// Mount `heatmap` on the existing directory `out_dir` and write
/// `heatmap_<stem of input>.png` into it.
///
/// A missing directory fails with `HeatmapError::MountTarget`; nothing is
/// created on the caller's behalf.
pub fn export_png(heatmap: &mut Heatmap<SkiaSurface>, out_dir: &str, input: &Path) -> Result<PathBuf> {
    let dir = heatmap.mount(&mut OutputDirs, out_dir)?;
    let out = dir.join(out_name(input));
    heatmap.surface_mut().write_png(&out)?;
    Ok(out)
}

/// `heatmap_<stem>.png`
pub fn out_name(input: &Path) -> String {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("points");
    format!("heatmap_{stem}.png")
}
