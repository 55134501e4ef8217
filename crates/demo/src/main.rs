// File: crates/demo/src/main.rs
// Summary: Demo loads x,y points from CSV, renders a coverage heatmap to PNG and prints the coverage.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use heatmap_core::{theme, Heatmap, HeatmapOptions, OptionsPatch};
use heatmap_demo::{data_ranges, export_png, load_points_csv, parse_range};
use heatmap_render_skia::SkiaSurface;

#[derive(Parser)]
#[command(name = "heatmap-demo")]
#[command(about = "Bin scatter points into a grid and render a coverage heatmap")]
#[command(version)]
struct Cli {
    /// CSV file with x,y columns
    points: PathBuf,

    /// JSON options file (camelCase keys, same shape as `HeatmapOptions`)
    #[arg(long)]
    options: Option<PathBuf>,

    /// X axis range as MIN,MAX (defaults to the data extent)
    #[arg(long, value_parser = parse_range)]
    x_range: Option<heatmap_core::AxisRange>,

    /// Y axis range as MIN,MAX (defaults to the data extent)
    #[arg(long, value_parser = parse_range)]
    y_range: Option<heatmap_core::AxisRange>,

    /// Grid step on both axes
    #[arg(long)]
    grad: Option<f64>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Theme preset: light, dark, high-contrast
    #[arg(long, default_value = "light")]
    theme: String,

    /// Existing directory to write into; it is not created
    #[arg(long, default_value = ".")]
    out_dir: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let points = load_points_csv(&cli.points)
        .with_context(|| format!("failed to load CSV '{}'", cli.points.display()))?;
    println!("Loaded {} points", points.len());
    if points.is_empty() {
        anyhow::bail!("no points loaded; check headers and delimiter");
    }

    let options = build_options(&cli, points)?;
    println!(
        "Grid: x [{}, {}] step {}, y [{}, {}] step {}",
        options.x_axis.min, options.x_axis.max, options.x_grad, options.y_axis.min, options.y_axis.max, options.y_grad
    );

    let surface = SkiaSurface::for_options(&options)?;
    let mut heatmap = Heatmap::initialize(options, surface)?;

    let out = export_png(&mut heatmap, &cli.out_dir, &cli.points)
        .with_context(|| format!("exporting into '{}'", cli.out_dir))?;

    if let Some(cov) = heatmap.coverage() {
        println!("Coverage: {} ({} of {} cells)", cov, cov.occupied, cov.total);
    }
    println!("Wrote {}", out.display());
    Ok(())
}

fn build_options(cli: &Cli, points: Vec<heatmap_core::Point>) -> Result<HeatmapOptions> {
    let base = match &cli.options {
        Some(path) => {
            let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<HeatmapOptions>(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => {
            let (x, y) = data_ranges(&points).context("points have no finite extent")?;
            // Ten cells per axis until told otherwise.
            let step = |span: f64| (span / 10.0).ceil().max(1.0);
            HeatmapOptions::new(x, y).with_grads(step(x.span()), step(y.span()))
        }
    };

    let patch = OptionsPatch {
        width: cli.width,
        height: cli.height,
        x_axis: cli.x_range,
        y_axis: cli.y_range,
        x_grad: cli.grad,
        y_grad: cli.grad,
        data: Some(points),
        theme: Some(theme::find(&cli.theme)),
        ..OptionsPatch::default()
    };
    Ok(base.merged(&patch))
}
