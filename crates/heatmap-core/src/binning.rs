// File: crates/heatmap-core/src/binning.rs
// Summary: Assign points to grid cells through a containment rule.

use crate::axis::Axis;
use crate::containment::Containment;
use crate::types::{Cell, CornerMode, Point};

/// Scan every cell for every point and emit one cell per hit.
///
/// Cost is `points * cells`; nothing is cached between calls. A point that hits
/// no cell contributes nothing, and a point may hit several cells under a
/// non-exclusive containment rule.
pub fn bin<C>(x_axis: &Axis, y_axis: &Axis, points: &[Point], containment: &C, corner: CornerMode) -> Vec<Cell>
where
    C: Containment + ?Sized,
{
    let (xs, ys) = (x_axis.ticks(), y_axis.ticks());
    let mut cells = Vec::new();
    for &point in points {
        for i in 0..xs.len() - 1 {
            for j in 0..ys.len() - 1 {
                let start = Point::new(xs[i], ys[j]);
                let end = Point::new(xs[i + 1], ys[j + 1]);
                if containment.contains(point, start, end) {
                    cells.push(match corner {
                        CornerMode::LeftTop => Cell::new(i, j),
                        CornerMode::RightBottom => Cell::new(i + 1, j + 1),
                    });
                }
            }
        }
    }
    cells
}
