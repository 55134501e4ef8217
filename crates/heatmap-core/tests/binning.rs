// File: crates/heatmap-core/tests/binning.rs
// Purpose: Validate point-to-cell assignment under the default and custom containment rules.

use std::collections::BTreeSet;

use heatmap_core::containment::{from_fns, Closed, HalfOpen};
use heatmap_core::{bin, Axis, AxisRange, Cell, Containment, CornerMode, Point};

fn axes(step: f64) -> (Axis, Axis) {
    let range = AxisRange::new(0.0, 100.0);
    (Axis::build(range, step).unwrap(), Axis::build(range, step).unwrap())
}

#[test]
fn shared_edge_belongs_to_the_cell_it_starts() {
    let (x, y) = axes(50.0);
    let cells = bin(&x, &y, &[Point::new(50.0, 50.0)], &HalfOpen, CornerMode::LeftTop);
    assert_eq!(cells, vec![Cell::new(1, 1)]);
    assert!(!cells.contains(&Cell::new(0, 0)));
}

#[test]
fn upper_bound_of_the_grid_is_exclusive() {
    let (x, y) = axes(50.0);
    let cells = bin(&x, &y, &[Point::new(100.0, 100.0), Point::new(-1.0, 20.0)], &HalfOpen, CornerMode::LeftTop);
    assert!(cells.is_empty());
}

#[test]
fn binning_is_repeatable() {
    let (x, y) = axes(10.0);
    let points: Vec<Point> = (0..200)
        .map(|i| Point::new((i * 37 % 101) as f64, (i * 53 % 103) as f64))
        .collect();
    let first: BTreeSet<Cell> = bin(&x, &y, &points, &HalfOpen, CornerMode::LeftTop).into_iter().collect();
    let second: BTreeSet<Cell> = bin(&x, &y, &points, &HalfOpen, CornerMode::LeftTop).into_iter().collect();
    assert_eq!(first, second);
    assert!(first.iter().all(|c| c.col < x.cell_count() && c.row < y.cell_count()));
}

#[test]
fn right_bottom_mode_shifts_the_emitted_index() {
    let (x, y) = axes(50.0);
    let cells = bin(&x, &y, &[Point::new(10.0, 60.0)], &HalfOpen, CornerMode::RightBottom);
    assert_eq!(cells, vec![Cell::new(1, 2)]);
}

#[test]
fn closed_rule_hits_every_adjacent_cell() {
    let (x, y) = axes(50.0);
    let cells: BTreeSet<Cell> = bin(&x, &y, &[Point::new(50.0, 50.0)], &Closed, CornerMode::LeftTop)
        .into_iter()
        .collect();
    let want: BTreeSet<Cell> = [(0, 0), (0, 1), (1, 0), (1, 1)].into_iter().map(Cell::from).collect();
    assert_eq!(cells, want);
}

#[test]
fn closure_rules_are_consulted() {
    let (x, y) = axes(50.0);
    // Only the X dimension matters; every row matches.
    let rule = from_fns(|p: Point, s: Point| p.x >= s.x, |p: Point, e: Point| p.x < e.x);
    let cells = bin(&x, &y, &[Point::new(75.0, 9999.0)], &*rule, CornerMode::LeftTop);
    assert_eq!(cells, vec![Cell::new(1, 0), Cell::new(1, 1)]);
    assert_eq!(rule.id(), "custom");
}
