// File: crates/heatmap-core/src/containment.rs
// Summary: Pluggable point-in-cell rules used by the binner.

use std::fmt;
use std::sync::Arc;

use crate::types::Point;

/// Decides whether a point falls inside a cell, given the cell's corners.
///
/// Called once per point per cell with the cell's start corner and end corner.
pub trait Containment {
    fn id(&self) -> &'static str;
    fn is_after_start(&self, point: Point, start: Point) -> bool;
    fn is_before_end(&self, point: Point, end: Point) -> bool;

    fn contains(&self, point: Point, start: Point, end: Point) -> bool {
        self.is_after_start(point, start) && self.is_before_end(point, end)
    }
}

impl fmt::Debug for dyn Containment + Send + Sync {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Containment").field(&self.id()).finish()
    }
}

pub type SharedContainment = Arc<dyn Containment + Send + Sync>;

/// `start <= point < end` on both axes. A point on a shared edge belongs to the
/// cell it starts.
#[derive(Clone, Copy, Debug, Default)]
pub struct HalfOpen;

impl Containment for HalfOpen {
    fn id(&self) -> &'static str { "half_open" }

    fn is_after_start(&self, point: Point, start: Point) -> bool {
        point.x >= start.x && point.y >= start.y
    }

    fn is_before_end(&self, point: Point, end: Point) -> bool {
        point.x < end.x && point.y < end.y
    }
}

/// `start <= point <= end`; points on shared edges hit every adjacent cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct Closed;

impl Containment for Closed {
    fn id(&self) -> &'static str { "closed" }

    fn is_after_start(&self, point: Point, start: Point) -> bool {
        point.x >= start.x && point.y >= start.y
    }

    fn is_before_end(&self, point: Point, end: Point) -> bool {
        point.x <= end.x && point.y <= end.y
    }
}

/// Containment built from a pair of closures.
pub struct FnContainment<S, E> {
    start: S,
    end: E,
}

impl<S, E> Containment for FnContainment<S, E>
where
    S: Fn(Point, Point) -> bool,
    E: Fn(Point, Point) -> bool,
{
    fn id(&self) -> &'static str { "custom" }

    fn is_after_start(&self, point: Point, start: Point) -> bool {
        (self.start)(point, start)
    }

    fn is_before_end(&self, point: Point, end: Point) -> bool {
        (self.end)(point, end)
    }
}

/// Wrap a start/end predicate pair as a shareable containment rule.
pub fn from_fns<S, E>(start: S, end: E) -> SharedContainment
where
    S: Fn(Point, Point) -> bool + Send + Sync + 'static,
    E: Fn(Point, Point) -> bool + Send + Sync + 'static,
{
    Arc::new(FnContainment { start, end })
}

pub fn half_open() -> SharedContainment {
    Arc::new(HalfOpen)
}
