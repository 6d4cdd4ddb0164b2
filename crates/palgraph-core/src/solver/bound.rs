// crates/palgraph-core/src/solver/bound.rs

use crate::codec::path::FIELD_WIDTH;
use crate::codec::value::max_fixed;
use crate::curve::bezier::{bounds_crossed, sample_curve, ControlPoint, ControlPoints};
use crate::model::params::GeometryParams;
use crate::model::position::{Axis, Direction, Position, GRAPH_MAX_X, GRAPH_MAX_Y, GRAPH_MIN_X, GRAPH_MIN_Y};

/// Axis-aligned range a control point may be clamped into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rectangle {
    pub min: Position,
    pub max: Position,
}

impl Rectangle {
    pub fn clamp(&self, p: Position) -> Position {
        Position::new(clamp_lenient(p.x, self.min.x, self.max.x), clamp_lenient(p.y, self.min.y, self.max.y))
    }

    pub fn contains(&self, p: Position) -> bool {
        (self.min.x..=self.max.x).contains(&p.x) && (self.min.y..=self.max.y).contains(&p.y)
    }

    /// Overlap of two rectangles; may be inverted if they do not overlap.
    pub fn intersect(&self, other: &Rectangle) -> Rectangle {
        Rectangle {
            min: Position::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Position::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        }
    }
}

/// `i32::clamp` panics on an inverted range; an inverted range pins to `lo`.
fn clamp_lenient(v: i32, lo: i32, hi: i32) -> i32 {
    if hi < lo {
        lo
    } else {
        v.clamp(lo, hi)
    }
}

/// `base` with `moved` placed at `pos`. An anchor drags its attached handle
/// by the same delta.
pub fn trial_points(base: &ControlPoints, moved: ControlPoint, pos: Position) -> ControlPoints {
    let old = base.get(moved);
    let mut t = base.with(moved, pos);
    if let Some(h) = moved.attached_handle() {
        t = t.with(h, base.get(h).offset(pos.x - old.x, pos.y - old.y));
    }
    t
}

fn crosses(
    base: &ControlPoints,
    moved: ControlPoint,
    at: Position,
    axis: Axis,
    direction: Direction,
    params: &GeometryParams,
) -> bool {
    let samples = sample_curve(&trial_points(base, moved, at), params);
    bounds_crossed(&samples).on(axis, direction)
}

/// Pull a position into the box widened by one storable offset on every
/// side. Anything further out crosses the box anyway, and sampling cost grows
/// with the distance.
fn into_search_window(p: Position) -> Position {
    let pad = max_fixed(FIELD_WIDTH);
    Position::new(
        p.x.clamp(GRAPH_MIN_X - pad, GRAPH_MAX_X + pad),
        p.y.clamp(GRAPH_MIN_Y - pad, GRAPH_MAX_Y + pad),
    )
}

/// ceil(log2(n)) + 1 for an interval of `n` integers.
fn iteration_cap(n: u32) -> u32 {
    if n <= 1 {
        1
    } else {
        u32::BITS - (n - 1).leading_zeros() + 1
    }
}

/// Furthest legal value of `axis` toward `direction`, between `previous`
/// and `requested`.
///
/// `base` is the segment's control points; the moved point takes
/// `requested`'s other coordinate at every probe. `previous` must itself be
/// legal: when it is not the result is unspecified (but finite, no panic).
/// If `previous` already sits on the `direction` side of `requested`, the
/// bound is `previous`; if `requested` is legal it is `requested`. Both
/// positions are first pulled into a window of one storable offset around
/// the box, so the result always lies in that window.
pub fn find_bound(
    base: &ControlPoints,
    moved: ControlPoint,
    axis: Axis,
    direction: Direction,
    previous: Position,
    requested: Position,
    params: &GeometryParams,
) -> i32 {
    let previous = into_search_window(previous);
    let requested = into_search_window(requested);
    let prev = previous.get(axis);
    let req = requested.get(axis);

    match direction {
        Direction::Min if prev < req => return prev,
        Direction::Max if prev > req => return prev,
        _ => {}
    }

    let probe = |v: i32| crosses(base, moved, requested.with(axis, v), axis, direction, params);

    if !probe(req) {
        return req;
    }
    if probe(prev) {
        log::debug!("find_bound: previous {prev} on {axis:?} is not legal for {direction:?}");
    }

    let (mut low, mut high) = (prev.min(req), prev.max(req));
    let cap = iteration_cap(high.abs_diff(low) + 1);
    let mut iters = 0u32;

    while low <= high && iters < cap {
        let mid = low + (high - low) / 2;
        let out = probe(mid);
        match (direction, out) {
            (Direction::Max, true) => high = mid - 1,
            (Direction::Max, false) => low = mid + 1,
            (Direction::Min, true) => low = mid + 1,
            (Direction::Min, false) => high = mid - 1,
        }
        iters += 1;
    }

    let bound = match direction {
        Direction::Max => high,
        Direction::Min => low,
    };
    log::trace!("find_bound {moved:?} {axis:?} {direction:?}: {prev}..{req} -> {bound} ({iters} probes)");
    bound
}

/// All four bounds, each searched independently.
///
/// The result is not re-verified as a whole: a diagonal move clamped into
/// the rectangle is legal on each axis alone, not necessarily jointly.
pub fn legal_rectangle(
    base: &ControlPoints,
    moved: ControlPoint,
    previous: Position,
    requested: Position,
    params: &GeometryParams,
) -> Rectangle {
    let b = |axis, direction| find_bound(base, moved, axis, direction, previous, requested, params);
    Rectangle {
        min: Position::new(b(Axis::X, Direction::Min), b(Axis::Y, Direction::Min)),
        max: Position::new(b(Axis::X, Direction::Max), b(Axis::Y, Direction::Max)),
    }
}
