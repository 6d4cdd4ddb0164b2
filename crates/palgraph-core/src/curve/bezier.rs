// crates/palgraph-core/src/curve/bezier.rs

use crate::model::params::GeometryParams;
use crate::model::point::Point;
use crate::model::position::{round_half_up, Axis, Direction, Position, GRAPH_MAX_X, GRAPH_MAX_Y, GRAPH_MIN_X, GRAPH_MIN_Y};

/// Which of the four cubic control points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlPoint {
    /// Start anchor.
    P0,
    /// Start anchor's outgoing handle.
    P1,
    /// End anchor's incoming handle.
    P2,
    /// End anchor.
    P3,
}

impl ControlPoint {
    /// Handle that travels with an anchor, if this is one.
    pub fn attached_handle(self) -> Option<ControlPoint> {
        match self {
            ControlPoint::P0 => Some(ControlPoint::P1),
            ControlPoint::P3 => Some(ControlPoint::P2),
            ControlPoint::P1 | ControlPoint::P2 => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlPoints {
    pub p0: Position,
    pub p1: Position,
    pub p2: Position,
    pub p3: Position,
}

impl ControlPoints {
    pub fn get(&self, which: ControlPoint) -> Position {
        match which {
            ControlPoint::P0 => self.p0,
            ControlPoint::P1 => self.p1,
            ControlPoint::P2 => self.p2,
            ControlPoint::P3 => self.p3,
        }
    }

    pub fn with(self, which: ControlPoint, pos: Position) -> Self {
        match which {
            ControlPoint::P0 => Self { p0: pos, ..self },
            ControlPoint::P1 => Self { p1: pos, ..self },
            ControlPoint::P2 => Self { p2: pos, ..self },
            ControlPoint::P3 => Self { p3: pos, ..self },
        }
    }

    pub fn to_kurbo(&self) -> kurbo::CubicBez {
        let k = |p: Position| kurbo::Point::new(p.x as f64, p.y as f64);
        kurbo::CubicBez::new(k(self.p0), k(self.p1), k(self.p2), k(self.p3))
    }
}

/// p0/p3 are the anchors, p1 is `a`'s outgoing handle, p2 is `b`'s incoming one.
pub fn control_points_of(a: &Point, b: &Point) -> ControlPoints {
    ControlPoints {
        p0: a.position,
        p1: a.handles.outgoing(),
        p2: b.handles.incoming(),
        p3: b.position,
    }
}

/// Sampling steps: ceil(|p3.x - p1.x| / inaccuracy).
pub fn step_count(cp: &ControlPoints, params: &GeometryParams) -> u32 {
    let span = (cp.p3.x - cp.p1.x).unsigned_abs();
    span.div_ceil(params.inaccuracy.max(1))
}

/// Cubic Bernstein blend of one coordinate.
#[inline]
pub fn blend(t: f64, c0: i32, c1: i32, c2: i32, c3: i32) -> f64 {
    let mt = 1.0 - t;
    mt * mt * mt * c0 as f64
        + 3.0 * mt * mt * t * c1 as f64
        + 3.0 * mt * t * t * c2 as f64
        + t * t * t * c3 as f64
}

/// Integer samples along the curve, in parameter order.
///
/// Returns an empty vec when the step count is zero; callers treat that as
/// "no curve".
pub fn sample_curve(cp: &ControlPoints, params: &GeometryParams) -> Vec<Position> {
    let steps = step_count(cp, params);
    if steps == 0 {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(steps as usize + 1);
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let x = round_half_up(blend(t, cp.p0.x, cp.p1.x, cp.p2.x, cp.p3.x));
        let y = round_half_up(blend(t, cp.p0.y, cp.p1.y, cp.p2.y, cp.p3.y));
        out.push(Position::new(x, y));
    }
    out
}

/// Which box edges a sample set crosses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoundsCrossed {
    pub min_x: bool,
    pub max_x: bool,
    pub min_y: bool,
    pub max_y: bool,
}

impl BoundsCrossed {
    pub fn on(&self, axis: Axis, direction: Direction) -> bool {
        match (axis, direction) {
            (Axis::X, Direction::Min) => self.min_x,
            (Axis::X, Direction::Max) => self.max_x,
            (Axis::Y, Direction::Min) => self.min_y,
            (Axis::Y, Direction::Max) => self.max_y,
        }
    }

    pub fn any(&self) -> bool {
        self.min_x || self.max_x || self.min_y || self.max_y
    }
}

pub fn bounds_crossed(samples: &[Position]) -> BoundsCrossed {
    samples.iter().fold(BoundsCrossed::default(), |acc, p| BoundsCrossed {
        min_x: acc.min_x || p.x < GRAPH_MIN_X,
        max_x: acc.max_x || p.x > GRAPH_MAX_X,
        min_y: acc.min_y || p.y < GRAPH_MIN_Y,
        max_y: acc.max_y || p.y > GRAPH_MAX_Y,
    })
}

/// First sample where the curve turns back on x, if any.
pub fn first_fold_back(samples: &[Position]) -> Option<Position> {
    samples.windows(2).find(|w| w[1].x < w[0].x).map(|w| w[1])
}

/// Samples plus everything derived from them in one pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trace {
    pub samples: Vec<Position>,
    pub bounds: BoundsCrossed,
    pub fold_back: Option<Position>,
}

pub fn trace(cp: &ControlPoints, params: &GeometryParams) -> Trace {
    let samples = sample_curve(cp, params);
    let bounds = bounds_crossed(&samples);
    let fold_back = first_fold_back(&samples);
    Trace { samples, bounds, fold_back }
}
