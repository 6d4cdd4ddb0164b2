// crates/palgraph-core/src/curve/segment.rs

use crate::curve::bezier::{control_points_of, sample_curve};
use crate::curve::flatten::flatten;
use crate::model::palette::{ChannelGraph, Segment};
use crate::model::params::GeometryParams;
use crate::model::point::Point;

/// Sample, flatten and trim the curve between two adjacent anchors.
///
/// The stored curve spans `a.x..=b.x`. A degenerate pair (no samples, or an
/// unfilled slot inside the span) yields an empty curve.
pub fn derive_segment(a: &Point, b: &Point, params: &GeometryParams) -> Segment {
    let cp = control_points_of(a, b);
    let samples = sample_curve(&cp, params);
    let flat = flatten(&samples);

    let (x0, x1) = (a.position.x, b.position.x);
    let curve = if flat.is_empty() || x1 < x0 {
        Vec::new()
    } else {
        flat.span(x0, x1).unwrap_or_default()
    };

    log::trace!(
        "derive_segment {}..{} samples={} span={}..={} len={}",
        a.id,
        b.id,
        samples.len(),
        x0,
        x1,
        curve.len()
    );

    Segment { start: a.id, end: b.id, x_start: x0, curve }
}

pub fn derive_segments(points: &[Point], params: &GeometryParams) -> Vec<Segment> {
    points
        .windows(2)
        .map(|w| derive_segment(&w[0], &w[1], params))
        .collect()
}

impl ChannelGraph {
    pub fn from_points(points: Vec<Point>, params: &GeometryParams) -> Self {
        let segments = derive_segments(&points, params);
        Self { points, segments }
    }

    /// Recompute the one or two segments touching the point at `index`.
    pub fn rederive_around(&mut self, index: usize, params: &GeometryParams) {
        if self.segments.len() + 1 != self.points.len() {
            self.segments = derive_segments(&self.points, params);
            return;
        }
        if index > 0 {
            self.segments[index - 1] = derive_segment(&self.points[index - 1], &self.points[index], params);
        }
        if index + 1 < self.points.len() {
            self.segments[index] = derive_segment(&self.points[index], &self.points[index + 1], params);
        }
    }
}
