// crates/palgraph-core/src/solver/graph.rs
//
// Legal ranges for points and handles of a channel: every segment the
// control point takes part in contributes one rectangle, and the results are
// intersected.

use crate::curve::bezier::{control_points_of, ControlPoint, ControlPoints};
use crate::error::{PalError, Result};
use crate::model::palette::ChannelGraph;
use crate::model::params::GeometryParams;
use crate::model::point::PointId;
use crate::model::position::Position;
use crate::solver::bound::{legal_rectangle, Rectangle};

/// Control points of segment `index` (between points `index` and `index + 1`).
pub fn segment_control_points(graph: &ChannelGraph, index: usize) -> Result<ControlPoints> {
    match (graph.points.get(index), graph.points.get(index + 1)) {
        (Some(a), Some(b)) => Ok(control_points_of(a, b)),
        _ => Err(PalError::NotFound(format!("segment #{index}"))),
    }
}

/// Segments (by index) an anchor belongs to, with the role it plays in each.
fn anchor_roles(graph: &ChannelGraph, i: usize) -> Vec<(usize, ControlPoint)> {
    let mut roles = Vec::with_capacity(2);
    if i > 0 {
        roles.push((i - 1, ControlPoint::P3));
    }
    if i + 1 < graph.points.len() {
        roles.push((i, ControlPoint::P0));
    }
    roles
}

/// Segment and role of handle `handle` on the point at `i`.
fn handle_role(graph: &ChannelGraph, i: usize, handle: usize) -> Option<(usize, ControlPoint)> {
    let last = graph.points.len().checked_sub(1)?;
    match (i, handle) {
        (0, 0) if last > 0 => Some((0, ControlPoint::P1)),
        (i, 0) if i > 0 && i <= last => Some((i - 1, ControlPoint::P2)),
        (i, 1) if i > 0 && i < last => Some((i, ControlPoint::P1)),
        _ => None,
    }
}

fn combined(
    graph: &ChannelGraph,
    roles: &[(usize, ControlPoint)],
    previous: Position,
    requested: Position,
    params: &GeometryParams,
) -> Result<Rectangle> {
    let mut out: Option<Rectangle> = None;
    for &(seg, moved) in roles {
        let base = segment_control_points(graph, seg)?;
        let r = legal_rectangle(&base, moved, previous, requested, params);
        out = Some(match out {
            Some(acc) => acc.intersect(&r),
            None => r,
        });
    }
    out.ok_or_else(|| PalError::NotFound("control point takes part in no segment".into()))
}

/// Legal rectangle for dragging the anchor `id` from `previous` toward `requested`.
pub fn point_legal_rectangle(
    graph: &ChannelGraph,
    id: PointId,
    previous: Position,
    requested: Position,
    params: &GeometryParams,
) -> Result<Rectangle> {
    let i = graph.index_of(id)?;
    combined(graph, &anchor_roles(graph, i), previous, requested, params)
}

/// Legal rectangle for dragging handle `handle` of point `id`.
pub fn handle_legal_rectangle(
    graph: &ChannelGraph,
    id: PointId,
    handle: usize,
    previous: Position,
    requested: Position,
    params: &GeometryParams,
) -> Result<Rectangle> {
    let i = graph.index_of(id)?;
    let role = handle_role(graph, i, handle).ok_or_else(|| PalError::NotFound(format!("handle #{handle} of point {id}")))?;
    combined(graph, &[role], previous, requested, params)
}
