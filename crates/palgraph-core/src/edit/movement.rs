// crates/palgraph-core/src/edit/movement.rs

use crate::edit::{clamp_handle, max_stored};
use crate::error::{PalError, Result};
use crate::model::palette::{ChannelGraph, Palette};
use crate::model::params::GeometryParams;
use crate::model::point::{Channel, PointId};
use crate::model::position::{Position, GRAPH_MAX_X, GRAPH_MIN_X, GRAPH_MIN_Y};

/// Move anchor `id` to `requested`, handles carried rigidly.
///
/// Boundary anchors keep their fixed x. Interior anchors stay at least
/// `point_margin` away from both neighbours. y is kept storable.
pub fn move_point(
    palette: &Palette,
    channel: Channel,
    id: PointId,
    requested: Position,
    params: &GeometryParams,
) -> Result<Palette> {
    let mut out = palette.clone();
    let graph = out.channel_mut(channel);
    let i = graph.index_of(id)?;
    let Position { x, y } = constrain_anchor(graph, i, requested, params);

    let moved = graph.points[i].moved_to(Position::new(x, y));
    graph.points[i] = moved;
    graph.rederive_around(i, params);

    log::debug!("move_point {channel} {id} -> ({x}, {y})");
    Ok(out)
}

/// Apply the anchor placement rules to a requested position.
pub(crate) fn constrain_anchor(graph: &ChannelGraph, i: usize, requested: Position, params: &GeometryParams) -> Position {
    let last = graph.points.len().saturating_sub(1);
    let x = if i == 0 {
        GRAPH_MIN_X
    } else if i == last {
        GRAPH_MAX_X
    } else {
        let lo = graph.points[i - 1].position.x + params.point_margin;
        let hi = graph.points[i + 1].position.x - params.point_margin;
        if hi < lo {
            graph.points[i].position.x
        } else {
            requested.x.clamp(lo, hi)
        }
    };
    let y = requested.y.clamp(GRAPH_MIN_Y, max_stored());
    Position::new(x, y)
}

/// Place handle `handle` of point `id` at `position` (absolute).
///
/// The handle is kept on its side of the anchor so the path token can
/// represent it.
pub fn move_handle(
    palette: &Palette,
    channel: Channel,
    id: PointId,
    handle: usize,
    position: Position,
    params: &GeometryParams,
) -> Result<Palette> {
    let mut out = palette.clone();
    let graph = out.channel_mut(channel);
    let i = graph.index_of(id)?;

    let point = &mut graph.points[i];
    let anchor = point.position;
    let handles = point.handles;
    let slot = point
        .handles
        .get_mut(handle)
        .ok_or_else(|| PalError::NotFound(format!("handle #{handle} of point {id}")))?;
    *slot = clamp_handle(anchor, &handles, handle, i == 0, position);
    let placed = *slot;

    graph.rederive_around(i, params);

    log::debug!("move_handle {channel} {id} #{handle} -> ({}, {})", placed.x, placed.y);
    Ok(out)
}
