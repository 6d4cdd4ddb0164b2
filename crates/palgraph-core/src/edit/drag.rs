// crates/palgraph-core/src/edit/drag.rs

use crate::edit::clamp_handle;
use crate::edit::movement::{constrain_anchor, move_handle, move_point};
use crate::error::{PalError, Result};
use crate::model::palette::Palette;
use crate::model::params::GeometryParams;
use crate::model::point::{Channel, PointId};
use crate::model::position::Position;
use crate::solver::graph::{handle_legal_rectangle, point_legal_rectangle};

/// Interactive anchor drag: placement rules, then the legal rectangle of
/// every adjacent segment, then the move.
///
/// The anchor's current position is taken as the known-legal previous one.
pub fn drag_point(
    palette: &Palette,
    channel: Channel,
    id: PointId,
    requested: Position,
    params: &GeometryParams,
) -> Result<Palette> {
    let graph = palette.channel(channel);
    let i = graph.index_of(id)?;
    let previous = graph.points[i].position;
    let wanted = constrain_anchor(graph, i, requested, params);

    let rect = point_legal_rectangle(graph, id, previous, wanted, params)?;
    let target = rect.clamp(wanted);
    log::debug!(
        "drag_point {channel} {id}: ({}, {}) -> ({}, {}) within {:?}",
        requested.x,
        requested.y,
        target.x,
        target.y,
        rect
    );
    move_point(palette, channel, id, target, params)
}

/// Interactive handle drag, same flow as [`drag_point`].
pub fn drag_handle(
    palette: &Palette,
    channel: Channel,
    id: PointId,
    handle: usize,
    requested: Position,
    params: &GeometryParams,
) -> Result<Palette> {
    let graph = palette.channel(channel);
    let i = graph.index_of(id)?;
    let point = &graph.points[i];
    let previous = point
        .handles
        .get(handle)
        .ok_or_else(|| PalError::NotFound(format!("handle #{handle} of point {id}")))?;
    let wanted = clamp_handle(point.position, &point.handles, handle, i == 0, requested);

    let rect = handle_legal_rectangle(graph, id, handle, previous, wanted, params)?;
    let target = rect.clamp(wanted);
    log::debug!("drag_handle {channel} {id} #{handle}: -> ({}, {})", target.x, target.y);
    move_handle(palette, channel, id, handle, target, params)
}
