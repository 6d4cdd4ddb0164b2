// crates/palgraph-core/src/edit/insert.rs

use kurbo::{ParamCurve, ParamCurveNearest};

use crate::curve::bezier::control_points_of;
use crate::edit::clamp_handle;
use crate::error::{PalError, Result};
use crate::model::palette::Palette;
use crate::model::params::GeometryParams;
use crate::model::point::{Channel, Handles, Point, PointId};
use crate::model::position::{round_half_up, Position};

const NEAREST_ACCURACY: f64 = 1e-3;

fn snap(p: kurbo::Point) -> Position {
    Position::new(round_half_up(p.x), round_half_up(p.y))
}

/// Insert an anchor on the segment after `after`, at the curve position
/// nearest to `cursor`.
///
/// The cubic is split there, so the new anchor's handles and the facing
/// handles of both neighbours come from the split and the curve keeps its
/// shape (up to integer rounding). Returns the new palette and the new id.
pub fn insert_point(
    palette: &Palette,
    channel: Channel,
    after: PointId,
    cursor: Position,
    params: &GeometryParams,
) -> Result<(Palette, PointId)> {
    let mut out = palette.clone();
    let graph = out.channel_mut(channel);
    let i = graph.index_of(after)?;
    if i + 1 >= graph.points.len() {
        return Err(PalError::NotFound(format!("no segment after point {after}")));
    }

    let (a, b) = (graph.points[i], graph.points[i + 1]);
    let cubic = control_points_of(&a, &b).to_kurbo();
    let t = cubic
        .nearest(kurbo::Point::new(cursor.x as f64, cursor.y as f64), NEAREST_ACCURACY)
        .t;

    let left = cubic.subsegment(0.0..t);
    let right = cubic.subsegment(t..1.0);
    let anchor = snap(left.p3);

    let lo = a.position.x + params.point_margin;
    let hi = b.position.x - params.point_margin;
    if anchor.x < lo || anchor.x > hi {
        return Err(PalError::Range(format!(
            "{channel}: x {} is within {} of an existing anchor",
            anchor.x, params.point_margin
        )));
    }

    let provisional = Handles::Pair(snap(left.p2), snap(right.p1));
    let handles = Handles::Pair(
        clamp_handle(anchor, &provisional, 0, false, provisional.incoming()),
        clamp_handle(anchor, &provisional, 1, false, provisional.outgoing()),
    );
    let point = Point::new(anchor, handles, channel);
    let new_id = point.id;

    // Neighbours' facing handles follow the split.
    set_handle(&mut graph.points[i], i == 0, outgoing_index(&a), snap(left.p1));
    set_handle(&mut graph.points[i + 1], false, 0, snap(right.p2));

    graph.points.insert(i + 1, point);
    if let Some(seg) = graph.segments.get(i).cloned() {
        graph.segments.insert(i, seg);
    }
    // only the two segments meeting at the new anchor changed
    graph.rederive_around(i + 1, params);

    log::debug!(
        "insert_point {channel} after {after}: t={t:.4} anchor=({}, {}) id={new_id}",
        anchor.x,
        anchor.y
    );
    Ok((out, new_id))
}

fn outgoing_index(p: &Point) -> usize {
    p.handles.len() - 1
}

fn set_handle(p: &mut Point, first: bool, index: usize, h: Position) {
    let anchor = p.position;
    let handles = p.handles;
    if let Some(slot) = p.handles.get_mut(index) {
        *slot = clamp_handle(anchor, &handles, index, first, h);
    }
}
