// crates/palgraph-core/src/edit/mod.rs
//
// Palette edits. Each takes a snapshot and returns a new palette with the
// touched segments re-derived; the caller decides whether to keep it.

pub mod drag;
pub mod insert;
pub mod movement;

pub use drag::{drag_handle, drag_point};
pub use insert::insert_point;
pub use movement::{move_handle, move_point};

use crate::codec::value::max_fixed;
use crate::codec::path::FIELD_WIDTH;
use crate::model::point::Handles;
use crate::model::position::Position;

/// Largest coordinate or handle offset a path token can store.
pub fn max_stored() -> i32 {
    max_fixed(FIELD_WIDTH)
}

/// Keep handle `index` on its side of `anchor` and within storable offsets.
///
/// `first`/`last` say whether the anchor opens or closes its channel; a
/// single handle points right on the first anchor and left on the last.
pub(crate) fn clamp_handle(anchor: Position, handles: &Handles, index: usize, first: bool, h: Position) -> Position {
    let lim = max_stored();
    let points_right = match handles {
        Handles::Single(_) => first,
        Handles::Pair(..) => index == 1,
    };
    let x = if points_right {
        h.x.clamp(anchor.x, anchor.x + lim)
    } else {
        h.x.clamp(anchor.x - lim, anchor.x)
    };
    let y = h.y.clamp(anchor.y - lim, anchor.y + lim);
    Position::new(x, y)
}
