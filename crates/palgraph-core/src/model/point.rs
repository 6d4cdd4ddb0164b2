// crates/palgraph-core/src/model/point.rs

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::model::position::Position;

static NEXT_POINT_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque point identity. Fresh ids are never reused within a process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(u64);

impl PointId {
    pub fn fresh() -> Self {
        PointId(NEXT_POINT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pt#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    Hue,
    Saturation,
    Light,
}

impl Channel {
    /// Path order.
    pub const ALL: [Channel; 3] = [Channel::Hue, Channel::Saturation, Channel::Light];

    pub fn tag(self) -> char {
        match self {
            Channel::Hue => 'h',
            Channel::Saturation => 's',
            Channel::Light => 'l',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Channel::Hue => "hue",
            Channel::Saturation => "saturation",
            Channel::Light => "light",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Channel::Hue => 0,
            Channel::Saturation => 1,
            Channel::Light => 2,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Absolute control-point positions owned by a point.
///
/// Boundary anchors carry one handle, interior anchors two:
/// `Pair(incoming, outgoing)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handles {
    Single(Position),
    Pair(Position, Position),
}

impl Handles {
    pub fn len(&self) -> usize {
        match self {
            Handles::Single(_) => 1,
            Handles::Pair(..) => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Control point used by the segment ending at this anchor.
    pub fn incoming(&self) -> Position {
        match *self {
            Handles::Single(h) => h,
            Handles::Pair(h, _) => h,
        }
    }

    /// Control point used by the segment starting at this anchor.
    pub fn outgoing(&self) -> Position {
        match *self {
            Handles::Single(h) => h,
            Handles::Pair(_, h) => h,
        }
    }

    pub fn get(&self, index: usize) -> Option<Position> {
        match (*self, index) {
            (Handles::Single(h), 0) => Some(h),
            (Handles::Pair(h, _), 0) => Some(h),
            (Handles::Pair(_, h), 1) => Some(h),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Position> {
        match (self, index) {
            (Handles::Single(h), 0) => Some(h),
            (Handles::Pair(h, _), 0) => Some(h),
            (Handles::Pair(_, h), 1) => Some(h),
            _ => None,
        }
    }

    /// Translate every handle by the same delta.
    pub fn shifted(self, dx: i32, dy: i32) -> Self {
        match self {
            Handles::Single(h) => Handles::Single(h.offset(dx, dy)),
            Handles::Pair(a, b) => Handles::Pair(a.offset(dx, dy), b.offset(dx, dy)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub id: PointId,
    pub position: Position,
    pub handles: Handles,
    pub channel: Channel,
}

impl Point {
    pub fn new(position: Position, handles: Handles, channel: Channel) -> Self {
        Self { id: PointId::fresh(), position, handles, channel }
    }

    /// Same point moved to `position`, handles carried rigidly.
    pub fn moved_to(&self, position: Position) -> Self {
        let dx = position.x - self.position.x;
        let dy = position.y - self.position.y;
        Self { position, handles: self.handles.shifted(dx, dy), ..*self }
    }

    /// Equal geometry, ignoring identity.
    pub fn same_shape(&self, other: &Point) -> bool {
        self.position == other.position && self.handles == other.handles && self.channel == other.channel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_are_distinct() {
        let a = PointId::fresh();
        let b = PointId::fresh();
        assert_ne!(a, b);
    }

    #[test]
    fn moved_to_carries_handles() {
        let p = Point::new(
            Position::new(100, 100),
            Handles::Pair(Position::new(90, 80), Position::new(120, 130)),
            Channel::Light,
        );
        let q = p.moved_to(Position::new(110, 90));
        assert_eq!(q.id, p.id);
        assert_eq!(q.handles, Handles::Pair(Position::new(100, 70), Position::new(130, 120)));
    }

    #[test]
    fn single_handle_is_both_incoming_and_outgoing() {
        let h = Handles::Single(Position::new(10, 456));
        assert_eq!(h.incoming(), h.outgoing());
        assert_eq!(h.get(1), None);
    }
}
