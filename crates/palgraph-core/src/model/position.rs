// crates/palgraph-core/src/model/position.rs

/// Graph box shared by every channel, the codec and the solver.
pub const GRAPH_MIN_X: i32 = 0;
pub const GRAPH_MAX_X: i32 = 1024;
pub const GRAPH_MIN_Y: i32 = 0;
pub const GRAPH_MAX_Y: i32 = 1024;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn get(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Copy with one coordinate replaced.
    #[inline]
    pub fn with(self, axis: Axis, v: i32) -> Self {
        match axis {
            Axis::X => Self { x: v, ..self },
            Axis::Y => Self { y: v, ..self },
        }
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    pub fn in_box(self) -> bool {
        (GRAPH_MIN_X..=GRAPH_MAX_X).contains(&self.x) && (GRAPH_MIN_Y..=GRAPH_MAX_Y).contains(&self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// Which end of an axis a bound is searched toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Min,
    Max,
}

/// Round half toward +infinity (`-2.5 -> -2`, `2.5 -> 3`).
///
/// `f64::round` rounds half away from zero, which disagrees on negative
/// halves; persisted curves depend on the half-up rule.
#[inline]
pub fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}
