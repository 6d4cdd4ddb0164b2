// crates/palgraph-core/src/curve/mod.rs

pub mod bezier;
pub mod flatten;
pub mod segment;

pub use bezier::{bounds_crossed, control_points_of, sample_curve, BoundsCrossed, ControlPoint, ControlPoints};
pub use flatten::{flatten, FlatCurve};
pub use segment::{derive_segment, derive_segments};
