// crates/palgraph-core/src/solver/mod.rs

pub mod bound;
pub mod graph;

pub use bound::{find_bound, legal_rectangle, Rectangle};
pub use graph::{handle_legal_rectangle, point_legal_rectangle, segment_control_points};
