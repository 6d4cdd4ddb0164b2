pub mod error;
pub mod validate;

pub mod model;
pub mod codec;
pub mod curve;
pub mod solver;
pub mod edit;

pub use crate::codec::{decode_palette, encode_palette};
pub use crate::curve::derive_segment;
pub use crate::error::{PalError, Result};
pub use crate::model::palette::{ChannelGraph, Palette, Segment, Swatch};
pub use crate::model::params::GeometryParams;
pub use crate::model::point::{Channel, Handles, Point, PointId};
pub use crate::model::position::{Axis, Direction, Position};
pub use crate::solver::{legal_rectangle, Rectangle};
