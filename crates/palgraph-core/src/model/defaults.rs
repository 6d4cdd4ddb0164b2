// crates/palgraph-core/src/model/defaults.rs

use crate::model::palette::{ChannelGraph, Graph, Palette, Swatch};
use crate::model::params::GeometryParams;
use crate::model::point::{Channel, Handles, Point};
use crate::model::position::{Position, GRAPH_MAX_X, GRAPH_MIN_X};

const START_Y: i32 = 256;

/// Flat channel at y=256 with a gentle bump: handle offsets (10, 200) on
/// the first anchor and (-20, 200) on the last.
fn default_channel(channel: Channel, params: &GeometryParams) -> ChannelGraph {
    let first = Point::new(
        Position::new(GRAPH_MIN_X, START_Y),
        Handles::Single(Position::new(GRAPH_MIN_X + 10, START_Y + 200)),
        channel,
    );
    let last = Point::new(
        Position::new(GRAPH_MAX_X, START_Y),
        Handles::Single(Position::new(GRAPH_MAX_X - 20, START_Y + 200)),
        channel,
    );
    ChannelGraph::from_points(vec![first, last], params)
}

/// Palette a new editor session starts from.
pub fn default_palette(params: &GeometryParams) -> Palette {
    Palette {
        graph: Graph {
            hue: default_channel(Channel::Hue, params),
            saturation: default_channel(Channel::Saturation, params),
            light: default_channel(Channel::Light, params),
        },
        swatches: vec![Swatch { pointer: 10 }],
    }
}
