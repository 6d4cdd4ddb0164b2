// crates/palgraph-core/src/model/palette.rs

use crate::error::{PalError, Result};
use crate::model::point::{Channel, Point, PointId};

/// Derived curve between two adjacent anchors.
///
/// `curve[i]` is the y value at `x_start + i`; the span covers both anchors'
/// x inclusively. An empty curve means the segment is degenerate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub start: PointId,
    pub end: PointId,
    pub x_start: i32,
    pub curve: Vec<i32>,
}

impl Segment {
    pub fn value_at(&self, x: i32) -> Option<i32> {
        let i = usize::try_from(x - self.x_start).ok()?;
        self.curve.get(i).copied()
    }

    /// Last x covered, if any.
    pub fn x_end(&self) -> Option<i32> {
        if self.curve.is_empty() {
            None
        } else {
            Some(self.x_start + self.curve.len() as i32 - 1)
        }
    }
}

/// Pointer onto the composed gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Swatch {
    pub pointer: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChannelGraph {
    pub points: Vec<Point>,
    pub segments: Vec<Segment>,
}

impl ChannelGraph {
    pub fn index_of(&self, id: PointId) -> Result<usize> {
        self.points
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| PalError::NotFound(format!("point {id}")))
    }

    pub fn point(&self, id: PointId) -> Result<&Point> {
        let i = self.index_of(id)?;
        Ok(&self.points[i])
    }

    /// Composed y-per-x lookup for the whole channel.
    ///
    /// Adjacent segments share their boundary x; the later segment wins it.
    /// An empty (degenerate) segment shares nothing with its neighbours.
    pub fn flatten(&self) -> Vec<i32> {
        let mut out: Vec<i32> = Vec::new();
        let mut prev_filled = false;
        for s in &self.segments {
            if prev_filled && !s.curve.is_empty() {
                out.pop();
            }
            out.extend_from_slice(&s.curve);
            prev_filled = !s.curve.is_empty();
        }
        out
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    pub hue: ChannelGraph,
    pub saturation: ChannelGraph,
    pub light: ChannelGraph,
}

impl Graph {
    pub fn channel(&self, c: Channel) -> &ChannelGraph {
        match c {
            Channel::Hue => &self.hue,
            Channel::Saturation => &self.saturation,
            Channel::Light => &self.light,
        }
    }

    pub fn channel_mut(&mut self, c: Channel) -> &mut ChannelGraph {
        match c {
            Channel::Hue => &mut self.hue,
            Channel::Saturation => &mut self.saturation,
            Channel::Light => &mut self.light,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    pub graph: Graph,
    pub swatches: Vec<Swatch>,
}

impl Palette {
    pub fn channel(&self, c: Channel) -> &ChannelGraph {
        self.graph.channel(c)
    }

    pub fn channel_mut(&mut self, c: Channel) -> &mut ChannelGraph {
        self.graph.channel_mut(c)
    }

    /// Point geometry equality across all channels, identities ignored.
    pub fn same_shape(&self, other: &Palette) -> bool {
        Channel::ALL.iter().all(|&c| {
            let a = &self.channel(c).points;
            let b = &other.channel(c).points;
            a.len() == b.len() && a.iter().zip(b).all(|(p, q)| p.same_shape(q))
        }) && self.swatches == other.swatches
    }
}
