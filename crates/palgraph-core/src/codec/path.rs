// crates/palgraph-core/src/codec/path.rs

use crate::codec::grammar::{split_path, BOUNDARY_TOKEN_LEN, INTERIOR_TOKEN_LEN, SWATCH_TAG};
use crate::codec::value::{decode_sign, decode_value, encode_fixed, encode_sign};
use crate::error::{PalError, Result};
use crate::model::palette::{ChannelGraph, Graph, Palette, Swatch};
use crate::model::params::GeometryParams;
use crate::model::point::{Channel, Handles, Point};
use crate::model::position::{Position, GRAPH_MAX_X, GRAPH_MIN_X};
use crate::validate::check_sorted_x;

/// Width of every numeric field inside a path token.
pub const FIELD_WIDTH: usize = 2;

pub fn decode_palette(path: &str) -> Result<Palette> {
    decode_palette_with(path, &GeometryParams::default())
}

/// Validate, split, decode points and swatches, then derive every segment.
/// Anchors out of x order are a format error.
pub fn decode_palette_with(path: &str, params: &GeometryParams) -> Result<Palette> {
    let parts = split_path(path)?;

    let mut graph = Graph::default();
    for c in Channel::ALL {
        let tokens = &parts.channels[c.index()];
        let points = tokens
            .iter()
            .enumerate()
            .map(|(i, t)| decode_point(t, c, i, tokens.len()))
            .collect::<Result<Vec<_>>>()?;
        check_sorted_x(c, &points)?;
        *graph.channel_mut(c) = ChannelGraph::from_points(points, params);
    }

    let swatches = parts
        .swatches
        .iter()
        .map(|t| decode_swatch(t))
        .collect::<Result<Vec<_>>>()?;

    log::debug!(
        "decode_palette ok: points h={} s={} l={} swatches={}",
        graph.hue.points.len(),
        graph.saturation.points.len(),
        graph.light.points.len(),
        swatches.len()
    );

    Ok(Palette { graph, swatches })
}

pub fn encode_palette(palette: &Palette) -> Result<String> {
    let mut out = String::with_capacity(128);
    for c in Channel::ALL {
        let points = &palette.channel(c).points;
        if !out.is_empty() {
            out.push('-');
        }
        out.push(c.tag());
        for (i, p) in points.iter().enumerate() {
            out.push('-');
            out.push_str(&encode_point(p, i, points.len())?);
        }
    }

    out.push('-');
    out.push_str(SWATCH_TAG);
    for s in &palette.swatches {
        out.push('-');
        out.push_str(&encode_swatch(s)?);
    }
    Ok(out)
}

/// Decode one point token. `index`/`count` give its place in the channel;
/// boundary tokens take their fixed x from it.
pub fn decode_point(token: &str, channel: Channel, index: usize, count: usize) -> Result<Point> {
    if !token.is_ascii() {
        return Err(PalError::Format(format!("non-ascii point token {token:?}")));
    }
    let num = |j: usize| -> Result<i32> {
        token
            .get(j..j + FIELD_WIDTH)
            .ok_or_else(|| PalError::Format(format!("short point token {token:?}")))
            .and_then(decode_value)
    };
    let sign = |j: usize| -> Result<i32> {
        let ch = token
            .as_bytes()
            .get(j)
            .copied()
            .ok_or_else(|| PalError::Format(format!("short point token {token:?}")))?;
        decode_sign(ch as char)
    };

    let is_boundary = index == 0 || index + 1 == count;
    match (token.len(), is_boundary) {
        (BOUNDARY_TOKEN_LEN, true) => {
            let first = index == 0;
            let x = if first { GRAPH_MIN_X } else { GRAPH_MAX_X };
            let y = num(0)?;
            let dx = num(2)?;
            let dy = sign(4)? * num(5)?;
            let hx = if first { x + dx } else { x - dx };
            Ok(Point::new(Position::new(x, y), Handles::Single(Position::new(hx, y + dy)), channel))
        }
        (INTERIOR_TOKEN_LEN, false) => {
            let x = num(0)?;
            let y = num(2)?;
            let incoming = Position::new(x - num(4)?, y + sign(6)? * num(7)?);
            let outgoing = Position::new(x + num(9)?, y + sign(11)? * num(12)?);
            Ok(Point::new(Position::new(x, y), Handles::Pair(incoming, outgoing), channel))
        }
        (len, _) => Err(PalError::Format(format!(
            "{channel} point #{index} of {count}: token {token:?} has wrong length {len}"
        ))),
    }
}

/// Encode one point given its place in the channel.
///
/// Handles are stored as offsets whose x side is implied by the token shape,
/// so a handle on the wrong side of its anchor is a range error.
pub fn encode_point(point: &Point, index: usize, count: usize) -> Result<String> {
    let is_first = index == 0;
    let is_boundary = is_first || index + 1 == count;
    let pos = point.position;
    let mut s = String::with_capacity(INTERIOR_TOKEN_LEN);

    match (point.handles, is_boundary) {
        (Handles::Single(h), true) => {
            let dx = if is_first { h.x - pos.x } else { pos.x - h.x };
            s.push_str(&encode_fixed(pos.y, FIELD_WIDTH)?);
            s.push_str(&encode_side(dx, point)?);
            push_dy(&mut s, h.y - pos.y)?;
        }
        (Handles::Pair(incoming, outgoing), false) => {
            s.push_str(&encode_fixed(pos.x, FIELD_WIDTH)?);
            s.push_str(&encode_fixed(pos.y, FIELD_WIDTH)?);
            s.push_str(&encode_side(pos.x - incoming.x, point)?);
            push_dy(&mut s, incoming.y - pos.y)?;
            s.push_str(&encode_side(outgoing.x - pos.x, point)?);
            push_dy(&mut s, outgoing.y - pos.y)?;
        }
        (h, _) => {
            return Err(PalError::Range(format!(
                "{} point #{index} of {count} has {} handle(s)",
                point.channel,
                h.len()
            )));
        }
    }
    Ok(s)
}

pub fn decode_swatch(token: &str) -> Result<Swatch> {
    Ok(Swatch { pointer: decode_value(token)? })
}

pub fn encode_swatch(swatch: &Swatch) -> Result<String> {
    encode_fixed(swatch.pointer, FIELD_WIDTH)
}

fn encode_side(dx: i32, point: &Point) -> Result<String> {
    if dx < 0 {
        return Err(PalError::Range(format!(
            "{} point {}: handle is on the wrong side of its anchor",
            point.channel, point.id
        )));
    }
    encode_fixed(dx, FIELD_WIDTH)
}

fn push_dy(s: &mut String, dy: i32) -> Result<()> {
    s.push(encode_sign(dy));
    s.push_str(&encode_fixed(dy.abs(), FIELD_WIDTH)?);
    Ok(())
}
