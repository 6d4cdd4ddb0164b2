// crates/palgraph-cli/src/cmd/args.rs
//
// Arguments shared by several subcommands.

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use palgraph_core::codec::decode_palette_with;
use palgraph_core::curve::ControlPoint;
use palgraph_core::validate::validate_params;
use palgraph_core::{Channel, ChannelGraph, GeometryParams, Palette, PointId, Position};

use crate::io::path_file;

/// Where the palette path comes from.
#[derive(Args, Debug)]
pub struct PathInput {
    /// Palette path string (h-...-s-...-l-...-p[-...])
    #[arg(long)]
    pub path: Option<String>,

    /// Text file holding the palette path
    #[arg(long)]
    pub r#in: Option<String>,
}

impl PathInput {
    pub fn resolve(&self) -> Result<String> {
        match (&self.path, &self.r#in) {
            (Some(p), None) => Ok(p.trim().to_owned()),
            (None, Some(f)) => path_file::read_path_file(f),
            (Some(_), Some(_)) => bail!("give either --path or --in, not both"),
            (None, None) => bail!("missing --path or --in"),
        }
    }

    pub fn load(&self, params: &GeometryParams) -> Result<(String, Palette)> {
        let path = self.resolve()?;
        let palette = decode_palette_with(&path, params).with_context(|| format!("decode palette path {path:?}"))?;
        Ok((path, palette))
    }
}

#[derive(Args, Debug, Clone, Copy)]
pub struct ParamArgs {
    /// Sampling step along x, in graph units
    #[arg(long, default_value_t = 3)]
    pub inaccuracy: u32,

    /// Minimum x distance kept between neighbouring anchors
    #[arg(long, default_value_t = 8)]
    pub point_margin: i32,
}

impl ParamArgs {
    pub fn params(&self) -> Result<GeometryParams> {
        let p = GeometryParams { inaccuracy: self.inaccuracy, point_margin: self.point_margin };
        validate_params(&p).context("geometry params")?;
        Ok(p)
    }
}

#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum ChannelArg {
    #[value(name = "h", alias = "hue")]
    Hue,
    #[value(name = "s", alias = "saturation")]
    Saturation,
    #[value(name = "l", alias = "light")]
    Light,
}

impl From<ChannelArg> for Channel {
    fn from(c: ChannelArg) -> Self {
        match c {
            ChannelArg::Hue => Channel::Hue,
            ChannelArg::Saturation => Channel::Saturation,
            ChannelArg::Light => Channel::Light,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum ControlArg {
    P0,
    P1,
    P2,
    P3,
}

impl From<ControlArg> for ControlPoint {
    fn from(c: ControlArg) -> Self {
        match c {
            ControlArg::P0 => ControlPoint::P0,
            ControlArg::P1 => ControlPoint::P1,
            ControlArg::P2 => ControlPoint::P2,
            ControlArg::P3 => ControlPoint::P3,
        }
    }
}

/// `x,y` in graph units; either coordinate may be negative.
pub fn parse_xy(s: &str) -> std::result::Result<Position, String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected x,y but got {s:?}"))?;
    let x = x.trim().parse::<i32>().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y = y.trim().parse::<i32>().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok(Position::new(x, y))
}

/// Points are addressed by index on the command line; ids only live for
/// one decode.
pub fn point_id(graph: &ChannelGraph, channel: Channel, index: usize) -> Result<PointId> {
    match graph.points.get(index) {
        Some(p) => Ok(p.id),
        None => bail!("{channel} has {} points, no point #{index}", graph.points.len()),
    }
}

pub fn fmt_pos(p: Position) -> String {
    format!("({}, {})", p.x, p.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_xy_accepts_negative_and_spaces() {
        assert_eq!(parse_xy("512,-500").unwrap(), Position::new(512, -500));
        assert_eq!(parse_xy(" -5 , 300").unwrap(), Position::new(-5, 300));
        assert!(parse_xy("512").is_err());
        assert!(parse_xy("a,b").is_err());
    }
}
