// crates/palgraph-cli/src/cmd/bounds.rs

use clap::Args;
use palgraph_core::curve::ControlPoint;
use palgraph_core::legal_rectangle;
use palgraph_core::solver::segment_control_points;
use palgraph_core::{Channel, Position};

use crate::cmd::args::{fmt_pos, parse_xy, ChannelArg, ControlArg, ParamArgs, PathInput};

#[derive(Args, Debug)]
pub struct BoundsArgs {
    #[command(flatten)]
    pub input: PathInput,

    #[command(flatten)]
    pub params: ParamArgs,

    #[arg(long, value_enum)]
    pub channel: ChannelArg,

    /// Segment index (between points #i and #i+1)
    #[arg(long)]
    pub segment: usize,

    /// Which control point of the segment is dragged
    #[arg(long, value_enum)]
    pub control: ControlArg,

    /// Requested position, x,y
    #[arg(long, value_parser = parse_xy, allow_hyphen_values = true)]
    pub to: Position,
}

pub fn run(args: BoundsArgs) -> anyhow::Result<()> {
    let params = args.params.params()?;
    let (_, palette) = args.input.load(&params)?;
    let channel = Channel::from(args.channel);
    let moved = ControlPoint::from(args.control);

    let base = segment_control_points(palette.channel(channel), args.segment)?;
    let previous = base.get(moved);
    let rect = legal_rectangle(&base, moved, previous, args.to, &params);
    let clamped = rect.clamp(args.to);

    println!("min={} max={} clamped={}", fmt_pos(rect.min), fmt_pos(rect.max), fmt_pos(clamped));
    eprintln!(
        "bounds ok: channel={channel} segment={} control={moved:?} from={} to={}",
        args.segment,
        fmt_pos(previous),
        fmt_pos(args.to)
    );
    Ok(())
}
