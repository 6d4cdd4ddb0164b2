// crates/palgraph-cli/src/cmd/move_point.rs

use clap::Args;
use palgraph_core::edit::{drag_point, move_point};
use palgraph_core::{encode_palette, Channel, Position};

use crate::cmd::args::{fmt_pos, parse_xy, point_id, ChannelArg, ParamArgs, PathInput};
use crate::io::path_file;

#[derive(Args, Debug)]
pub struct MovePointArgs {
    #[command(flatten)]
    pub input: PathInput,

    #[command(flatten)]
    pub params: ParamArgs,

    #[arg(long, value_enum)]
    pub channel: ChannelArg,

    /// Point index within the channel
    #[arg(long)]
    pub point: usize,

    /// Requested anchor position, x,y
    #[arg(long, value_parser = parse_xy, allow_hyphen_values = true)]
    pub to: Position,

    /// Clamp into the legal rectangle of the adjacent segments first
    #[arg(long)]
    pub drag: bool,

    /// Write the new path here instead of stdout
    #[arg(long)]
    pub out: Option<String>,
}

pub fn run(args: MovePointArgs) -> anyhow::Result<()> {
    let params = args.params.params()?;
    let (_, palette) = args.input.load(&params)?;
    let channel = Channel::from(args.channel);
    let id = point_id(palette.channel(channel), channel, args.point)?;

    let next = if args.drag {
        drag_point(&palette, channel, id, args.to, &params)?
    } else {
        move_point(&palette, channel, id, args.to, &params)?
    };

    let path = encode_palette(&next)?;
    path_file::emit_path(args.out.as_deref(), &path)?;

    let at = next.channel(channel).point(id)?.position;
    eprintln!(
        "move-point ok: channel={channel} point={} requested={} at={} drag={}",
        args.point,
        fmt_pos(args.to),
        fmt_pos(at),
        args.drag
    );
    Ok(())
}
