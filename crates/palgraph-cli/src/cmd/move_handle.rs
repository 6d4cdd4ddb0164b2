// crates/palgraph-cli/src/cmd/move_handle.rs

use anyhow::Context;
use clap::Args;
use palgraph_core::edit::{drag_handle, move_handle};
use palgraph_core::{encode_palette, Channel, Position};

use crate::cmd::args::{fmt_pos, parse_xy, point_id, ChannelArg, ParamArgs, PathInput};
use crate::io::path_file;

#[derive(Args, Debug)]
pub struct MoveHandleArgs {
    #[command(flatten)]
    pub input: PathInput,

    #[command(flatten)]
    pub params: ParamArgs,

    #[arg(long, value_enum)]
    pub channel: ChannelArg,

    /// Point index within the channel
    #[arg(long)]
    pub point: usize,

    /// Handle index: 0 is the only handle of a boundary point, or the
    /// incoming one of an interior point; 1 is the outgoing one
    #[arg(long, default_value_t = 0)]
    pub handle: usize,

    /// Requested absolute handle position, x,y
    #[arg(long, value_parser = parse_xy, allow_hyphen_values = true)]
    pub to: Position,

    /// Clamp into the legal rectangle of the affected segment first
    #[arg(long)]
    pub drag: bool,

    #[arg(long)]
    pub out: Option<String>,
}

pub fn run(args: MoveHandleArgs) -> anyhow::Result<()> {
    let params = args.params.params()?;
    let (_, palette) = args.input.load(&params)?;
    let channel = Channel::from(args.channel);
    let id = point_id(palette.channel(channel), channel, args.point)?;

    let next = if args.drag {
        drag_handle(&palette, channel, id, args.handle, args.to, &params)?
    } else {
        move_handle(&palette, channel, id, args.handle, args.to, &params)?
    };

    let path = encode_palette(&next)?;
    path_file::emit_path(args.out.as_deref(), &path)?;

    let placed = next
        .channel(channel)
        .point(id)?
        .handles
        .get(args.handle)
        .context("handle vanished after move")?;
    eprintln!(
        "move-handle ok: channel={channel} point={} handle={} at={}",
        args.point,
        args.handle,
        fmt_pos(placed)
    );
    Ok(())
}
