// crates/palgraph-cli/src/cmd/insert_point.rs

use clap::Args;
use palgraph_core::edit::insert_point;
use palgraph_core::{encode_palette, Channel, Position};

use crate::cmd::args::{fmt_pos, parse_xy, point_id, ChannelArg, ParamArgs, PathInput};
use crate::io::path_file;

#[derive(Args, Debug)]
pub struct InsertPointArgs {
    #[command(flatten)]
    pub input: PathInput,

    #[command(flatten)]
    pub params: ParamArgs,

    #[arg(long, value_enum)]
    pub channel: ChannelArg,

    /// Index of the point opening the segment to split
    #[arg(long)]
    pub after: usize,

    /// Cursor position, x,y; the new anchor lands on the nearest curve point
    #[arg(long, value_parser = parse_xy, allow_hyphen_values = true)]
    pub at: Position,

    #[arg(long)]
    pub out: Option<String>,
}

pub fn run(args: InsertPointArgs) -> anyhow::Result<()> {
    let params = args.params.params()?;
    let (_, palette) = args.input.load(&params)?;
    let channel = Channel::from(args.channel);
    let after = point_id(palette.channel(channel), channel, args.after)?;

    let (next, id) = insert_point(&palette, channel, after, args.at, &params)?;

    let path = encode_palette(&next)?;
    path_file::emit_path(args.out.as_deref(), &path)?;

    let g = next.channel(channel);
    let index = g.index_of(id)?;
    eprintln!(
        "insert-point ok: channel={channel} index={index} at={} points={}",
        fmt_pos(g.points[index].position),
        g.points.len()
    );
    Ok(())
}
