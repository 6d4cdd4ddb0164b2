// crates/palgraph-cli/src/cmd/sample.rs

use anyhow::bail;
use clap::Args;
use palgraph_core::Channel;

use crate::cmd::args::{ChannelArg, ParamArgs, PathInput};
use crate::io::curve_csv;

#[derive(Args, Debug)]
pub struct SampleArgs {
    #[command(flatten)]
    pub input: PathInput,

    #[command(flatten)]
    pub params: ParamArgs,

    #[arg(long, value_enum)]
    pub channel: ChannelArg,

    /// Only this segment; the whole channel otherwise
    #[arg(long)]
    pub segment: Option<usize>,

    /// Keep every n-th row
    #[arg(long, default_value_t = 1)]
    pub every: usize,

    /// Write csv here instead of stdout
    #[arg(long)]
    pub out: Option<String>,
}

pub fn run(args: SampleArgs) -> anyhow::Result<()> {
    if args.every == 0 {
        bail!("--every must be >= 1");
    }
    let params = args.params.params()?;
    let (_, palette) = args.input.load(&params)?;
    let channel = Channel::from(args.channel);
    let g = palette.channel(channel);

    let (x0, values) = match args.segment {
        Some(i) => match g.segments.get(i) {
            Some(s) => (s.x_start, s.curve.clone()),
            None => bail!("{channel} has {} segments, no segment #{i}", g.segments.len()),
        },
        None => (g.points.first().map_or(0, |p| p.position.x), g.flatten()),
    };

    let rows: Vec<(i32, i32)> = values
        .iter()
        .enumerate()
        .step_by(args.every)
        .map(|(i, &y)| (x0 + i as i32, y))
        .collect();

    match args.out.as_deref() {
        Some(file) => curve_csv::write_csv(file, &rows)?,
        None => print!("{}", curve_csv::to_csv(&rows)),
    }
    eprintln!("sample ok: channel={channel} rows={} values={}", rows.len(), values.len());
    Ok(())
}
