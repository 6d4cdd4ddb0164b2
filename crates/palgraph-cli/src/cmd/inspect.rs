// crates/palgraph-cli/src/cmd/inspect.rs

use clap::Args;
use palgraph_core::codec::palette_id_hex;
use palgraph_core::curve::bezier::trace;
use palgraph_core::solver::segment_control_points;
use palgraph_core::validate::validate_palette;
use palgraph_core::{Channel, Handles};

use crate::cmd::args::{fmt_pos, ParamArgs, PathInput};

#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub input: PathInput,

    #[command(flatten)]
    pub params: ParamArgs,

    /// Skip the per-segment box-crossing and fold-back checks
    #[arg(long)]
    pub quick: bool,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let params = args.params.params()?;
    let (path, palette) = args.input.load(&params)?;

    eprintln!("--- inspect ---");
    eprintln!("path       = {path}");
    eprintln!("palette_id = {}", palette_id_hex(&palette)?);

    let mut warnings = 0usize;
    for c in Channel::ALL {
        let g = palette.channel(c);
        eprintln!("--- {c} ({} points, {} segments) ---", g.points.len(), g.segments.len());

        for (i, p) in g.points.iter().enumerate() {
            let handles = match p.handles {
                Handles::Single(h) => fmt_pos(h),
                Handles::Pair(a, b) => format!("{} {}", fmt_pos(a), fmt_pos(b)),
            };
            eprintln!("point #{i:<3} at {:<12} handles {handles}", fmt_pos(p.position));
        }

        for (i, s) in g.segments.iter().enumerate() {
            match s.x_end() {
                Some(end) => eprintln!("seg   #{i:<3} x={}..={} len={}", s.x_start, end, s.curve.len()),
                None => {
                    eprintln!("seg   #{i:<3} degenerate (empty curve)");
                    warnings += 1;
                }
            }

            if !args.quick {
                let t = trace(&segment_control_points(g, i)?, &params);
                if t.bounds.any() {
                    eprintln!("WARNING: {c} seg #{i} leaves the graph box: {:?}", t.bounds);
                    warnings += 1;
                }
                if let Some(at) = t.fold_back {
                    eprintln!("WARNING: {c} seg #{i} folds back on x at {}", fmt_pos(at));
                    warnings += 1;
                }
            }
        }
    }

    let pointers: Vec<String> = palette.swatches.iter().map(|s| s.pointer.to_string()).collect();
    eprintln!("--- swatches ---");
    eprintln!("pointers   = [{}]", pointers.join(", "));

    let valid = match validate_palette(&palette) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("WARNING: {e}");
            false
        }
    };
    eprintln!("inspect ok: valid={valid} warnings={warnings}");
    Ok(())
}
