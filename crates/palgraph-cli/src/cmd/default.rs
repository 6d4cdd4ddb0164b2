// crates/palgraph-cli/src/cmd/default.rs

use clap::Args;
use palgraph_core::codec::palette_id_hex;
use palgraph_core::encode_palette;
use palgraph_core::model::defaults::default_palette;

use crate::cmd::args::ParamArgs;
use crate::io::path_file;

#[derive(Args, Debug)]
pub struct DefaultArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// Write the path here instead of stdout
    #[arg(long)]
    pub out: Option<String>,
}

pub fn run(args: DefaultArgs) -> anyhow::Result<()> {
    let params = args.params.params()?;
    let palette = default_palette(&params);
    let path = encode_palette(&palette)?;
    path_file::emit_path(args.out.as_deref(), &path)?;
    eprintln!("default ok: id={} len={}", palette_id_hex(&palette)?, path.len());
    Ok(())
}
