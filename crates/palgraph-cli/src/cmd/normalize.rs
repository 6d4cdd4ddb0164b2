// crates/palgraph-cli/src/cmd/normalize.rs

use clap::Args;
use palgraph_core::codec::palette_id_hex;
use palgraph_core::encode_palette;

use crate::cmd::args::{ParamArgs, PathInput};
use crate::io::path_file;

#[derive(Args, Debug)]
pub struct NormalizeArgs {
    #[command(flatten)]
    pub input: PathInput,

    #[command(flatten)]
    pub params: ParamArgs,

    /// Write the canonical path here instead of stdout
    #[arg(long)]
    pub out: Option<String>,
}

pub fn run(args: NormalizeArgs) -> anyhow::Result<()> {
    let params = args.params.params()?;
    let (before, palette) = args.input.load(&params)?;
    let after = encode_palette(&palette)?;
    path_file::emit_path(args.out.as_deref(), &after)?;
    eprintln!(
        "normalize ok: changed={} id={}",
        before != after,
        palette_id_hex(&palette)?
    );
    Ok(())
}
