// crates/palgraph-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;
mod logging;

#[derive(Parser)]
#[command(name = "palgraph-cli")]
#[command(about = "Palette graph tools: path codec, curve sampling, bounded edits", long_about = None)]
pub struct Cli {
    /// Log filter in env_logger syntax (overrides RUST_LOG)
    #[arg(long, global = true)]
    pub log: Option<String>,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the path of the palette a new session starts from
    Default(cmd::default::DefaultArgs),

    /// Decode a path and report points, segments, swatches and diagnostics
    Inspect(cmd::inspect::InspectArgs),

    /// Decode then re-encode a path (canonical form)
    Normalize(cmd::normalize::NormalizeArgs),

    /// Legal rectangle for one control point of a segment
    Bounds(cmd::bounds::BoundsArgs),

    /// Move an anchor point
    MovePoint(cmd::move_point::MovePointArgs),

    /// Move one handle of a point
    MoveHandle(cmd::move_handle::MoveHandleArgs),

    /// Split a segment at the curve position nearest a cursor
    InsertPoint(cmd::insert_point::InsertPointArgs),

    /// Dump a flattened channel or segment curve as x,y rows
    Sample(cmd::sample::SampleArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log.as_deref());

    match cli.cmd {
        Commands::Default(args) => cmd::default::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
        Commands::Normalize(args) => cmd::normalize::run(args),
        Commands::Bounds(args) => cmd::bounds::run(args),
        Commands::MovePoint(args) => cmd::move_point::run(args),
        Commands::MoveHandle(args) => cmd::move_handle::run(args),
        Commands::InsertPoint(args) => cmd::insert_point::run(args),
        Commands::Sample(args) => cmd::sample::run(args),
    }
}
