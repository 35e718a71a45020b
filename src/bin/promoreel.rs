use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use promoreel::{Evaluator, FrameIndex, PromoComposition};

#[derive(Parser, Debug)]
#[command(name = "promoreel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the default composition document as JSON.
    Init(InitArgs),
    /// Evaluate one frame and dump its style snapshot as JSON.
    Frame(FrameArgs),
    /// Dump the resolved scene timeline and transition windows.
    Timeline(TimelineArgs),
}

#[derive(Parser, Debug)]
struct InitArgs {
    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input composition JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Pretty-print the JSON output.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    /// Input composition JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Init(args) => cmd_init(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Timeline(args) => cmd_timeline(args),
    }
}

fn cmd_init(args: InitArgs) -> anyhow::Result<()> {
    let comp = PromoComposition::with_defaults()?;
    let json = serde_json::to_string_pretty(&comp)?;
    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, json)
        .with_context(|| format!("write composition '{}'", args.out.display()))?;
    println!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let comp = PromoComposition::from_path(&args.in_path)?;
    let eval = Evaluator::new(&comp)?;
    let styles = eval.eval_frame(FrameIndex(args.frame))?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&styles)?
    } else {
        serde_json::to_string(&styles)?
    };
    println!("{json}");
    Ok(())
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let comp = PromoComposition::from_path(&args.in_path)?;
    let eval = Evaluator::new(&comp)?;
    let timeline = eval.timeline();
    let doc = serde_json::json!({
        "total_frames": timeline.total(),
        "transition_frames": timeline.transition_frames(),
        "spans": timeline.spans(),
        "overlap_windows": timeline.overlap_windows(),
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
