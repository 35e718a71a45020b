//! Evaluate a handful of frames of the default composition and print the
//! style snapshots as JSON lines.
//!
//! Run with: `cargo run --example eval_frames`

use promoreel::{Evaluator, FrameIndex, PromoComposition};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let comp = PromoComposition::with_defaults()?;
    let eval = Evaluator::new(&comp)?;

    for frame in [0u64, 45, 80, 300, 700, 1100, comp.duration.0 - 1] {
        let styles = eval.eval_frame(FrameIndex(frame))?;
        println!("{}", serde_json::to_string(&styles)?);
    }
    Ok(())
}
