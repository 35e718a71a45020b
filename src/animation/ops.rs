//! Clock-shift helpers for staggered reveals.
//!
//! A per-item delay is subtracted from the driving frame before the result is
//! fed to the spring, so one spring definition serves any ordered reveal
//! sequence. Negative results mean "not yet started" and the spring clamps
//! them to 0.

/// Elapsed frames for an animation that starts `delay_frames` late.
pub fn shifted(frame: u64, delay_frames: u64) -> i64 {
    frame as i64 - delay_frames as i64
}

/// Delay for the `index`-th item of a stagger, `per_item_frames` apart.
pub fn stagger_delay(index: usize, per_item_frames: u64) -> u64 {
    (index as u64).saturating_mul(per_item_frames)
}
