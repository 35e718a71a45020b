//! Promoreel is the deterministic timing model behind a short, parameterized
//! promotional video.
//!
//! The external renderer owns pixels, encoding, asset IO and transition
//! compositing; this crate owns the math that maps `(frame, fps, config)` to
//! style values. The public surface is evaluation-oriented:
//!
//! - Load and validate a [`PromoComposition`]
//! - Create an [`Evaluator`]
//! - Query [`FrameStyles`] for any frame, in any order
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: every per-frame value is a pure function
//!   of the frame index and the composition, including the seeded particle
//!   attributes; re-renders are bit-identical.
//! - **No per-frame state**: springs are recomputed analytically each call,
//!   so there is no integration error to accumulate and frames can be
//!   evaluated out of order (preview scrubbing).
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod audio;
mod composition;
mod eval;
mod foundation;
mod scenes;
mod timeline;

pub use animation::interp::{Extrapolate, InterpolateOpts, interpolate, interpolate_clamped};
pub use animation::ops::{shifted, stagger_delay};
pub use animation::rng::{Rng64, uniform01};
pub use animation::spring::{
    SETTLE_EPSILON, Spring, SpringConfig, settle_duration_frames, spring, spring_over,
};
pub use audio::gain::{AudioFade, audio_gain};
pub use composition::model::{
    Asset, AudioAsset, Feature, ImageAsset, PromoComposition, PromoParams, SceneTiming,
};
pub use eval::evaluator::{Evaluator, FrameStyles};
pub use foundation::core::{Canvas, Fps, FrameIndex, FrameRange};
pub use foundation::error::{PromoError, PromoResult};
pub use scenes::background::{BackgroundStyle, background_style};
pub use scenes::intro::{IntroStyle, intro_style};
pub use scenes::outro::{OutroStyle, outro_style};
pub use scenes::particles::{Particle, ParticleField, ParticleStyle, particle_style};
pub use scenes::showcase::{ShowcaseStyle, showcase_style, visible_item};
pub use timeline::sequence::{ActiveScene, SceneKind, SceneSpan, Timeline};
