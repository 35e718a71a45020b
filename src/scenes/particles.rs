use kurbo::Vec2;

use crate::{
    animation::{interp::interpolate_clamped, rng::uniform01},
    foundation::core::{Fps, FrameIndex},
    foundation::error::PromoResult,
};

// Attribute salts keep per-particle draws decorrelated while sharing an index.
const SALT_X: u64 = 1;
const SALT_Y: u64 = 2;
const SALT_SIZE: u64 = 3;
const SALT_SPEED: u64 = 4;
const SALT_DELAY: u64 = 5;
const SALT_TWINKLE_SPEED: u64 = 6;
const SALT_TWINKLE_PHASE: u64 = 7;

const MAX_DELAY_FRAMES: f64 = 90.0;
const MIN_OPACITY: f64 = 0.15;
const MAX_OPACITY: f64 = 0.9;

/// Stable per-render particle attributes.
///
/// Derived once from `(seed, index)`; identical index (and seed) always
/// yields bit-identical attributes, making re-renders reproducible.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Particle {
    /// Particle index within the field.
    pub id: u32,
    /// Spawn position in normalized `[0, 1)` canvas coordinates.
    pub pos: Vec2,
    /// Render size in pixels.
    pub size: f64,
    /// Upward drift in canvas heights per second.
    pub speed: f64,
    /// Frames before the particle first appears.
    pub delay_frames: u64,
    /// Twinkle angular speed in radians per second.
    pub twinkle_speed: f64,
    /// Twinkle phase offset in radians.
    pub twinkle_phase: f64,
}

impl Particle {
    fn derive(seed: u64, id: u32) -> Self {
        let index = u64::from(id);
        let draw = |salt| uniform01(seed, index, salt);
        Self {
            id,
            pos: Vec2::new(draw(SALT_X), draw(SALT_Y)),
            size: 1.5 + draw(SALT_SIZE) * 3.0,
            speed: 0.02 + draw(SALT_SPEED) * 0.06,
            delay_frames: (draw(SALT_DELAY) * MAX_DELAY_FRAMES) as u64,
            twinkle_speed: std::f64::consts::TAU * (0.2 + draw(SALT_TWINKLE_SPEED) * 0.6),
            twinkle_phase: std::f64::consts::TAU * draw(SALT_TWINKLE_PHASE),
        }
    }
}

/// The memoized particle set for one render.
///
/// Created once per (count, seed) configuration and read-only afterwards, so
/// it is safely shared across all frame evaluations.
#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Derive `count` particles from the composition seed.
    pub fn new(count: u32, seed: u64) -> Self {
        Self {
            particles: (0..count).map(|id| Particle::derive(seed, id)).collect(),
        }
    }

    /// The derived particles.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Per-frame styles for the whole field.
    pub fn styles(&self, frame: FrameIndex, fps: Fps) -> PromoResult<Vec<ParticleStyle>> {
        self.particles
            .iter()
            .map(|p| particle_style(p, frame, fps))
            .collect()
    }
}

/// Style snapshot for one particle at one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ParticleStyle {
    /// Horizontal position in normalized `[0, 1)` coordinates.
    pub x: f64,
    /// Vertical position in normalized `[0, 1)` coordinates.
    pub y: f64,
    /// Render size in pixels.
    pub size: f64,
    /// Twinkling opacity; 0 before the particle's delay elapses.
    pub opacity: f64,
}

/// Compose one particle's style for an absolute frame.
pub fn particle_style(p: &Particle, frame: FrameIndex, fps: Fps) -> PromoResult<ParticleStyle> {
    if frame.0 < p.delay_frames {
        return Ok(ParticleStyle {
            x: p.pos.x,
            y: p.pos.y,
            size: p.size,
            opacity: 0.0,
        });
    }

    let secs = fps.frames_to_secs(frame.0 - p.delay_frames);
    let y = (p.pos.y - p.speed * secs).rem_euclid(1.0);
    let twinkle = 0.5 + 0.5 * (p.twinkle_speed * secs + p.twinkle_phase).sin();
    let opacity = interpolate_clamped(twinkle, &[0.0, 1.0], &[MIN_OPACITY, MAX_OPACITY])?;

    Ok(ParticleStyle {
        x: p.pos.x,
        y,
        size: p.size,
        opacity,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/particles.rs"]
mod tests;
