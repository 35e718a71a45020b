use crate::foundation::{
    core::Fps,
    error::{PromoError, PromoResult},
};

/// Damped harmonic oscillator parameters for an entrance curve from 0 to 1.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Damping coefficient; higher settles faster with less bounce.
    #[serde(default = "default_damping")]
    pub damping: f64,
    /// Restoring force toward the target.
    #[serde(default = "default_stiffness")]
    pub stiffness: f64,
    /// Oscillator mass.
    #[serde(default = "default_mass")]
    pub mass: f64,
}

fn default_damping() -> f64 {
    10.0
}

fn default_stiffness() -> f64 {
    100.0
}

fn default_mass() -> f64 {
    1.0
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            stiffness: default_stiffness(),
            mass: default_mass(),
        }
    }
}

impl SpringConfig {
    /// Validate that all constants are finite and positive.
    pub fn validate(&self) -> PromoResult<()> {
        for (name, v) in [
            ("damping", self.damping),
            ("stiffness", self.stiffness),
            ("mass", self.mass),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(PromoError::configuration(format!(
                    "spring {name} must be finite and > 0"
                )));
            }
        }
        Ok(())
    }

    fn omega0(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    fn zeta(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// Tolerance used to decide the spring has settled at 1.
pub const SETTLE_EPSILON: f64 = 0.005;

const MAX_SETTLE_FRAMES: u64 = 1200;

/// Spring progress after `elapsed_frames` frames.
///
/// Starts at 0, settles at 1; underdamped configurations overshoot slightly
/// above 1 before settling. Negative elapsed frames mean "not yet started"
/// and the output is clamped to exactly 0 here, at the utility boundary, so
/// call sites never re-clamp. Pure per-call recomputation: no state is
/// carried between frames and no integration error accumulates.
pub fn spring(elapsed_frames: i64, fps: Fps, cfg: &SpringConfig) -> f64 {
    if elapsed_frames <= 0 {
        return 0.0;
    }
    response(fps.frames_to_secs(elapsed_frames as u64), cfg).max(0.0)
}

/// Spring progress compressed into a fixed frame window.
///
/// Rescales elapsed time so the natural settle duration of `cfg` maps onto
/// `duration_frames`: progress is ~1 (within [`SETTLE_EPSILON`]) at
/// `duration_frames` regardless of the physical constants, and 0 at or before
/// frame 0.
///
/// Measures the settle duration on every call; hot paths should measure once
/// via [`Spring`] instead.
pub fn spring_over(
    elapsed_frames: i64,
    fps: Fps,
    cfg: &SpringConfig,
    duration_frames: u64,
) -> PromoResult<f64> {
    Spring::measure(fps, *cfg).progress_over(elapsed_frames, fps, duration_frames)
}

/// A spring configuration with its natural settle duration measured once.
///
/// The settle scan is front-loaded at construction, so per-frame progress
/// queries are O(1). The evaluator builds one per composition.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    cfg: SpringConfig,
    natural_frames: u64,
}

impl Spring {
    /// Measure the natural settle duration of `cfg` at `fps`.
    pub fn measure(fps: Fps, cfg: SpringConfig) -> Self {
        Self {
            cfg,
            natural_frames: settle_duration_frames(fps, &cfg).max(1),
        }
    }

    /// The underlying physical constants.
    pub fn config(&self) -> &SpringConfig {
        &self.cfg
    }

    /// Measured natural settle duration in frames.
    pub fn natural_frames(&self) -> u64 {
        self.natural_frames
    }

    /// Progress after `elapsed_frames`; see [`spring`].
    pub fn progress(&self, elapsed_frames: i64, fps: Fps) -> f64 {
        spring(elapsed_frames, fps, &self.cfg)
    }

    /// Progress compressed into `duration_frames`; see [`spring_over`].
    pub fn progress_over(
        &self,
        elapsed_frames: i64,
        fps: Fps,
        duration_frames: u64,
    ) -> PromoResult<f64> {
        if duration_frames == 0 {
            return Err(PromoError::configuration(
                "spring duration_frames must be > 0",
            ));
        }
        if elapsed_frames <= 0 {
            return Ok(0.0);
        }

        let scaled_frames =
            (elapsed_frames as f64) * (self.natural_frames as f64) / (duration_frames as f64);
        Ok(response(scaled_frames * fps.frame_duration_secs(), &self.cfg).max(0.0))
    }
}

/// First frame count after which the response stays within
/// [`SETTLE_EPSILON`] of 1 (bounded scan; saturates at an internal cap for
/// pathologically slow configurations).
pub fn settle_duration_frames(fps: Fps, cfg: &SpringConfig) -> u64 {
    let mut last_outside = 0u64;
    for f in 1..=MAX_SETTLE_FRAMES {
        let v = response(fps.frames_to_secs(f), cfg);
        if (v - 1.0).abs() >= SETTLE_EPSILON {
            last_outside = f;
        }
    }
    (last_outside + 1).min(MAX_SETTLE_FRAMES)
}

/// Closed-form displacement of the unit-step-driven oscillator at `t` seconds
/// with initial conditions x(0)=0, x'(0)=0.
fn response(t: f64, cfg: &SpringConfig) -> f64 {
    let omega0 = cfg.omega0();
    let zeta = cfg.zeta();

    if zeta < 1.0 {
        // Underdamped: decaying oscillation around the target.
        let omega_d = omega0 * (1.0 - zeta * zeta).sqrt();
        let decay = (-zeta * omega0 * t).exp();
        1.0 - decay * ((omega_d * t).cos() + (zeta * omega0 / omega_d) * (omega_d * t).sin())
    } else if zeta == 1.0 {
        // Critically damped.
        let decay = (-omega0 * t).exp();
        1.0 - decay * (1.0 + omega0 * t)
    } else {
        // Overdamped: two real decay rates.
        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -omega0 * (zeta - root);
        let r2 = -omega0 * (zeta + root);
        1.0 - (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
    }
}
