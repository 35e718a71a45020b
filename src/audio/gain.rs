use crate::{
    animation::interp::interpolate_clamped,
    foundation::{
        core::FrameIndex,
        error::{PromoError, PromoResult},
    },
};

/// Background audio fade envelope.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AudioFade {
    /// Plateau gain between the ramps.
    #[serde(default = "default_target")]
    pub target: f64,
    /// Linear ramp-in window starting at frame 0.
    #[serde(default = "default_fade_in")]
    pub fade_in_frames: u64,
    /// Linear ramp-out window ending at the last frame.
    #[serde(default = "default_fade_out")]
    pub fade_out_frames: u64,
}

fn default_target() -> f64 {
    0.7
}

fn default_fade_in() -> u64 {
    30
}

fn default_fade_out() -> u64 {
    45
}

impl Default for AudioFade {
    fn default() -> Self {
        Self {
            target: default_target(),
            fade_in_frames: default_fade_in(),
            fade_out_frames: default_fade_out(),
        }
    }
}

impl AudioFade {
    /// Validate the envelope against a composition length.
    pub fn validate(&self, total_frames: u64) -> PromoResult<()> {
        if !self.target.is_finite() || !(0.0..=1.0).contains(&self.target) {
            return Err(PromoError::configuration(
                "audio fade target must be in [0, 1]",
            ));
        }
        if self.fade_in_frames == 0 || self.fade_out_frames == 0 {
            return Err(PromoError::configuration(
                "audio fade windows must be > 0 frames",
            ));
        }
        let last = total_frames.saturating_sub(1);
        if self.fade_in_frames + self.fade_out_frames >= last {
            return Err(PromoError::configuration(
                "audio fade windows must not overlap (fade_in + fade_out < last frame)",
            ));
        }
        Ok(())
    }
}

/// Time-varying background audio gain.
///
/// Linear ramp 0 -> target over the fade-in window, constant target, linear
/// ramp target -> 0 ending exactly at the composition's last frame.
pub fn audio_gain(frame: FrameIndex, total_frames: u64, fade: &AudioFade) -> PromoResult<f64> {
    fade.validate(total_frames)?;
    let last = (total_frames - 1) as f64;
    interpolate_clamped(
        frame.0 as f64,
        &[
            0.0,
            fade.fade_in_frames as f64,
            last - fade.fade_out_frames as f64,
            last,
        ],
        &[0.0, fade.target, fade.target, 0.0],
    )
}
