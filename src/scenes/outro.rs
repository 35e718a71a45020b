use crate::{
    animation::{
        interp::{Extrapolate, InterpolateOpts, interpolate, interpolate_clamped},
        ops::shifted,
        spring::Spring,
    },
    foundation::core::{Fps, FrameIndex},
    foundation::error::{PromoError, PromoResult},
};

const CTA_ENTRANCE_FRAMES: u64 = 50;
const PULSE_HZ: f64 = 0.5;
const EXIT_FADE_FRAMES: f64 = 30.0;

/// Style snapshot for the outro scene at one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct OutroStyle {
    /// Call-to-action opacity in `[0, 1]`.
    pub cta_opacity: f64,
    /// Call-to-action scale; overshoots slightly on the bounce.
    pub cta_scale: f64,
    /// Glow intensity in `[0, 1]`, sine pulse gated by the entrance.
    pub glow: f64,
    /// Whole-scene terminal fade in `[0, 1]`.
    pub scene_opacity: f64,
}

/// Compose the outro style for a scene-local frame.
pub fn outro_style(
    local: FrameIndex,
    scene_frames: u64,
    fps: Fps,
    entrance: &Spring,
) -> PromoResult<OutroStyle> {
    if scene_frames == 0 {
        return Err(PromoError::configuration("outro scene_frames must be > 0"));
    }
    let overshooting = InterpolateOpts {
        left: Extrapolate::Clamp,
        right: Extrapolate::Extend,
    };

    let pop = entrance.progress_over(shifted(local.0, 0), fps, CTA_ENTRANCE_FRAMES)?;
    let cta_scale = interpolate(pop, &[0.0, 1.0], &[0.8, 1.0], overshooting)?;
    let cta_opacity = pop.clamp(0.0, 1.0);

    let secs = fps.frames_to_secs(local.0);
    let wave = 0.5 + 0.5 * (std::f64::consts::TAU * PULSE_HZ * secs).sin();
    let glow = interpolate_clamped(wave, &[0.0, 1.0], &[0.3, 1.0])? * cta_opacity;

    let last = (scene_frames - 1) as f64;
    let scene_opacity = interpolate_clamped(
        local.0 as f64,
        &[last - EXIT_FADE_FRAMES, last],
        &[1.0, 0.0],
    )?;

    Ok(OutroStyle {
        cta_opacity,
        cta_scale,
        glow,
        scene_opacity,
    })
}
