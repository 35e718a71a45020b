use crate::{
    animation::{
        interp::{Extrapolate, InterpolateOpts, interpolate, interpolate_clamped},
        ops::shifted,
        spring::Spring,
    },
    foundation::core::{Fps, FrameIndex},
    foundation::error::{PromoError, PromoResult},
};

const LOGO_ENTRANCE_FRAMES: u64 = 45;
const LOGO_FADE_FRAMES: f64 = 15.0;
const TAGLINE_DELAY_FRAMES: u64 = 20;
const TAGLINE_ENTRANCE_FRAMES: u64 = 40;
const EXIT_FADE_FRAMES: f64 = 20.0;

/// Style snapshot for the intro scene at one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct IntroStyle {
    /// Logo opacity in `[0, 1]`.
    pub logo_opacity: f64,
    /// Logo scale factor; overshoots slightly above 1 on the bounce.
    pub logo_scale: f64,
    /// Tagline opacity in `[0, 1]`.
    pub tagline_opacity: f64,
    /// Tagline vertical offset in pixels (slides up to 0).
    pub tagline_offset_y: f64,
    /// Whole-scene exit fade in `[0, 1]`.
    pub scene_opacity: f64,
}

/// Compose the intro style for a scene-local frame.
pub fn intro_style(
    local: FrameIndex,
    scene_frames: u64,
    fps: Fps,
    entrance: &Spring,
) -> PromoResult<IntroStyle> {
    if scene_frames == 0 {
        return Err(PromoError::configuration("intro scene_frames must be > 0"));
    }
    let f = local.0 as f64;
    let overshooting = InterpolateOpts {
        left: Extrapolate::Clamp,
        right: Extrapolate::Extend,
    };

    let logo_pop = entrance.progress_over(shifted(local.0, 0), fps, LOGO_ENTRANCE_FRAMES)?;
    let logo_scale = interpolate(logo_pop, &[0.0, 1.0], &[0.6, 1.0], overshooting)?;
    let logo_opacity = interpolate_clamped(f, &[0.0, LOGO_FADE_FRAMES], &[0.0, 1.0])?;

    let tagline_pop = entrance.progress_over(
        shifted(local.0, TAGLINE_DELAY_FRAMES),
        fps,
        TAGLINE_ENTRANCE_FRAMES,
    )?;
    let tagline_offset_y = interpolate(tagline_pop, &[0.0, 1.0], &[24.0, 0.0], overshooting)?;
    let tagline_opacity = tagline_pop.clamp(0.0, 1.0);

    let last = (scene_frames - 1) as f64;
    let scene_opacity = interpolate_clamped(f, &[last - EXIT_FADE_FRAMES, last], &[1.0, 0.0])?;

    Ok(IntroStyle {
        logo_opacity,
        logo_scale,
        tagline_opacity,
        tagline_offset_y,
        scene_opacity,
    })
}
