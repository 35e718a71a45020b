use crate::{
    animation::interp::interpolate_clamped,
    foundation::core::FrameIndex,
    foundation::error::{PromoError, PromoResult},
};

/// Style snapshot for the full-duration background layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct BackgroundStyle {
    /// Gradient intensity multiplier; rises to a mid-composition peak.
    pub intensity: f64,
    /// Slow hue drift in degrees across the whole composition.
    pub hue_shift_deg: f64,
}

/// Compose the background style for an absolute frame.
pub fn background_style(frame: FrameIndex, total_frames: u64) -> PromoResult<BackgroundStyle> {
    if total_frames == 0 {
        return Err(PromoError::configuration(
            "background total_frames must be > 0",
        ));
    }
    let f = frame.0 as f64;
    let last = (total_frames - 1) as f64;

    let intensity = interpolate_clamped(f, &[0.0, last / 2.0, last], &[0.8, 1.0, 0.85])?;
    let hue_shift_deg = interpolate_clamped(f, &[0.0, last], &[0.0, 40.0])?;

    Ok(BackgroundStyle {
        intensity,
        hue_shift_deg,
    })
}
