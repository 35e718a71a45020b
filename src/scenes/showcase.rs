use crate::{
    animation::{
        interp::{Extrapolate, InterpolateOpts, interpolate, interpolate_clamped},
        ops::shifted,
        spring::Spring,
    },
    foundation::core::{Fps, FrameIndex},
    foundation::error::{PromoError, PromoResult},
};

const TITLE_ENTRANCE_FRAMES: u64 = 40;
const SUBTITLE_DELAY_FRAMES: u64 = 12;
const SLOT_EXIT_FADE_FRAMES: f64 = 18.0;
const SLIDE_DISTANCE_PX: f64 = 40.0;

/// Style snapshot for the showcase scene: the single visible feature item.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ShowcaseStyle {
    /// Index of the visible feature item.
    pub item_index: usize,
    /// Title opacity in `[0, 1]`.
    pub title_opacity: f64,
    /// Title vertical offset in pixels (slides up to 0).
    pub title_offset_y: f64,
    /// Subtitle opacity in `[0, 1]`.
    pub subtitle_opacity: f64,
    /// Subtitle vertical offset in pixels.
    pub subtitle_offset_y: f64,
    /// Whole-slot fade applied over the slot's final frames.
    pub slot_opacity: f64,
}

/// The feature item whose slot contains `local`, if any.
///
/// Item `i` is visible iff `i*slot <= local < (i+1)*slot`: windows are
/// mutually exclusive and collectively cover `[0, item_count*slot)`. A
/// zero-frame slot has no windows, so no item is ever visible.
pub fn visible_item(local: FrameIndex, slot_frames: u64, item_count: usize) -> Option<usize> {
    if slot_frames == 0 {
        return None;
    }
    let idx = (local.0 / slot_frames) as usize;
    (idx < item_count).then_some(idx)
}

/// Compose the showcase style for a scene-local frame.
///
/// Returns `None` outside every item's visibility window rather than a
/// degenerate styled element.
pub fn showcase_style(
    local: FrameIndex,
    slot_frames: u64,
    item_count: usize,
    fps: Fps,
    entrance: &Spring,
) -> PromoResult<Option<ShowcaseStyle>> {
    if slot_frames == 0 {
        return Err(PromoError::configuration(
            "showcase slot_frames must be > 0",
        ));
    }
    let Some(item_index) = visible_item(local, slot_frames, item_count) else {
        return Ok(None);
    };
    let slot_local = local.0 - item_index as u64 * slot_frames;
    let overshooting = InterpolateOpts {
        left: Extrapolate::Clamp,
        right: Extrapolate::Extend,
    };

    let title_pop = entrance.progress_over(shifted(slot_local, 0), fps, TITLE_ENTRANCE_FRAMES)?;
    let title_offset_y = interpolate(
        title_pop,
        &[0.0, 1.0],
        &[SLIDE_DISTANCE_PX, 0.0],
        overshooting,
    )?;

    let subtitle_pop = entrance.progress_over(
        shifted(slot_local, SUBTITLE_DELAY_FRAMES),
        fps,
        TITLE_ENTRANCE_FRAMES,
    )?;
    let subtitle_offset_y = interpolate(
        subtitle_pop,
        &[0.0, 1.0],
        &[SLIDE_DISTANCE_PX, 0.0],
        overshooting,
    )?;

    let last = (slot_frames - 1) as f64;
    let slot_opacity = interpolate_clamped(
        slot_local as f64,
        &[last - SLOT_EXIT_FADE_FRAMES, last],
        &[1.0, 0.0],
    )?;

    Ok(Some(ShowcaseStyle {
        item_index,
        title_opacity: title_pop.clamp(0.0, 1.0),
        title_offset_y,
        subtitle_opacity: subtitle_pop.clamp(0.0, 1.0),
        subtitle_offset_y,
        slot_opacity,
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/showcase.rs"]
mod tests;
