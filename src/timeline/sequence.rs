use crate::foundation::{
    core::{FrameIndex, FrameRange},
    error::{PromoError, PromoResult},
};

/// The fixed scenes of the promo, in play order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SceneKind {
    /// Brand/logo entrance.
    Intro,
    /// Feature showcase slots.
    Showcase,
    /// Call-to-action outro.
    Outro,
}

/// A scene's absolute placement on the composition timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SceneSpan {
    /// Which scene occupies the span.
    pub kind: SceneKind,
    /// Absolute frame range `[start, end)`.
    pub range: FrameRange,
}

/// A scene active at a specific frame, with its scene-local clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ActiveScene {
    /// Which scene is active.
    pub kind: SceneKind,
    /// Frame relative to the scene's start.
    pub local: FrameIndex,
}

/// Concatenated scenes with fixed transition overlap.
///
/// Scene `i + 1` starts `transition_frames` before scene `i` ends; the overlap
/// window is where the external compositor cross-fades. Frame ranges are
/// contiguous and non-overlapping except inside those windows.
#[derive(Clone, Debug)]
pub struct Timeline {
    spans: Vec<SceneSpan>,
    transition_frames: u64,
    total: FrameIndex,
}

impl Timeline {
    /// Lay out scenes and verify the composed total against the
    /// caller-supplied duration.
    pub fn new(
        scenes: &[(SceneKind, u64)],
        transition_frames: u64,
        expected_total: FrameIndex,
    ) -> PromoResult<Self> {
        if scenes.is_empty() {
            return Err(PromoError::configuration(
                "timeline requires at least one scene",
            ));
        }

        let mut spans = Vec::with_capacity(scenes.len());
        let mut start = 0u64;
        for (i, &(kind, duration)) in scenes.iter().enumerate() {
            if duration == 0 {
                return Err(PromoError::configuration(format!(
                    "scene {kind:?} must have duration > 0"
                )));
            }
            if scenes.len() > 1 && duration < transition_frames {
                return Err(PromoError::configuration(format!(
                    "scene {kind:?} is shorter than the transition overlap"
                )));
            }
            let range = FrameRange::new(FrameIndex(start), FrameIndex(start + duration))?;
            spans.push(SceneSpan { kind, range });
            if i + 1 < scenes.len() {
                start = start + duration - transition_frames;
            } else {
                start += duration;
            }
        }

        let total = FrameIndex(start);
        if total != expected_total {
            return Err(PromoError::configuration(format!(
                "scenes compose to {} frames, expected {}",
                total.0, expected_total.0
            )));
        }

        Ok(Self {
            spans,
            transition_frames,
            total,
        })
    }

    /// Absolute scene placements.
    pub fn spans(&self) -> &[SceneSpan] {
        &self.spans
    }

    /// Composed total duration.
    pub fn total(&self) -> FrameIndex {
        self.total
    }

    /// Transition overlap in frames.
    pub fn transition_frames(&self) -> u64 {
        self.transition_frames
    }

    /// Scenes active at `frame` with their local clocks.
    ///
    /// One scene normally, two inside a transition overlap window. Pure, so
    /// repeated or out-of-order queries (preview scrubbing) are fine.
    pub fn active(&self, frame: FrameIndex) -> Vec<ActiveScene> {
        self.spans
            .iter()
            .filter(|span| span.range.contains(frame))
            .map(|span| ActiveScene {
                kind: span.kind,
                local: FrameIndex(frame.0 - span.range.start.0),
            })
            .collect()
    }

    /// Cross-fade windows between adjacent scenes.
    pub fn overlap_windows(&self) -> Vec<FrameRange> {
        self.spans
            .windows(2)
            .filter_map(|pair| {
                let start = pair[1].range.start;
                let end = pair[0].range.end;
                (start.0 < end.0).then(|| FrameRange { start, end })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/sequence.rs"]
mod tests;
