use crate::{
    animation::spring::Spring,
    audio::gain::audio_gain,
    composition::model::{PromoComposition, SceneTiming},
    foundation::core::{Fps, FrameIndex},
    foundation::error::{PromoError, PromoResult},
    scenes::{
        background::{BackgroundStyle, background_style},
        intro::{IntroStyle, intro_style},
        outro::{OutroStyle, outro_style},
        particles::{ParticleField, ParticleStyle},
        showcase::{ShowcaseStyle, showcase_style},
    },
    timeline::sequence::{SceneKind, Timeline},
};

/// Fully determined visual and audio state for one frame.
///
/// Inside a transition overlap window two scene styles are present at once;
/// the external compositor cross-fades them. Everything here is a pure
/// function of `(frame, composition)`.
#[derive(Clone, Debug, serde::Serialize)]
pub struct FrameStyles {
    /// Evaluated frame index.
    pub frame: FrameIndex,
    /// Full-duration background layer.
    pub background: BackgroundStyle,
    /// Full-duration particle overlay.
    pub particles: Vec<ParticleStyle>,
    /// Intro scene style, when the intro is active.
    pub intro: Option<IntroStyle>,
    /// Showcase scene style, when a feature slot is active.
    pub showcase: Option<ShowcaseStyle>,
    /// Outro scene style, when the outro is active.
    pub outro: Option<OutroStyle>,
    /// Background audio gain in `[0, 1]`.
    pub audio_gain: f64,
}

/// Per-render frame evaluator.
///
/// Validates the composition once and front-loads the deterministic particle
/// field and the entrance spring's settle measurement; after construction
/// every frame evaluation is pure and read-only, so frames may be requested
/// repeatedly and in any order (preview scrubbing).
#[derive(Clone, Debug)]
pub struct Evaluator {
    fps: Fps,
    duration: FrameIndex,
    timing: SceneTiming,
    entrance: Spring,
    feature_count: usize,
    timeline: Timeline,
    particles: ParticleField,
}

impl Evaluator {
    /// Validate the composition and build the timeline and particle field.
    pub fn new(comp: &PromoComposition) -> PromoResult<Self> {
        comp.validate()?;

        let feature_count = comp.params.features.len();
        let timing = comp.timing.clone();
        let scenes = [
            (SceneKind::Intro, timing.intro_frames),
            (SceneKind::Showcase, timing.showcase_frames(feature_count)),
            (SceneKind::Outro, timing.outro_frames),
        ];
        let timeline = Timeline::new(&scenes, timing.transition_frames, comp.duration)?;
        let particles = ParticleField::new(timing.particle_count, comp.seed);
        let entrance = Spring::measure(comp.fps, timing.entrance);

        Ok(Self {
            fps: comp.fps,
            duration: comp.duration,
            timing,
            entrance,
            feature_count,
            timeline,
            particles,
        })
    }

    /// Resolved scene timeline.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Evaluate one frame into a style snapshot.
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn eval_frame(&self, frame: FrameIndex) -> PromoResult<FrameStyles> {
        if frame.0 >= self.duration.0 {
            return Err(PromoError::evaluation(format!(
                "frame {} is out of bounds (duration {})",
                frame.0, self.duration.0
            )));
        }

        let background = background_style(frame, self.duration.0)?;
        let particles = self.particles.styles(frame, self.fps)?;

        let mut intro = None;
        let mut showcase = None;
        let mut outro = None;
        for active in self.timeline.active(frame) {
            match active.kind {
                SceneKind::Intro => {
                    intro = Some(intro_style(
                        active.local,
                        self.timing.intro_frames,
                        self.fps,
                        &self.entrance,
                    )?);
                }
                SceneKind::Showcase => {
                    showcase = showcase_style(
                        active.local,
                        self.timing.slot_frames,
                        self.feature_count,
                        self.fps,
                        &self.entrance,
                    )?;
                }
                SceneKind::Outro => {
                    outro = Some(outro_style(
                        active.local,
                        self.timing.outro_frames,
                        self.fps,
                        &self.entrance,
                    )?);
                }
            }
        }

        let audio_gain = audio_gain(frame, self.duration.0, &self.timing.audio)?;

        Ok(FrameStyles {
            frame,
            background,
            particles,
            intro,
            showcase,
            outro,
            audio_gain,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
