use std::collections::BTreeMap;
use std::path::Path;

use crate::{
    animation::spring::SpringConfig,
    audio::gain::AudioFade,
    foundation::core::{Canvas, Fps, FrameIndex},
    foundation::error::{PromoError, PromoResult},
};

/// A complete promotional-video composition document.
///
/// Pure data: the external renderer registers it (id, dimensions, fps,
/// duration, parameter defaults) and drives [`crate::Evaluator`] per frame.
/// Serializable to/from JSON via Serde.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PromoComposition {
    /// Timeline frame rate.
    pub fps: Fps,
    /// Output canvas dimensions.
    pub canvas: Canvas,
    /// Total composition duration in frames (caller-supplied, verified
    /// against the configured scene lengths at validation time).
    pub duration: FrameIndex,
    /// Global deterministic seed for particle generation.
    #[serde(default)]
    pub seed: u64,
    /// Top-level content parameters.
    #[serde(default)]
    pub params: PromoParams,
    /// Scene and envelope timing.
    #[serde(default)]
    pub timing: SceneTiming,
    /// Asset table keyed by stable user-facing keys.
    pub assets: BTreeMap<String, Asset>,
}

/// Top-level content parameters with literal defaults.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PromoParams {
    /// Brand name shown in the intro.
    #[serde(default = "default_brand")]
    pub brand: String,
    /// Tagline revealed after the brand.
    #[serde(default = "default_tagline")]
    pub tagline: String,
    /// Showcase feature list; one timed slot per entry.
    #[serde(default = "default_features")]
    pub features: Vec<Feature>,
    /// Outro call-to-action text.
    #[serde(default = "default_call_to_action")]
    pub call_to_action: String,
    /// Asset key of the intro logo image.
    #[serde(default = "default_logo_asset")]
    pub logo_asset: String,
    /// Asset key of the background audio track.
    #[serde(default = "default_audio_asset")]
    pub audio_asset: String,
}

/// One showcase entry: a title and its supporting subtitle.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Feature {
    /// Slot headline.
    pub title: String,
    /// Slot supporting line.
    pub subtitle: String,
}

fn default_brand() -> String {
    "Northwind".to_string()
}

fn default_tagline() -> String {
    "Ship ideas, not busywork".to_string()
}

fn default_call_to_action() -> String {
    "Start your free trial".to_string()
}

fn default_logo_asset() -> String {
    "logo".to_string()
}

fn default_audio_asset() -> String {
    "soundtrack".to_string()
}

fn default_features() -> Vec<Feature> {
    [
        ("Plan together", "Shared boards that stay in sync"),
        ("Automate the routine", "Rules that file, tag and assign for you"),
        ("See the whole picture", "Live dashboards across every project"),
        ("Integrate everything", "Connects to the tools you already use"),
        ("Scale with confidence", "From two seats to two thousand"),
    ]
    .into_iter()
    .map(|(title, subtitle)| Feature {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
    })
    .collect()
}

impl Default for PromoParams {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            tagline: default_tagline(),
            features: default_features(),
            call_to_action: default_call_to_action(),
            logo_asset: default_logo_asset(),
            audio_asset: default_audio_asset(),
        }
    }
}

/// Scene durations, transition overlap and ambient envelopes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneTiming {
    /// Intro scene length in frames.
    #[serde(default = "default_intro_frames")]
    pub intro_frames: u64,
    /// Frames per showcase feature slot (6.8 s at 30 fps by default).
    #[serde(default = "default_slot_frames")]
    pub slot_frames: u64,
    /// Outro scene length in frames.
    #[serde(default = "default_outro_frames")]
    pub outro_frames: u64,
    /// Cross-fade overlap between adjacent scenes, in frames.
    #[serde(default = "default_transition_frames")]
    pub transition_frames: u64,
    /// Entrance spring shared by the scene composers.
    #[serde(default)]
    pub entrance: SpringConfig,
    /// Background audio fade envelope.
    #[serde(default)]
    pub audio: AudioFade,
    /// Number of overlay particles.
    #[serde(default = "default_particle_count")]
    pub particle_count: u32,
}

fn default_intro_frames() -> u64 {
    90
}

fn default_slot_frames() -> u64 {
    204
}

fn default_outro_frames() -> u64 {
    150
}

fn default_transition_frames() -> u64 {
    15
}

fn default_particle_count() -> u32 {
    40
}

impl Default for SceneTiming {
    fn default() -> Self {
        Self {
            intro_frames: default_intro_frames(),
            slot_frames: default_slot_frames(),
            outro_frames: default_outro_frames(),
            transition_frames: default_transition_frames(),
            entrance: SpringConfig::default(),
            audio: AudioFade::default(),
            particle_count: default_particle_count(),
        }
    }
}

impl SceneTiming {
    /// Showcase scene length for a given feature count.
    pub fn showcase_frames(&self, feature_count: usize) -> u64 {
        self.slot_frames.saturating_mul(feature_count as u64)
    }

    /// Composed total: scene durations minus the two transition overlaps.
    pub fn total_frames(&self, feature_count: usize) -> u64 {
        self.intro_frames + self.showcase_frames(feature_count) + self.outro_frames
            - 2 * self.transition_frames
    }
}

/// An asset referenced by the composition.
///
/// Asset loading itself belongs to the external renderer; this layer only
/// checks that references resolve.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum Asset {
    /// Raster image asset.
    Image(ImageAsset),
    /// Audio file asset.
    Audio(AudioAsset),
}

/// Raster image asset configuration.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ImageAsset {
    /// Relative path to the image file.
    pub source: String,
}

/// Audio file asset configuration.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct AudioAsset {
    /// Relative path to the audio file.
    pub source: String,
}

impl PromoComposition {
    /// Default composition: 1920x1080 at 30 fps with the literal parameter
    /// defaults and a duration derived from the default timing.
    pub fn with_defaults() -> PromoResult<Self> {
        let params = PromoParams::default();
        let timing = SceneTiming::default();
        let duration = FrameIndex(timing.total_frames(params.features.len()));

        let mut assets = BTreeMap::new();
        assets.insert(
            params.logo_asset.clone(),
            Asset::Image(ImageAsset {
                source: "assets/logo.png".to_string(),
            }),
        );
        assets.insert(
            params.audio_asset.clone(),
            Asset::Audio(AudioAsset {
                source: "assets/theme.mp3".to_string(),
            }),
        );

        let comp = Self {
            fps: Fps::new(30, 1)?,
            canvas: Canvas {
                width: 1920,
                height: 1080,
            },
            duration,
            seed: 0,
            params,
            timing,
            assets,
        };
        comp.validate()?;
        Ok(comp)
    }

    /// Parse a composition from JSON text.
    pub fn from_json_str(json: &str) -> PromoResult<Self> {
        let comp: Self = serde_json::from_str(json)
            .map_err(|e| PromoError::serde(format!("composition JSON: {e}")))?;
        comp.validate()?;
        Ok(comp)
    }

    /// Load and validate a composition from a JSON file.
    pub fn from_path(path: &Path) -> PromoResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            PromoError::asset(format!("composition file '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    /// Validate composition invariants and asset references.
    pub fn validate(&self) -> PromoResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(PromoError::configuration(
                "canvas width/height must be > 0",
            ));
        }
        if self.duration.0 == 0 {
            return Err(PromoError::configuration("duration must be > 0 frames"));
        }

        if self.params.brand.trim().is_empty() {
            return Err(PromoError::configuration("brand must be non-empty"));
        }
        if self.params.features.is_empty() {
            return Err(PromoError::configuration(
                "features must have at least one entry",
            ));
        }
        for (i, feature) in self.params.features.iter().enumerate() {
            if feature.title.trim().is_empty() {
                return Err(PromoError::configuration(format!(
                    "feature {i} title must be non-empty"
                )));
            }
        }

        let t = &self.timing;
        for (name, frames) in [
            ("intro_frames", t.intro_frames),
            ("slot_frames", t.slot_frames),
            ("outro_frames", t.outro_frames),
        ] {
            if frames == 0 {
                return Err(PromoError::configuration(format!(
                    "timing {name} must be > 0"
                )));
            }
        }
        let showcase = t.showcase_frames(self.params.features.len());
        for (name, scene_len) in [
            ("intro", t.intro_frames),
            ("showcase", showcase),
            ("outro", t.outro_frames),
        ] {
            if scene_len < t.transition_frames {
                return Err(PromoError::configuration(format!(
                    "{name} scene is shorter than the transition overlap"
                )));
            }
        }
        // Total duration is caller-supplied, never derived; verify it.
        let expected = t.total_frames(self.params.features.len());
        if self.duration.0 != expected {
            return Err(PromoError::configuration(format!(
                "duration is {} frames but the configured scenes compose to {expected}",
                self.duration.0
            )));
        }

        t.entrance.validate()?;
        t.audio.validate(self.duration.0)?;

        for (key, name) in [
            (&self.params.logo_asset, "logo_asset"),
            (&self.params.audio_asset, "audio_asset"),
        ] {
            if !self.assets.contains_key(key) {
                return Err(PromoError::asset(format!(
                    "{name} references missing asset key '{key}'"
                )));
            }
        }
        for (key, asset) in &self.assets {
            if key.trim().is_empty() {
                return Err(PromoError::configuration("asset key must be non-empty"));
            }
            let source = match asset {
                Asset::Image(a) => &a.source,
                Asset::Audio(a) => &a.source,
            };
            validate_rel_source(source, key)?;
        }

        Ok(())
    }
}

fn validate_rel_source(source: &str, key: &str) -> PromoResult<()> {
    if source.trim().is_empty() {
        return Err(PromoError::configuration(format!(
            "asset '{key}' source must be non-empty"
        )));
    }
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(PromoError::configuration(format!(
            "asset '{key}' source must be a relative path"
        )));
    }
    for part in s.split('/') {
        if part == ".." {
            return Err(PromoError::configuration(format!(
                "asset '{key}' source must not contain '..'"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
