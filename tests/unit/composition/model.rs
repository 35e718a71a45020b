use super::*;
use crate::foundation::error::PromoError;

#[test]
fn default_composition_validates() {
    let comp = PromoComposition::with_defaults().unwrap();
    assert_eq!(comp.fps.as_f64(), 30.0);
    // 90 + 5*204 + 150 - 2*15
    assert_eq!(comp.duration.0, 1230);
}

#[test]
fn duration_mismatch_is_a_configuration_error() {
    let mut comp = PromoComposition::with_defaults().unwrap();
    comp.duration.0 += 1;
    match comp.validate() {
        Err(PromoError::Configuration(msg)) => assert!(msg.contains("compose to")),
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn missing_asset_reference_is_an_asset_error() {
    let mut comp = PromoComposition::with_defaults().unwrap();
    comp.params.logo_asset = "nope".to_string();
    assert!(matches!(comp.validate(), Err(PromoError::Asset(_))));
}

#[test]
fn absolute_asset_paths_are_rejected() {
    let mut comp = PromoComposition::with_defaults().unwrap();
    comp.assets.insert(
        "bad".to_string(),
        Asset::Image(ImageAsset {
            source: "/etc/passwd".to_string(),
        }),
    );
    assert!(comp.validate().is_err());
}

#[test]
fn empty_feature_list_is_rejected() {
    let mut comp = PromoComposition::with_defaults().unwrap();
    comp.params.features.clear();
    assert!(comp.validate().is_err());
}

#[test]
fn scene_shorter_than_transition_is_rejected() {
    let mut comp = PromoComposition::with_defaults().unwrap();
    comp.timing.transition_frames = comp.timing.intro_frames + 1;
    assert!(comp.validate().is_err());
}

#[test]
fn json_roundtrip_preserves_the_document() {
    let comp = PromoComposition::with_defaults().unwrap();
    let json = serde_json::to_string(&comp).unwrap();
    let back = PromoComposition::from_json_str(&json).unwrap();
    assert_eq!(back.duration, comp.duration);
    assert_eq!(back.params.brand, comp.params.brand);
    assert_eq!(back.params.features.len(), comp.params.features.len());
    assert_eq!(back.timing, comp.timing);
}

#[test]
fn params_fill_in_from_empty_json_object() {
    let json = r#"{
        "fps": {"num": 30, "den": 1},
        "canvas": {"width": 1280, "height": 720},
        "duration": 1230,
        "assets": {
            "logo": {"Image": {"source": "assets/logo.png"}},
            "soundtrack": {"Audio": {"source": "assets/theme.mp3"}}
        }
    }"#;
    let comp = PromoComposition::from_json_str(json).unwrap();
    assert_eq!(comp.params.brand, "Northwind");
    assert_eq!(comp.params.features.len(), 5);
    assert_eq!(comp.timing.slot_frames, 204);
}
