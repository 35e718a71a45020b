use super::*;
use crate::foundation::error::PromoError;

fn default_eval() -> Evaluator {
    Evaluator::new(&PromoComposition::with_defaults().unwrap()).unwrap()
}

#[test]
fn out_of_bounds_frame_is_an_evaluation_error() {
    let eval = default_eval();
    assert!(eval.eval_frame(FrameIndex(1229)).is_ok());
    assert!(matches!(
        eval.eval_frame(FrameIndex(1230)),
        Err(PromoError::Evaluation(_))
    ));
}

#[test]
fn background_and_particles_cover_every_scene() {
    let eval = default_eval();
    for f in [0u64, 80, 600, 1100, 1229] {
        let styles = eval.eval_frame(FrameIndex(f)).unwrap();
        assert_eq!(styles.particles.len(), 40);
        assert!(styles.background.intensity > 0.0);
    }
}

#[test]
fn scene_styles_follow_the_timeline() {
    let eval = default_eval();

    let start = eval.eval_frame(FrameIndex(0)).unwrap();
    assert!(start.intro.is_some());
    assert!(start.showcase.is_none());
    assert!(start.outro.is_none());

    let mid = eval.eval_frame(FrameIndex(600)).unwrap();
    assert!(mid.intro.is_none());
    assert!(mid.showcase.is_some());
    assert!(mid.outro.is_none());

    let end = eval.eval_frame(FrameIndex(1200)).unwrap();
    assert!(end.intro.is_none());
    assert!(end.showcase.is_none());
    assert!(end.outro.is_some());
}

#[test]
fn transition_window_carries_both_scenes() {
    let eval = default_eval();
    // Intro [0,90) overlaps showcase [75,1095) on [75,90).
    let styles = eval.eval_frame(FrameIndex(80)).unwrap();
    assert!(styles.intro.is_some());
    assert!(styles.showcase.is_some());
}

#[test]
fn audio_gain_endpoints_match_the_envelope() {
    let eval = default_eval();
    assert_eq!(eval.eval_frame(FrameIndex(0)).unwrap().audio_gain, 0.0);
    assert_eq!(eval.eval_frame(FrameIndex(30)).unwrap().audio_gain, 0.7);
    assert_eq!(eval.eval_frame(FrameIndex(1229)).unwrap().audio_gain, 0.0);
}

#[test]
fn repeated_and_out_of_order_queries_agree() {
    let eval = default_eval();
    let late = eval.eval_frame(FrameIndex(900)).unwrap();
    let early = eval.eval_frame(FrameIndex(10)).unwrap();
    let late_again = eval.eval_frame(FrameIndex(900)).unwrap();
    assert_eq!(late.particles, late_again.particles);
    assert_eq!(late.audio_gain, late_again.audio_gain);
    assert_eq!(early.frame, FrameIndex(10));
}

#[test]
fn invalid_composition_is_rejected_at_construction() {
    let mut comp = PromoComposition::with_defaults().unwrap();
    comp.duration.0 += 5;
    assert!(Evaluator::new(&comp).is_err());
}
