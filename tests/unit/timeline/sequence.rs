use super::*;

fn default_scenes() -> Vec<(SceneKind, u64)> {
    vec![
        (SceneKind::Intro, 90),
        (SceneKind::Showcase, 1020),
        (SceneKind::Outro, 150),
    ]
}

#[test]
fn offsets_overlap_by_the_transition() {
    let tl = Timeline::new(&default_scenes(), 15, FrameIndex(1230)).unwrap();
    let spans = tl.spans();
    assert_eq!(spans[0].range, FrameRange::new(FrameIndex(0), FrameIndex(90)).unwrap());
    assert_eq!(
        spans[1].range,
        FrameRange::new(FrameIndex(75), FrameIndex(1095)).unwrap()
    );
    assert_eq!(
        spans[2].range,
        FrameRange::new(FrameIndex(1080), FrameIndex(1230)).unwrap()
    );
    assert_eq!(tl.total(), FrameIndex(1230));
}

#[test]
fn one_scene_active_outside_transitions() {
    let tl = Timeline::new(&default_scenes(), 15, FrameIndex(1230)).unwrap();
    let active = tl.active(FrameIndex(40));
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].kind, SceneKind::Intro);
    assert_eq!(active[0].local, FrameIndex(40));

    let active = tl.active(FrameIndex(500));
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].kind, SceneKind::Showcase);
    assert_eq!(active[0].local, FrameIndex(425));
}

#[test]
fn two_scenes_active_inside_a_transition() {
    let tl = Timeline::new(&default_scenes(), 15, FrameIndex(1230)).unwrap();
    for f in 75..90 {
        let active = tl.active(FrameIndex(f));
        assert_eq!(active.len(), 2, "frame {f}");
        assert_eq!(active[0].kind, SceneKind::Intro);
        assert_eq!(active[1].kind, SceneKind::Showcase);
    }
    // Window edges are exclusive on the outgoing side.
    assert_eq!(tl.active(FrameIndex(90)).len(), 1);
}

#[test]
fn every_frame_is_covered() {
    let tl = Timeline::new(&default_scenes(), 15, FrameIndex(1230)).unwrap();
    for f in 0..1230 {
        assert!(!tl.active(FrameIndex(f)).is_empty(), "frame {f} uncovered");
    }
    assert!(tl.active(FrameIndex(1230)).is_empty());
}

#[test]
fn overlap_windows_match_the_transition_length() {
    let tl = Timeline::new(&default_scenes(), 15, FrameIndex(1230)).unwrap();
    let windows = tl.overlap_windows();
    assert_eq!(windows.len(), 2);
    for w in windows {
        assert_eq!(w.len_frames(), 15);
    }
}

#[test]
fn zero_transition_means_disjoint_scenes() {
    let tl = Timeline::new(&default_scenes(), 0, FrameIndex(1260)).unwrap();
    assert!(tl.overlap_windows().is_empty());
    for f in 0..1260 {
        assert_eq!(tl.active(FrameIndex(f)).len(), 1);
    }
}

#[test]
fn total_mismatch_is_rejected() {
    let err = Timeline::new(&default_scenes(), 15, FrameIndex(1231));
    assert!(err.is_err());
}

#[test]
fn zero_duration_scene_is_rejected() {
    let scenes = vec![(SceneKind::Intro, 0), (SceneKind::Outro, 100)];
    assert!(Timeline::new(&scenes, 5, FrameIndex(95)).is_err());
}
