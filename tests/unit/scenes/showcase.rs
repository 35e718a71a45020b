use super::*;
use crate::animation::spring::SpringConfig;

const SLOT: u64 = 204;
const ITEMS: usize = 5;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

fn entrance() -> Spring {
    Spring::measure(fps30(), SpringConfig::default())
}

#[test]
fn windows_partition_the_scene() {
    // Exactly one of the 5 items reports visible for every frame of the
    // showcase (6.8 s/item at 30 fps => 204 frames/item).
    for f in 0..SLOT * ITEMS as u64 {
        let idx = visible_item(FrameIndex(f), SLOT, ITEMS).expect("uncovered frame");
        assert_eq!(idx, (f / SLOT) as usize);
    }
    assert_eq!(visible_item(FrameIndex(SLOT * ITEMS as u64), SLOT, ITEMS), None);
}

#[test]
fn window_boundaries_switch_items_exactly() {
    assert_eq!(visible_item(FrameIndex(SLOT - 1), SLOT, ITEMS), Some(0));
    assert_eq!(visible_item(FrameIndex(SLOT), SLOT, ITEMS), Some(1));
}

#[test]
fn zero_frame_slot_shows_nothing() {
    assert_eq!(visible_item(FrameIndex(0), 0, ITEMS), None);
    assert_eq!(visible_item(FrameIndex(17), 0, ITEMS), None);
}

#[test]
fn zero_slot_frames_is_a_configuration_error() {
    let err = showcase_style(FrameIndex(0), 0, ITEMS, fps30(), &entrance()).unwrap_err();
    assert!(matches!(err, PromoError::Configuration(_)));
}

#[test]
fn no_output_outside_the_scene() {
    let style = showcase_style(
        FrameIndex(SLOT * ITEMS as u64 + 7),
        SLOT,
        ITEMS,
        fps30(),
        &entrance(),
    )
    .unwrap();
    assert!(style.is_none());
}

#[test]
fn slot_entrance_restarts_per_item() {
    let spring = entrance();
    let first = showcase_style(FrameIndex(0), SLOT, ITEMS, fps30(), &spring)
        .unwrap()
        .unwrap();
    let third = showcase_style(FrameIndex(2 * SLOT), SLOT, ITEMS, fps30(), &spring)
        .unwrap()
        .unwrap();
    assert_eq!(first.title_opacity, third.title_opacity);
    assert_eq!(first.title_offset_y, third.title_offset_y);
    assert_eq!(third.item_index, 2);
}

#[test]
fn subtitle_lags_the_title() {
    let spring = entrance();
    let s = showcase_style(FrameIndex(8), SLOT, ITEMS, fps30(), &spring)
        .unwrap()
        .unwrap();
    assert!(s.title_opacity > 0.0);
    assert_eq!(s.subtitle_opacity, 0.0, "subtitle starts 12 frames late");
    let s = showcase_style(FrameIndex(80), SLOT, ITEMS, fps30(), &spring)
        .unwrap()
        .unwrap();
    assert!(s.subtitle_opacity > 0.9);
}

#[test]
fn slot_fades_out_at_its_end() {
    let spring = entrance();
    let s = showcase_style(FrameIndex(SLOT - 1), SLOT, ITEMS, fps30(), &spring)
        .unwrap()
        .unwrap();
    assert_eq!(s.slot_opacity, 0.0);
    let s = showcase_style(FrameIndex(SLOT / 2), SLOT, ITEMS, fps30(), &spring)
        .unwrap()
        .unwrap();
    assert_eq!(s.slot_opacity, 1.0);
}
