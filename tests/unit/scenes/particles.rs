use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn same_index_yields_bit_identical_attributes() {
    let a = ParticleField::new(16, 42);
    let b = ParticleField::new(16, 42);
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn attributes_are_decorrelated_across_indices_and_seeds() {
    let field = ParticleField::new(8, 42);
    let p0 = field.particles()[0];
    let p1 = field.particles()[1];
    assert_ne!(p0.pos, p1.pos);
    assert_ne!(p0.size, p1.size);

    let other = ParticleField::new(8, 43);
    assert_ne!(p0.pos, other.particles()[0].pos);
}

#[test]
fn attributes_stay_in_their_bands() {
    for p in ParticleField::new(64, 7).particles() {
        assert!((0.0..1.0).contains(&p.pos.x));
        assert!((0.0..1.0).contains(&p.pos.y));
        assert!((1.5..4.5).contains(&p.size));
        assert!((0.02..0.08).contains(&p.speed));
        assert!(p.delay_frames < 90);
    }
}

#[test]
fn hidden_before_its_delay() {
    let p = ParticleField::new(64, 7)
        .particles()
        .iter()
        .copied()
        .find(|p| p.delay_frames > 0)
        .expect("some particle with a delay");
    let style = particle_style(&p, FrameIndex(p.delay_frames - 1), fps30()).unwrap();
    assert_eq!(style.opacity, 0.0);
    let style = particle_style(&p, FrameIndex(p.delay_frames + 30), fps30()).unwrap();
    assert!(style.opacity > 0.0);
}

#[test]
fn drift_wraps_in_normalized_coordinates() {
    let field = ParticleField::new(32, 11);
    for p in field.particles() {
        for f in [0u64, 100, 1000, 5000] {
            let s = particle_style(p, FrameIndex(f), fps30()).unwrap();
            assert!((0.0..1.0).contains(&s.y), "frame {f}: y={}", s.y);
        }
    }
}

#[test]
fn twinkle_opacity_stays_in_band() {
    let field = ParticleField::new(16, 3);
    for f in 0..300 {
        for s in field.styles(FrameIndex(f), fps30()).unwrap() {
            assert!(s.opacity == 0.0 || (0.15..=0.9).contains(&s.opacity));
        }
    }
}

#[test]
fn per_frame_styles_are_reproducible() {
    let field = ParticleField::new(16, 3);
    let a = field.styles(FrameIndex(123), fps30()).unwrap();
    let b = field.styles(FrameIndex(123), fps30()).unwrap();
    assert_eq!(a, b);
}
