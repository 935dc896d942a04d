use folio_core::{CardRotation, Tuning};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn sampled_angles_stay_in_range() {
    let tuning = Tuning::default();
    let range = tuning.card_rotation_range_deg;
    let mut rng = StdRng::seed_from_u64(0x00C0_FFEE);
    for _ in 0..1000 {
        let mut rotation = CardRotation::unrealized();
        let angle = rotation.realize_with(|| rng.random::<f64>(), range);
        assert!(angle >= -range && angle < range, "angle {angle} out of range");
    }
}

#[test]
fn angle_is_fixed_once_realized() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut rotation = CardRotation::unrealized();
    let first = rotation.realize_with(|| rng.random::<f64>(), 7.5);
    for _ in 0..10 {
        let again = rotation.realize_with(|| rng.random::<f64>(), 7.5);
        assert_eq!(again, first);
    }
    assert_eq!(rotation.angle(), Some(first));
}

#[test]
fn active_scroll_flattens_exactly_while_set() {
    let mut rotation = CardRotation::unrealized();
    rotation.realize_with(|| 0.1, 7.5);
    let angle = rotation.angle().expect("realized");
    assert_ne!(angle, 0.0);
    for active in [true, false, true, false] {
        let expected = if active { 0.0 } else { angle };
        assert_eq!(rotation.displayed(active), expected);
    }
}
