// Host-side tests for mode identity and the selector.

use avatar_core::{AvatarError, Mode, ModeSelector};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn slugs_round_trip_and_are_unique() {
    for (i, mode) in Mode::ALL.into_iter().enumerate() {
        assert_eq!(mode.slug().parse::<Mode>(), Ok(mode));
        assert_eq!(mode.index(), i);
        assert_eq!(Mode::from_index(i), Ok(mode));
        assert_eq!(mode.to_string(), mode.slug());
    }
    assert_eq!(Mode::default(), Mode::SphereScan);
    assert_eq!(Mode::ALL[1], Mode::Eye);
}

#[test]
fn unknown_slug_and_index_are_errors() {
    assert_eq!(
        "hex-vision".parse::<Mode>(),
        Err(AvatarError::UnknownMode("hex-vision".into()))
    );
    assert!(matches!(
        Mode::from_index(10),
        Err(AvatarError::IndexOutOfRange { index: 10, count: 10 })
    ));
}

#[test]
fn only_the_eye_is_not_particle_based() {
    let non: Vec<_> = Mode::ALL
        .into_iter()
        .filter(|m| !m.is_particle_based())
        .collect();
    assert_eq!(non, vec![Mode::Eye]);
}

#[test]
fn selector_wraps_in_both_directions() {
    let mut sel = ModeSelector::new();
    assert_eq!(sel.previous(), Mode::CrystallineCubeRefraction);
    assert_eq!(sel.next(), Mode::SphereScan);
    assert_eq!(sel.next(), Mode::Eye);
}

#[test]
fn selector_ignores_out_of_range_and_notifies_changes_only() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut sel = ModeSelector::with_mode(Mode::SonarSweep);
    let sink = seen.clone();
    sel.subscribe(move |m| sink.borrow_mut().push(m));

    assert!(!sel.set_index(42));
    assert!(!sel.set(Mode::SonarSweep));
    assert!(sel.set(Mode::HelixScanner));
    sel.next();
    assert_eq!(sel.index(), 5);
    assert_eq!(
        *seen.borrow(),
        vec![Mode::HelixScanner, Mode::InterconnectingWaves]
    );
}
