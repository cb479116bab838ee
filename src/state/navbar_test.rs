#![allow(clippy::float_cmp)]

use super::*;

fn run(state: &mut NavbarState, samples: &[f64]) {
    for &y in samples {
        let _ = state.on_scroll(y);
    }
}

#[test]
fn starts_unfixed_and_hidden() {
    let state = NavbarState::new(80.0);
    assert_eq!(state.classes(), NavbarClasses::default());
}

#[test]
fn scrolling_down_within_header_does_not_fix() {
    let mut state = NavbarState::new(80.0);
    run(&mut state, &[10.0, 40.0, 80.0]);
    assert!(!state.is_fixed);
    assert!(!state.is_visible);
}

#[test]
fn scrolling_down_past_header_fixes_and_hides() {
    let mut state = NavbarState::new(80.0);
    let changed = state.on_scroll(120.0);
    assert_eq!(changed, Some(NavbarClasses { fixed: true, visible: false }));
}

#[test]
fn scrolling_up_while_fixed_shows_navbar() {
    let mut state = NavbarState::new(80.0);
    run(&mut state, &[300.0]);
    let changed = state.on_scroll(250.0);
    assert_eq!(changed, Some(NavbarClasses { fixed: true, visible: true }));
}

#[test]
fn scrolling_down_again_hides_but_stays_fixed() {
    let mut state = NavbarState::new(80.0);
    run(&mut state, &[300.0, 250.0, 260.0]);
    assert!(state.is_fixed);
    assert!(!state.is_visible);
}

#[test]
fn reaching_top_while_scrolling_up_releases_navbar() {
    let mut state = NavbarState::new(80.0);
    run(&mut state, &[300.0, 200.0, 0.0]);
    assert_eq!(state.classes(), NavbarClasses::default());
}

#[test]
fn scrolling_up_before_ever_fixing_stays_released() {
    let mut state = NavbarState::new(80.0);
    run(&mut state, &[50.0, 20.0]);
    assert_eq!(state.classes(), NavbarClasses::default());
}

#[test]
fn negative_offsets_clamp_to_zero() {
    let mut state = NavbarState::new(80.0);
    run(&mut state, &[300.0, -40.0]);
    assert_eq!(state.last_scroll_y, 0.0);
    assert_eq!(state.classes(), NavbarClasses::default());
}

#[test]
fn unchanged_flags_report_none() {
    let mut state = NavbarState::new(80.0);
    assert_eq!(state.on_scroll(10.0), None);
    assert_eq!(state.on_scroll(20.0), None);
    assert!(state.on_scroll(100.0).is_some());
    assert_eq!(state.on_scroll(150.0), None);
}

#[test]
fn never_visible_without_fixed_over_mixed_sequence() {
    let mut state = NavbarState::new(64.0);
    let samples = [
        0.0, 30.0, 70.0, 65.0, 200.0, 180.0, 0.0, 500.0, 400.0, 410.0, 30.0, 10.0, 90.0, 1.0, 0.0,
    ];
    for y in samples {
        let _ = state.on_scroll(y);
        assert!(!state.is_visible || state.is_fixed, "visible without fixed at y={y}");
    }
}

#[test]
fn fixed_tracks_last_downward_crossing_of_header() {
    let mut state = NavbarState::new(100.0);
    let samples = [50.0, 150.0, 120.0, 0.0, 60.0, 90.0, 101.0];
    let mut expected_fixed = false;
    let mut last = 0.0_f64;
    for y in samples {
        let _ = state.on_scroll(y);
        if y < last {
            expected_fixed = expected_fixed && y > 0.0;
        } else if y > 100.0 {
            expected_fixed = true;
        }
        last = y;
        assert_eq!(state.is_fixed, expected_fixed, "mismatch at y={y}");
    }
    assert!(state.is_fixed);
}
