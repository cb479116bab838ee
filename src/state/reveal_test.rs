#![allow(clippy::float_cmp)]

use super::*;

const STAGGER: Duration = Duration::from_millis(60);

// =============================================================
// Strategy
// =============================================================

#[test]
fn reduced_motion_forces_immediate() {
    assert_eq!(RevealStrategy::select(true, true), RevealStrategy::Immediate);
}

#[test]
fn missing_observer_forces_immediate() {
    assert_eq!(RevealStrategy::select(false, false), RevealStrategy::Immediate);
}

#[test]
fn observer_with_motion_reveals_on_visible() {
    assert_eq!(RevealStrategy::select(false, true), RevealStrategy::OnVisible);
}

#[test]
fn observer_counts_any_visible_pixel_of_the_full_viewport() {
    let options = ObserverOptions::default();
    assert_eq!(options.threshold, 0.0);
    assert!(!options.root_margin.contains('-'), "root must not be shrunk: {}", options.root_margin);
}

// =============================================================
// Stagger
// =============================================================

#[test]
fn first_item_has_no_delay() {
    assert_eq!(stagger_delay(0, STAGGER), Duration::ZERO);
}

#[test]
fn delay_grows_by_stagger_per_index() {
    assert_eq!(stagger_delay(1, STAGGER), Duration::from_millis(60));
    assert_eq!(stagger_delay(4, STAGGER), Duration::from_millis(240));
}

#[test]
fn schedule_keeps_order_and_bounds_each_delay() {
    let tolerance = Duration::from_millis(5);
    let planned = schedule(["a", "b", "c", "d", "e"], STAGGER);
    assert_eq!(planned.iter().map(|(k, _)| *k).collect::<Vec<_>>(), ["a", "b", "c", "d", "e"]);
    for (i, (_, delay)) in planned.iter().enumerate() {
        let floor = STAGGER * u32::try_from(i).unwrap();
        assert!(*delay >= floor);
        assert!(*delay <= floor + tolerance);
    }
}

#[test]
fn huge_index_saturates() {
    assert_eq!(stagger_delay(usize::MAX, Duration::from_secs(u64::MAX)), Duration::MAX);
}

// =============================================================
// VisibilityRegistry
// =============================================================

#[test]
fn registered_key_fires_once() {
    let mut registry = VisibilityRegistry::new(STAGGER);
    assert!(registry.register(7));
    assert_eq!(registry.notify_visible([7]), vec![(7, Duration::ZERO)]);
    assert!(registry.notify_visible([7]).is_empty());
    assert!(registry.register(7), "fired key is deregistered");
}

#[test]
fn duplicate_registration_is_reported() {
    let mut registry = VisibilityRegistry::new(STAGGER);
    assert!(registry.register("post-1"));
    assert!(!registry.register("post-1"));
    assert_eq!(registry.notify_visible(["post-1"]).len(), 1);
}

#[test]
fn unknown_keys_do_not_consume_stagger_slots() {
    let mut registry = VisibilityRegistry::new(STAGGER);
    registry.register(1);
    registry.register(3);
    let fired = registry.notify_visible([9, 1, 8, 3]);
    assert_eq!(fired, vec![(1, Duration::ZERO), (3, Duration::from_millis(60))]);
}

#[test]
fn stagger_restarts_for_each_batch() {
    let mut registry = VisibilityRegistry::new(STAGGER);
    for key in 0..4 {
        registry.register(key);
    }
    let first = registry.notify_visible([0, 1]);
    let second = registry.notify_visible([2, 3]);
    assert_eq!(first[1].1, Duration::from_millis(60));
    assert_eq!(second[0].1, Duration::ZERO);
    assert_eq!(second[1].1, Duration::from_millis(60));
}

#[test]
fn clear_deregisters_everything() {
    let mut registry = VisibilityRegistry::new(STAGGER);
    registry.register(1);
    registry.register(2);
    registry.clear();
    assert!(registry.notify_visible([1, 2]).is_empty());
}
