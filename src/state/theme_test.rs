use super::*;
use crate::util::storage::{MemoryStore, PreferenceStore};

const KEY: &str = "wf-theme";

// =============================================================
// Helpers
// =============================================================

#[derive(Debug, Default)]
struct FakeSurface {
    root: Option<ThemeMode>,
    dark_compat: bool,
    toggle_pressed: bool,
    toggle_label: String,
}

impl ThemeSurface for FakeSurface {
    fn root_mode(&self) -> Option<ThemeMode> {
        self.root
    }

    fn set_root_mode(&mut self, mode: ThemeMode) {
        self.root = Some(mode);
    }

    fn set_dark_compat(&mut self, enabled: bool) {
        self.dark_compat = enabled;
    }

    fn set_toggle(&mut self, pressed: bool, label: &str) {
        self.toggle_pressed = pressed;
        label.clone_into(&mut self.toggle_label);
    }
}

fn stored(state: &ThemeState<MemoryStore, FakeSurface>) -> Option<String> {
    state.store().get(KEY).unwrap()
}

// =============================================================
// ThemeMode
// =============================================================

#[test]
fn mode_defaults_to_dark() {
    assert_eq!(ThemeMode::default(), ThemeMode::Dark);
}

#[test]
fn mode_parse_accepts_known_values_only() {
    assert_eq!(ThemeMode::parse("light"), Some(ThemeMode::Light));
    assert_eq!(ThemeMode::parse(" dark "), Some(ThemeMode::Dark));
    assert_eq!(ThemeMode::parse("sepia"), None);
    assert_eq!(ThemeMode::parse(""), None);
}

#[test]
fn toggle_label_describes_next_action() {
    assert_eq!(ThemeMode::Dark.toggle_label(), "Switch to light mode");
    assert_eq!(ThemeMode::Light.toggle_label(), "Switch to dark mode");
}

// =============================================================
// ThemeState
// =============================================================

#[test]
fn mount_without_stored_value_applies_dark() {
    let state = ThemeState::mount(MemoryStore::new(), FakeSurface::default(), KEY);
    assert_eq!(state.mode(), ThemeMode::Dark);
    assert_eq!(state.surface().root, Some(ThemeMode::Dark));
    assert!(state.surface().dark_compat);
    assert!(state.surface().toggle_pressed);
    assert_eq!(stored(&state).as_deref(), Some("dark"));
}

#[test]
fn mount_uses_stored_light() {
    let store = MemoryStore::new().with_entry(KEY, "light");
    let state = ThemeState::mount(store, FakeSurface::default(), KEY);
    assert_eq!(state.mode(), ThemeMode::Light);
    assert!(!state.surface().dark_compat);
    assert_eq!(state.surface().toggle_label, "Switch to dark mode");
}

#[test]
fn garbage_stored_value_falls_back_to_dark() {
    let store = MemoryStore::new().with_entry(KEY, "purple");
    let state = ThemeState::new(store, FakeSurface::default(), KEY);
    assert_eq!(state.mode(), ThemeMode::Dark);
}

#[test]
fn dark_then_light_clears_dark_compat() {
    let mut state = ThemeState::new(MemoryStore::new(), FakeSurface::default(), KEY);
    state.apply(ThemeMode::Dark);
    assert!(state.surface().dark_compat);
    state.apply(ThemeMode::Light);
    assert!(!state.surface().dark_compat);
    assert!(!state.surface().toggle_pressed);
    assert_eq!(state.surface().root, Some(ThemeMode::Light));
}

#[test]
fn toggle_flips_and_persists() {
    let mut state = ThemeState::mount(MemoryStore::new(), FakeSurface::default(), KEY);
    assert_eq!(state.toggle(), ThemeMode::Light);
    assert_eq!(stored(&state).as_deref(), Some("light"));
    assert_eq!(state.toggle(), ThemeMode::Dark);
    assert_eq!(stored(&state).as_deref(), Some("dark"));
}

#[test]
fn resync_after_reload_applies_stored_light() {
    // A restored page still shows dark while storage says light.
    let store = MemoryStore::new().with_entry(KEY, "light");
    let surface = FakeSurface { root: Some(ThemeMode::Dark), dark_compat: true, ..FakeSurface::default() };
    let mut state = ThemeState::new(store, surface, KEY);
    assert_eq!(state.resync(), Some(ThemeMode::Light));
    assert_eq!(state.surface().root, Some(ThemeMode::Light));
    assert!(!state.surface().dark_compat);
}

#[test]
fn resync_is_noop_when_in_sync() {
    let mut state = ThemeState::mount(MemoryStore::new(), FakeSurface::default(), KEY);
    assert_eq!(state.resync(), None);
}

#[test]
fn resync_picks_up_write_from_another_tab() {
    let mut state = ThemeState::mount(MemoryStore::new(), FakeSurface::default(), KEY);
    state.store.set(KEY, "light").unwrap();
    assert_eq!(state.resync(), Some(ThemeMode::Light));
    assert_eq!(state.mode(), ThemeMode::Light);
}

#[test]
fn read_only_store_still_applies_mode() {
    let mut state = ThemeState::mount(MemoryStore::read_only(), FakeSurface::default(), KEY);
    assert_eq!(state.toggle(), ThemeMode::Light);
    assert_eq!(state.surface().root, Some(ThemeMode::Light));
    assert_eq!(stored(&state), None);
}
