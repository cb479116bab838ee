//! Light/dark theme selection and persistence.
//!
//! The chosen mode is written to the preference store and mirrored onto the
//! page through a [`ThemeSurface`]. Browsers restore pages from the
//! back/forward cache with the DOM as it was, so `resync` rereads storage on
//! `pageshow`/`popstate` and reapplies when the two disagree.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: a store that rejects writes is logged and the
//! mode is still applied for the current page.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::storage::PreferenceStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything but `"light"`/`"dark"` is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Label for the toggle button: it describes the action, not the state.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }
}

/// Where the theme becomes visible: root attributes and the toggle button.
pub trait ThemeSurface {
    /// Mode currently reflected in the root `data-theme` attribute.
    fn root_mode(&self) -> Option<ThemeMode>;
    fn set_root_mode(&mut self, mode: ThemeMode);
    /// Add or remove the dark-mode compatibility attribute.
    fn set_dark_compat(&mut self, enabled: bool);
    fn set_toggle(&mut self, pressed: bool, label: &str);
}

pub struct ThemeState<S, D> {
    store: S,
    surface: D,
    key: String,
    mode: ThemeMode,
}

impl<S: PreferenceStore, D: ThemeSurface> ThemeState<S, D> {
    /// Build from the stored preference (default dark) without touching the page.
    pub fn new(store: S, surface: D, key: &str) -> Self {
        let mode = read_mode(&store, key);
        Self { store, surface, key: key.to_owned(), mode }
    }

    /// Build and immediately apply the stored preference.
    pub fn mount(store: S, surface: D, key: &str) -> Self {
        let mut state = Self::new(store, surface, key);
        state.apply(state.mode);
        state
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    #[must_use]
    pub fn surface(&self) -> &D {
        &self.surface
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply `mode` to the page and persist it.
    pub fn apply(&mut self, mode: ThemeMode) {
        self.mode = mode;
        self.surface.set_root_mode(mode);
        self.surface.set_dark_compat(mode == ThemeMode::Dark);
        self.surface.set_toggle(mode == ThemeMode::Dark, mode.toggle_label());
        if let Err(err) = self.store.set(&self.key, mode.as_str()) {
            log::warn!("theme not persisted: {err}");
        }
    }

    /// Flip the current mode. Returns the mode now applied.
    pub fn toggle(&mut self) -> ThemeMode {
        let next = self.mode.toggled();
        self.apply(next);
        next
    }

    /// Reread storage and reapply if memory or the page disagree with it.
    ///
    /// Returns the reapplied mode, or `None` when everything already matched.
    pub fn resync(&mut self) -> Option<ThemeMode> {
        let stored = read_mode(&self.store, &self.key);
        if stored == self.mode && self.surface.root_mode() == Some(stored) {
            return None;
        }
        log::debug!("theme resync: stored={} memory={}", stored.as_str(), self.mode.as_str());
        self.apply(stored);
        Some(stored)
    }
}

fn read_mode<S: PreferenceStore>(store: &S, key: &str) -> ThemeMode {
    match store.get(key) {
        Ok(Some(raw)) => ThemeMode::parse(&raw).unwrap_or_default(),
        Ok(None) => ThemeMode::default(),
        Err(err) => {
            log::warn!("theme preference unreadable: {err}");
            ThemeMode::default()
        }
    }
}
