//! Theme toggle and back/forward-cache resync.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;

use crate::config::PageConfig;
use crate::consts::{ATTR_DARK_COMPAT, ATTR_THEME, THEME_TOGGLE_ID};
use crate::error::ClientError;
use crate::state::theme::{ThemeMode, ThemeState, ThemeSurface};
use crate::util::dom;
use crate::util::storage::LocalStore;

/// `<html>` attributes plus the optional toggle button.
pub struct DocumentSurface {
    root: Element,
    toggle: Option<Element>,
}

impl ThemeSurface for DocumentSurface {
    fn root_mode(&self) -> Option<ThemeMode> {
        self.root.get_attribute(ATTR_THEME).as_deref().and_then(ThemeMode::parse)
    }

    fn set_root_mode(&mut self, mode: ThemeMode) {
        dom::set_attribute(&self.root, ATTR_THEME, mode.as_str());
    }

    fn set_dark_compat(&mut self, enabled: bool) {
        if enabled {
            dom::set_attribute(&self.root, ATTR_DARK_COMPAT, "dark");
        } else {
            dom::set_flag_attribute(&self.root, ATTR_DARK_COMPAT, false);
        }
    }

    fn set_toggle(&mut self, pressed: bool, label: &str) {
        let Some(toggle) = &self.toggle else {
            return;
        };
        dom::set_attribute(toggle, "aria-pressed", if pressed { "true" } else { "false" });
        dom::set_attribute(toggle, "aria-label", label);
        dom::set_attribute(toggle, "title", label);
    }
}

/// Apply the stored theme, then wire the toggle and resync listeners.
///
/// # Errors
///
/// Returns [`ClientError::MissingElement`] without a root element, or an
/// error when a listener cannot be attached.
pub fn mount(config: &PageConfig) -> Result<(), ClientError> {
    let window = dom::window()?;
    let document = dom::document()?;
    let root = document.document_element().ok_or(ClientError::MissingElement("html"))?;
    let toggle = document.get_element_by_id(THEME_TOGGLE_ID);

    let surface = DocumentSurface { root, toggle: toggle.clone() };
    let state = Rc::new(RefCell::new(ThemeState::mount(LocalStore::new(), surface, &config.storage_key)));

    match toggle {
        Some(toggle) => {
            let state = Rc::clone(&state);
            dom::listen(&toggle, "click", move |_| {
                let mode = state.borrow_mut().toggle();
                log::debug!("theme switched to {}", mode.as_str());
            })?;
        }
        None => log::debug!("#{THEME_TOGGLE_ID} absent; theme applied without toggle"),
    }

    for event in ["pageshow", "popstate"] {
        let state = Rc::clone(&state);
        dom::listen(&window, event, move |_| {
            if let Some(mode) = state.borrow_mut().resync() {
                log::debug!("theme resynced to {} on {event}", mode.as_str());
            }
        })?;
    }
    Ok(())
}
