//! `#mainNav` scroll behavior.

use crate::consts::{CLASS_FIXED, CLASS_VISIBLE, MAIN_NAV_ID};
use crate::error::ClientError;
use crate::state::navbar::{NavbarClasses, NavbarState};
use crate::util::dom;

/// Track scrolling and toggle the navbar classes. No-op without `#mainNav`.
///
/// # Errors
///
/// Returns an error when the window or document is unavailable or the scroll
/// listener cannot be attached.
pub fn mount() -> Result<(), ClientError> {
    let window = dom::window()?;
    let Some(nav) = dom::document()?.get_element_by_id(MAIN_NAV_ID) else {
        log::debug!("#{MAIN_NAV_ID} absent; navbar controller skipped");
        return Ok(());
    };

    let mut state = NavbarState::new(f64::from(nav.client_height()));
    let win = window.clone();
    dom::listen_passive(&window, "scroll", move |_| {
        let y = win.page_y_offset().unwrap_or(0.0);
        if let Some(classes) = state.on_scroll(y) {
            apply(&nav, classes);
        }
    })
}

fn apply(nav: &web_sys::Element, classes: NavbarClasses) {
    dom::set_class(nav, CLASS_FIXED, classes.fixed);
    dom::set_class(nav, CLASS_VISIBLE, classes.visible);
}
