//! `#backToTop` visibility and click-to-scroll.

use web_sys::{ScrollToOptions, Window};

use crate::config::PageConfig;
use crate::consts::{BACK_TO_TOP_ID, CLASS_VISIBLE};
use crate::error::ClientError;
use crate::state::back_to_top::{BackToTopState, ScrollBehavior};
use crate::util::{dom, motion};

/// Wire visibility and click handling. No-op without `#backToTop`.
///
/// # Errors
///
/// Returns an error when the window or document is unavailable or a
/// listener cannot be attached.
pub fn mount(config: &PageConfig) -> Result<(), ClientError> {
    let window = dom::window()?;
    let Some(button) = dom::document()?.get_element_by_id(BACK_TO_TOP_ID) else {
        log::debug!("#{BACK_TO_TOP_ID} absent; back-to-top controller skipped");
        return Ok(());
    };

    let mut state = BackToTopState::new(config.back_to_top_threshold, window.scroll_y().unwrap_or(0.0));
    dom::set_class(&button, CLASS_VISIBLE, false);

    let win = window.clone();
    let target = button.clone();
    dom::listen_passive(&window, "scroll", move |_| {
        if let Some(visible) = state.on_scroll(win.scroll_y().unwrap_or(0.0)) {
            dom::set_class(&target, CLASS_VISIBLE, visible);
        }
    })?;

    dom::listen(&button, "click", move |event| {
        event.prevent_default();
        scroll_to_top(&window);
    })
}

fn scroll_to_top(window: &Window) {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(match ScrollBehavior::for_motion(motion::prefers_reduced_motion()) {
        ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
    });
    window.scroll_to_with_scroll_to_options(&options);
}
