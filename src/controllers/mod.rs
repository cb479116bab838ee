//! Browser wiring for each page controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every controller follows the same shape: look up its elements, build its
//! state from `crate::state`, and attach listeners that feed DOM events into
//! that state and write the result back. A controller whose elements are
//! missing mounts nothing; one failing controller never blocks the others.

pub mod back_to_top;
pub mod feed;
pub mod navbar;
pub mod reveal;
pub mod theme;

use std::rc::Rc;

use crate::config::{self, PageConfig};
use crate::error::ClientError;
use crate::util::dom;

/// Mount all controllers now, or on `DOMContentLoaded` if the document is
/// still parsing.
pub fn mount_when_ready() {
    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            log::warn!("page controllers not mounted: {err}");
            return;
        }
    };

    if document.ready_state() != "loading" {
        mount_all(&config::load_from_page(&document));
        return;
    }

    let mut pending = Some(document.clone());
    let result = dom::listen(&document, "DOMContentLoaded", move |_| {
        if let Some(document) = pending.take() {
            mount_all(&config::load_from_page(&document));
        }
    });
    report("page", result);
}

fn mount_all(config: &PageConfig) {
    report("theme", theme::mount(config));
    report("navbar", navbar::mount());
    report("back-to-top", back_to_top::mount(config));
    let reveal = Rc::new(reveal::RevealController::new(config.stagger()));
    report("post feed", feed::mount(config, reveal));
}

fn report(name: &str, result: Result<(), ClientError>) {
    match result {
        Ok(()) => log::debug!("{name} controller ready"),
        Err(err) => log::warn!("{name} controller not mounted: {err}"),
    }
}
