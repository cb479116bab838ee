//! # wf-blog
//!
//! WebAssembly page script for the blog front end. The server renders every
//! page; this crate layers behavior on top of that markup:
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Browser-independent state for navbar, back-to-top, theme, feed, reveal |
//! | [`net`] | Filter endpoint wire types and HTTP fetch |
//! | [`config`] | Page configuration with optional in-page overrides |
//! | [`util`] | Storage, reduced-motion, and DOM helpers |
//! | `controllers` | DOM event wiring (`hydrate` only) |
//!
//! Everything outside `controllers` and `util::dom` builds and tests
//! natively; the `hydrate` feature pulls in `web-sys` and friends for the
//! browser build.

pub mod config;
pub mod consts;
#[cfg(feature = "hydrate")]
pub mod controllers;
pub mod error;
pub mod net;
pub mod state;
pub mod util;

/// Wasm entry point: install logging and mount the page controllers.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_err() {
        // A host page may have installed a logger already.
        log::debug!("console logger already initialised");
    }
    log::info!("wf-blog {} starting", env!("CARGO_PKG_VERSION"));
    controllers::mount_when_ready();
}
