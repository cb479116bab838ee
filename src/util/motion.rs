//! Reduced-motion preference.
//!
//! Read fresh at every use: the OS setting can flip while the page is open.

/// Whether `(prefers-reduced-motion: reduce)` currently matches.
///
/// Always `false` outside the browser.
#[must_use]
pub fn prefers_reduced_motion() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(crate::consts::REDUCED_MOTION_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
