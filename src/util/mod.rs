//! Utility helpers shared across controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, media
//! queries, element lookup) from controller logic to improve reuse and
//! testability.

#[cfg(feature = "hydrate")]
pub mod dom;
pub mod motion;
pub mod storage;
