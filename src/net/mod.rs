//! Networking for the post feed.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the filter endpoint's request/response schema and `api`
//! performs the HTTP call in the browser build.

pub mod api;
pub mod types;
