//! Wire types for `GET /filter-posts/{category}?offset={n}&limit={n}`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// Identifies one issued page request.
///
/// `generation` changes on every category switch; `seq` is unique per
/// request. A response is applied only if its token is still the session's
/// in-flight token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RequestToken {
    pub generation: u64,
    pub seq: u64,
}

/// How a fetched fragment lands in the post container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MergeMode {
    /// Replace the container contents (category switch).
    Replace,
    /// Append the fragment's children in order (load more).
    Append,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub token: RequestToken,
    /// Category id; `0` means all categories.
    pub category: u32,
    pub offset: u32,
    pub limit: u32,
    pub mode: MergeMode,
}

impl PageRequest {
    /// Request path relative to the page origin, e.g.
    /// `/filter-posts/3?offset=10&limit=10`.
    #[must_use]
    pub fn url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}?offset={}&limit={}",
            endpoint.trim_end_matches('/'),
            self.category,
            self.offset,
            self.limit
        )
    }
}

/// One page of rendered posts.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PageResponse {
    /// Trusted server-rendered HTML; inserted without sanitizing.
    pub html: String,
    #[serde(default)]
    pub has_more: bool,
}
