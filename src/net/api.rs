//! HTTP access to the post filter endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds: the call reports a transport error, since the endpoint is
//! only reachable from the page.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, and malformed bodies come back as
//! distinct [`ClientError`] variants; the feed controller logs them and
//! leaves the page as it was.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{PageRequest, PageResponse};
use crate::error::ClientError;

/// One-line log summary of a failed page request.
#[must_use]
pub fn failure_summary(request: &PageRequest, err: &ClientError) -> String {
    format!(
        "page request failed: category={} offset={} limit={}: {err}",
        request.category, request.offset, request.limit
    )
}

/// Fetch one page of rendered posts.
///
/// # Errors
///
/// Returns [`ClientError::Http`] on transport failure, [`ClientError::Status`]
/// on a non-2xx response, and [`ClientError::Decode`] when the body is not
/// `{html, has_more}`.
pub async fn fetch_page(endpoint: &str, request: &PageRequest) -> Result<PageResponse, ClientError> {
    #[cfg(feature = "hydrate")]
    {
        let url = request.url(endpoint);
        log::debug!("GET {url}");
        let resp = gloo_net::http::Request::get(&url)
            .header("Accept", "application/json")
            .header("X-Requested-With", "XMLHttpRequest")
            .send()
            .await?;
        if !resp.ok() {
            return Err(ClientError::Status(resp.status()));
        }
        Ok(resp.json::<PageResponse>().await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, request);
        Err(ClientError::Http("not available outside the browser".to_owned()))
    }
}
