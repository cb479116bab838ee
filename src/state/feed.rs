//! Category filter + "load more" pagination session.
//!
//! DESIGN
//! ======
//! All pagination state lives in one `FeedSession` value owned by the feed
//! controller. Issuing a request hands out a [`RequestToken`]; only the
//! response carrying the current in-flight token is applied, so a category
//! switch supersedes whatever was still loading and late responses from the
//! old category are dropped.
//!
//! A load-more issued while any request is in flight is refused, so the same
//! offset is never requested twice. The offset only advances once a page
//! has actually been merged into the container.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::net::types::{MergeMode, PageRequest, PageResponse, RequestToken};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedSession {
    current_category: u32,
    current_offset: u32,
    page_size: u32,
    generation: u64,
    next_seq: u64,
    in_flight: Option<RequestToken>,
    load_more_visible: bool,
    /// Category and offset the container still shows while a switch is pending.
    shown: Option<(u32, u32)>,
}

impl FeedSession {
    /// Fresh session on the "all" category with nothing loaded.
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self::resume(0, 0, page_size, false)
    }

    /// Session picking up a server-rendered first page.
    ///
    /// `rendered` is how many posts are already in the container.
    #[must_use]
    pub fn resume(category: u32, rendered: u32, page_size: u32, has_more: bool) -> Self {
        Self {
            current_category: category,
            current_offset: rendered,
            page_size: page_size.max(1),
            generation: 0,
            next_seq: 0,
            in_flight: None,
            load_more_visible: has_more,
            shown: None,
        }
    }

    #[must_use]
    pub fn current_category(&self) -> u32 {
        self.current_category
    }

    #[must_use]
    pub fn current_offset(&self) -> u32 {
        self.current_offset
    }

    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn in_flight(&self) -> Option<RequestToken> {
        self.in_flight
    }

    /// Whether the load-more control should be shown: the `has_more` of the
    /// last applied page.
    #[must_use]
    pub fn load_more_visible(&self) -> bool {
        self.load_more_visible
    }

    /// Whether a response for `token` would still be applied.
    #[must_use]
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.in_flight == Some(token)
    }

    /// Switch to `category` and request its first page.
    ///
    /// Supersedes any in-flight request.
    pub fn switch_category(&mut self, category: u32) -> PageRequest {
        if let Some(stale) = self.in_flight {
            log::debug!("category switch supersedes request seq={}", stale.seq);
        }
        if self.shown.is_none() {
            self.shown = Some((self.current_category, self.current_offset));
        }
        self.generation += 1;
        self.current_category = category;
        self.current_offset = 0;
        self.issue(MergeMode::Replace)
    }

    /// Request the page after the ones already shown.
    ///
    /// Returns `None` while another request is in flight.
    pub fn load_more(&mut self) -> Option<PageRequest> {
        if self.in_flight.is_some() {
            return None;
        }
        Some(self.issue(MergeMode::Append))
    }

    /// Accept a response for `request`, merging it through `merge`.
    ///
    /// `merge` runs only for the current in-flight request and receives the
    /// merge mode. The session commits (offset, `has_more`) only after
    /// `merge` succeeds; on failure the request is rolled back as by
    /// [`FeedSession::fail`]. Returns `Ok(None)` without calling `merge`
    /// when the request was superseded, `Ok(Some(mode))` once applied.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `merge`.
    pub fn accept<E>(
        &mut self,
        request: &PageRequest,
        response: &PageResponse,
        merge: impl FnOnce(MergeMode) -> Result<(), E>,
    ) -> Result<Option<MergeMode>, E> {
        if !self.is_current(request.token) {
            log::debug!(
                "dropping stale page: category={} offset={} seq={}",
                request.category,
                request.offset,
                request.token.seq
            );
            return Ok(None);
        }
        if let Err(err) = merge(request.mode) {
            self.fail(request);
            return Err(err);
        }
        Ok(self.complete(request, response))
    }

    fn complete(&mut self, request: &PageRequest, response: &PageResponse) -> Option<MergeMode> {
        if !self.is_current(request.token) {
            return None;
        }
        self.in_flight = None;
        self.shown = None;
        self.current_offset = self.current_offset.max(request.offset.saturating_add(request.limit));
        self.load_more_visible = response.has_more;
        Some(request.mode)
    }

    /// Forget a failed request so the user can retry.
    ///
    /// A failed category switch leaves the old posts on screen, so the
    /// category and offset they belong to are restored.
    /// Returns `false` when the request had already been superseded.
    pub fn fail(&mut self, request: &PageRequest) -> bool {
        if !self.is_current(request.token) {
            return false;
        }
        self.in_flight = None;
        if let Some((category, offset)) = self.shown.take() {
            self.current_category = category;
            self.current_offset = offset;
        }
        true
    }

    fn issue(&mut self, mode: MergeMode) -> PageRequest {
        self.next_seq += 1;
        let token = RequestToken { generation: self.generation, seq: self.next_seq };
        self.in_flight = Some(token);
        PageRequest {
            token,
            category: self.current_category,
            offset: self.current_offset,
            limit: self.page_size,
            mode,
        }
    }
}
