//! Category filtering and "load more" for `#post-list`.
//!
//! Each request runs as an abortable task. Starting a new request aborts the
//! previous task, and `FeedSession` drops any response that slips through,
//! so a category switch always wins over older fetches.

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{AbortHandle, Aborted, abortable};
use web_sys::Element;

use super::reveal::RevealController;
use crate::config::PageConfig;
use crate::consts::{CATEGORY_BUTTON_SELECTOR, CLASS_ACTIVE, LOAD_MORE_ID, POST_LIST_ID, REVEAL_TARGET_SELECTOR};
use crate::error::ClientError;
use crate::net::api;
use crate::net::types::{MergeMode, PageRequest, PageResponse};
use crate::state::feed::FeedSession;
use crate::util::dom;

struct FeedController {
    session: RefCell<FeedSession>,
    container: Element,
    load_more: Option<Element>,
    buttons: Vec<Element>,
    reveal: Rc<RevealController>,
    endpoint: String,
    abort: RefCell<Option<AbortHandle>>,
}

/// Wire category buttons and load-more. No-op without `#post-list`.
///
/// # Errors
///
/// Returns an error when the document is unavailable, a selector query
/// fails, or a listener cannot be attached.
pub fn mount(config: &PageConfig, reveal: Rc<RevealController>) -> Result<(), ClientError> {
    let document = dom::document()?;
    let Some(container) = document.get_element_by_id(POST_LIST_ID) else {
        log::debug!("#{POST_LIST_ID} absent; post feed controller skipped");
        return Ok(());
    };
    let buttons = dom::query_all(&document, CATEGORY_BUTTON_SELECTOR)?;
    let load_more = document.get_element_by_id(LOAD_MORE_ID);

    let category = buttons
        .iter()
        .find(|b| b.class_list().contains(CLASS_ACTIVE))
        .and_then(category_of)
        .unwrap_or(0);
    let rendered = dom::query_all_in(&container, "article")?;
    let has_more = load_more.as_ref().is_some_and(|b| !b.has_attribute("hidden"));
    let rendered_count = u32::try_from(rendered.len()).unwrap_or(u32::MAX);
    let session = FeedSession::resume(category, rendered_count, config.page_size, has_more);

    reveal.observe(dom::query_all_in(&container, REVEAL_TARGET_SELECTOR)?);

    let controller = Rc::new(FeedController {
        session: RefCell::new(session),
        container,
        load_more,
        buttons,
        reveal,
        endpoint: config.endpoint.clone(),
        abort: RefCell::new(None),
    });
    controller.mark_active(category);

    for button in &controller.buttons {
        let this = Rc::clone(&controller);
        let clicked = button.clone();
        dom::listen(button, "click", move |event| {
            event.prevent_default();
            match category_of(&clicked) {
                Some(category) => this.switch_category(category),
                None => log::warn!("category button without a numeric data-category"),
            }
        })?;
    }

    if let Some(button) = &controller.load_more {
        let this = Rc::clone(&controller);
        dom::listen(button, "click", move |event| {
            event.prevent_default();
            this.load_more();
        })?;
    }
    Ok(())
}

fn category_of(button: &Element) -> Option<u32> {
    button.get_attribute("data-category")?.trim().parse().ok()
}

impl FeedController {
    fn switch_category(self: &Rc<Self>, category: u32) {
        let request = self.session.borrow_mut().switch_category(category);
        self.mark_active(category);
        self.dispatch(request);
    }

    fn load_more(self: &Rc<Self>) {
        let request = self.session.borrow_mut().load_more();
        match request {
            Some(request) => self.dispatch(request),
            None => log::debug!("load more ignored; a page is already loading"),
        }
    }

    fn dispatch(self: &Rc<Self>, request: PageRequest) {
        if let Some(previous) = self.abort.borrow_mut().take() {
            previous.abort();
        }
        self.set_busy(true);

        let endpoint = self.endpoint.clone();
        let for_fetch = request.clone();
        let (fetch, handle) = abortable(async move { api::fetch_page(&endpoint, &for_fetch).await });
        *self.abort.borrow_mut() = Some(handle);

        let this = Rc::clone(self);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch.await {
                Ok(result) => this.finish(&request, result),
                Err(Aborted) => log::debug!("page request seq={} aborted", request.token.seq),
            }
        });
    }

    fn finish(&self, request: &PageRequest, result: Result<PageResponse, ClientError>) {
        match result {
            Ok(response) => {
                let accepted = self
                    .session
                    .borrow_mut()
                    .accept(request, &response, |mode| self.merge(mode, &response.html));
                match accepted {
                    Ok(Some(_)) => {}
                    Ok(None) => return,
                    Err(err) => {
                        log::warn!("page merge failed: {err}");
                        self.restore_after_failure(request);
                        return;
                    }
                }
                self.abort.borrow_mut().take();
                let show = self.session.borrow().load_more_visible();
                self.set_load_more_visible(show);
                self.set_busy(false);
            }
            Err(err) => {
                log::warn!("{}", api::failure_summary(request, &err));
                let current = self.session.borrow_mut().fail(request);
                if current {
                    self.restore_after_failure(request);
                }
            }
        }
    }

    /// UI cleanup once the session has rolled `request` back.
    fn restore_after_failure(&self, request: &PageRequest) {
        self.abort.borrow_mut().take();
        if request.mode == MergeMode::Replace {
            let shown = self.session.borrow().current_category();
            self.mark_active(shown);
        }
        self.set_busy(false);
    }

    fn merge(&self, mode: MergeMode, html: &str) -> Result<(), ClientError> {
        let inserted = match mode {
            MergeMode::Replace => {
                self.reveal.forget_all();
                self.container.set_inner_html(html);
                dom::element_children(&self.container)
            }
            MergeMode::Append => {
                let fragment = parse(html)?;
                dom::transfer_children(&fragment, &self.container)?
            }
        };
        let targets = inserted
            .into_iter()
            .filter(|el| el.matches(REVEAL_TARGET_SELECTOR).unwrap_or(false))
            .collect::<Vec<_>>();
        self.reveal.observe(targets);
        Ok(())
    }

    fn mark_active(&self, category: u32) {
        for button in &self.buttons {
            let active = category_of(button) == Some(category);
            dom::set_class(button, CLASS_ACTIVE, active);
            dom::set_attribute(button, "aria-pressed", if active { "true" } else { "false" });
        }
    }

    fn set_load_more_visible(&self, visible: bool) {
        if let Some(button) = &self.load_more {
            dom::set_flag_attribute(button, "hidden", !visible);
        }
    }

    fn set_busy(&self, busy: bool) {
        dom::set_attribute(&self.container, "aria-busy", if busy { "true" } else { "false" });
        if let Some(button) = &self.load_more {
            dom::set_flag_attribute(button, "disabled", busy);
        }
    }
}

fn parse(html: &str) -> Result<web_sys::DocumentFragment, ClientError> {
    dom::parse_fragment(&dom::document()?, html)
}
