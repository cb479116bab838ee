//! Shared intersection observer driving the post reveal animation.
//!
//! New posts are tagged `reveal-pending` and observed; the first time a
//! batch scrolls into view each post gets `is-revealed` after its stagger
//! delay and is unobserved. Without `IntersectionObserver`, or with reduced
//! motion, posts are revealed on insertion.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::consts::{ATTR_REVEAL_ID, CLASS_REVEAL_PENDING, CLASS_REVEALED};
use crate::state::reveal::{ObserverOptions, RevealStrategy, VisibilityRegistry};
use crate::util::{dom, motion};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct Tracked {
    registry: VisibilityRegistry<String>,
    elements: HashMap<String, Element>,
}

pub struct RevealController {
    observer: Option<IntersectionObserver>,
    tracked: Rc<RefCell<Tracked>>,
    next_id: Cell<u64>,
    _callback: Option<ObserverCallback>,
}

impl RevealController {
    #[must_use]
    pub fn new(stagger: Duration) -> Self {
        let tracked = Rc::new(RefCell::new(Tracked {
            registry: VisibilityRegistry::new(stagger),
            elements: HashMap::new(),
        }));

        let for_cb = Rc::clone(&tracked);
        let callback: ObserverCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
            on_intersections(&for_cb, &entries, &observer);
        });

        let settings = ObserverOptions::default();
        let options = IntersectionObserverInit::new();
        options.set_root_margin(settings.root_margin);
        options.set_threshold(&wasm_bindgen::JsValue::from_f64(settings.threshold));
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => Self { observer: Some(observer), tracked, next_id: Cell::new(0), _callback: Some(callback) },
            Err(err) => {
                log::debug!("IntersectionObserver unavailable ({err:?}); revealing posts on insert");
                Self { observer: None, tracked, next_id: Cell::new(0), _callback: None }
            }
        }
    }

    /// Reveal `nodes` now or once they scroll into view.
    pub fn observe(&self, nodes: Vec<Element>) {
        let strategy = RevealStrategy::select(motion::prefers_reduced_motion(), self.observer.is_some());
        let (RevealStrategy::OnVisible, Some(observer)) = (strategy, &self.observer) else {
            for el in &nodes {
                reveal_now(el);
            }
            return;
        };

        let mut tracked = self.tracked.borrow_mut();
        let Tracked { registry, elements } = &mut *tracked;
        for el in nodes {
            let key = self.key_for(&el);
            if !registry.register(key.clone()) {
                continue;
            }
            dom::set_class(&el, CLASS_REVEALED, false);
            dom::set_class(&el, CLASS_REVEAL_PENDING, true);
            observer.observe(&el);
            elements.insert(key, el);
        }
    }

    /// Stop tracking everything; used before the container is replaced.
    pub fn forget_all(&self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
        let mut tracked = self.tracked.borrow_mut();
        tracked.registry.clear();
        tracked.elements.clear();
    }

    fn key_for(&self, el: &Element) -> String {
        if let Some(existing) = el.get_attribute(ATTR_REVEAL_ID) {
            return existing;
        }
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let key = format!("r{id}");
        dom::set_attribute(el, ATTR_REVEAL_ID, &key);
        key
    }
}

fn on_intersections(tracked: &Rc<RefCell<Tracked>>, entries: &Array, observer: &IntersectionObserver) {
    let visible = entries
        .iter()
        .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
        .filter(IntersectionObserverEntry::is_intersecting)
        .filter_map(|entry| entry.target().get_attribute(ATTR_REVEAL_ID))
        .collect::<Vec<_>>();
    if visible.is_empty() {
        return;
    }

    let due = {
        let mut tracked = tracked.borrow_mut();
        let fired = tracked.registry.notify_visible(visible);
        fired
            .into_iter()
            .filter_map(|(key, delay)| tracked.elements.remove(&key).map(|el| (el, delay)))
            .collect::<Vec<_>>()
    };

    for (el, delay) in due {
        observer.unobserve(&el);
        reveal_after(el, delay);
    }
}

fn reveal_after(el: Element, delay: Duration) {
    if delay.is_zero() {
        reveal_now(&el);
        return;
    }
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::sleep(delay).await;
        reveal_now(&el);
    });
}

fn reveal_now(el: &Element) {
    dom::set_class(el, CLASS_REVEAL_PENDING, false);
    dom::set_class(el, CLASS_REVEALED, true);
}
