//! Thin `web-sys` helpers for element lookup, classes, and listeners.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, Node, NodeList, Window};

use crate::error::ClientError;

/// # Errors
///
/// Returns [`ClientError::Js`] outside a window context (e.g. a worker).
pub fn window() -> Result<Window, ClientError> {
    web_sys::window().ok_or_else(|| ClientError::Js("no global window".to_owned()))
}

/// # Errors
///
/// Returns [`ClientError::Js`] when there is no window or it has no document.
pub fn document() -> Result<Document, ClientError> {
    window()?
        .document()
        .ok_or_else(|| ClientError::Js("window has no document".to_owned()))
}

/// Elements matching `selector` anywhere in the document, in document order.
///
/// # Errors
///
/// Returns [`ClientError::Js`] when `selector` is not valid CSS.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, ClientError> {
    Ok(elements_of(&document.query_selector_all(selector)?))
}

/// Elements matching `selector` below `parent`, in document order.
///
/// # Errors
///
/// Returns [`ClientError::Js`] when `selector` is not valid CSS.
pub fn query_all_in(parent: &Element, selector: &str) -> Result<Vec<Element>, ClientError> {
    Ok(elements_of(&parent.query_selector_all(selector)?))
}

fn elements_of(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Direct element children of `node`, in order.
#[must_use]
pub fn element_children(node: &Element) -> Vec<Element> {
    let mut out = Vec::new();
    let mut next = node.first_element_child();
    while let Some(el) = next {
        next = el.next_element_sibling();
        out.push(el);
    }
    out
}

/// Add or remove `class` on `el`.
pub fn set_class(el: &Element, class: &str, on: bool) {
    if let Err(err) = el.class_list().toggle_with_force(class, on) {
        log::warn!("class `{class}` not updated: {}", ClientError::from(err));
    }
}

/// Set or remove a boolean attribute such as `hidden` or `disabled`.
pub fn set_flag_attribute(el: &Element, name: &str, on: bool) {
    let result = if on { el.set_attribute(name, "") } else { el.remove_attribute(name) };
    if let Err(err) = result {
        log::warn!("attribute `{name}` not updated: {}", ClientError::from(err));
    }
}

pub fn set_attribute(el: &Element, name: &str, value: &str) {
    if let Err(err) = el.set_attribute(name, value) {
        log::warn!("attribute `{name}` not updated: {}", ClientError::from(err));
    }
}

/// Move every child of `from` to the end of `to`, one node at a time.
///
/// Returns the moved element nodes in order.
///
/// # Errors
///
/// Returns [`ClientError::Js`] when the DOM rejects an insertion; nodes moved
/// before the failure stay in `to`.
pub fn transfer_children(from: &Node, to: &Node) -> Result<Vec<Element>, ClientError> {
    let mut moved = Vec::new();
    while let Some(child) = from.first_child() {
        let child = to.append_child(&child)?;
        if let Ok(el) = child.dyn_into::<Element>() {
            moved.push(el);
        }
    }
    Ok(moved)
}

/// Parse trusted HTML into a detached fragment.
///
/// # Errors
///
/// Returns [`ClientError::Js`] when a `<template>` element cannot be created.
pub fn parse_fragment(document: &Document, html: &str) -> Result<web_sys::DocumentFragment, ClientError> {
    let template = document
        .create_element("template")?
        .dyn_into::<web_sys::HtmlTemplateElement>()
        .map_err(|_| ClientError::Js("template element unsupported".to_owned()))?;
    template.set_inner_html(html);
    Ok(template.content())
}

/// Attach `handler` for the lifetime of the page.
///
/// # Errors
///
/// Returns [`ClientError::Js`] when the listener cannot be registered.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), ClientError>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Like [`listen`], registered passive so scroll handling never blocks scrolling.
///
/// # Errors
///
/// Returns [`ClientError::Js`] when the listener cannot be registered.
pub fn listen_passive<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), ClientError>
where
    F: FnMut(Event) + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        &options,
    )?;
    cb.forget();
    Ok(())
}
