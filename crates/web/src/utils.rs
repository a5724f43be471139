// =============================================================================
// Syntesa Web - Utility Functions
// =============================================================================
// Table of Contents:
// 1. Errors
// 2. DOM Utilities
// 3. Environment Queries
// 4. Resource Guards (listeners, animation frames)
// 5. JS Interop
// =============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::OnceLock;

use leptos::prelude::*;
use serde::Serialize;
use syntesa_common::motion::REDUCED_MOTION_QUERY;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, Window};

// -----------------------------------------------------------------------------
// 1. Errors
// -----------------------------------------------------------------------------

/// Failures talking to browser APIs. Callers log these and carry on.
#[derive(Debug, Clone, Error)]
pub enum DomError {
    #[error("no window object available")]
    NoWindow,

    #[error("no document available")]
    NoDocument,

    #[error("element not found: {0}")]
    Missing(&'static str),

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|err| String::from(err.message()))
            })
            .unwrap_or_else(|| format!("{:?}", value));
        DomError::Js(message)
    }
}

impl From<serde_json::Error> for DomError {
    fn from(err: serde_json::Error) -> Self {
        DomError::Js(err.to_string())
    }
}

/// Log a recoverable browser failure.
pub fn warn_dom(context: &str, err: &DomError) {
    log::warn!("{}: {}", context, err);
}

// -----------------------------------------------------------------------------
// 2. DOM Utilities
// -----------------------------------------------------------------------------

/// Get the browser window object.
pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// Get the current document.
pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// The `<html>` element.
pub fn root_element() -> Result<Element, DomError> {
    document()?.document_element().ok_or(DomError::Missing("html"))
}

/// Viewport width and height in CSS pixels.
pub fn viewport_size() -> (f64, f64) {
    let Ok(win) = window() else {
        return (0.0, 0.0);
    };
    let dimension = |value: Result<JsValue, JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    (dimension(win.inner_width()), dimension(win.inner_height()))
}

/// Current vertical scroll offset.
pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().map_err(DomError::from)).unwrap_or(0.0)
}

/// Stop the page behind an overlay from scrolling.
pub fn lock_body_scroll(locked: bool) {
    let body = document().ok().and_then(|d| d.body());
    if let Some(body) = body {
        let style = body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if let Err(err) = result {
            warn_dom("body scroll lock", &DomError::from(err));
        }
    }
}

/// Current calendar year from the browser clock.
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// Navigate one step back in history.
pub fn history_back() {
    let result = window()
        .and_then(|w| w.history().map_err(DomError::from))
        .and_then(|h| h.back().map_err(DomError::from));
    if let Err(err) = result {
        warn_dom("history back", &err);
    }
}

// -----------------------------------------------------------------------------
// 3. Environment Queries
// -----------------------------------------------------------------------------

/// Whether a media query currently matches. False when it cannot be evaluated.
pub fn media_matches(query: &str) -> bool {
    window()
        .ok()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|list| list.matches())
        .unwrap_or(false)
}

/// OS reduced-motion setting, sampled once per page load.
pub fn prefers_reduced_motion() -> bool {
    static REDUCED_MOTION: OnceLock<bool> = OnceLock::new();
    *REDUCED_MOTION.get_or_init(|| {
        let reduced = media_matches(REDUCED_MOTION_QUERY);
        log::debug!("prefers-reduced-motion: {}", reduced);
        reduced
    })
}

// -----------------------------------------------------------------------------
// 4. Resource Guards
// -----------------------------------------------------------------------------

/// Keep a browser resource alive until the current reactive owner is
/// disposed, then drop it.
pub fn hold_until_cleanup<T: 'static>(resource: T) {
    let slot = StoredValue::new_local(Some(resource));
    on_cleanup(move || {
        slot.try_update_value(|held| {
            held.take();
        });
    });
}

/// An event listener that is removed when dropped.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl EventListener {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        callback: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<Self, DomError> {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(callback);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A `requestAnimationFrame` loop. The callback receives the frame timestamp
/// and returns whether another frame is wanted. Dropping cancels it.
pub struct FrameLoop {
    pending: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut(f64) -> bool + 'static) -> Result<Self, DomError> {
        let win = window()?;
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let next_pending = Rc::clone(&pending);
        let next_callback = Rc::clone(&callback);
        let frame_window = win.clone();
        *callback.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
            next_pending.set(None);
            if !on_frame(timestamp) {
                return;
            }
            if let Some(cb) = next_callback.borrow().as_ref() {
                match frame_window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => next_pending.set(Some(id)),
                    Err(err) => warn_dom("animation frame", &DomError::from(err)),
                }
            }
        }));

        let first = callback
            .borrow()
            .as_ref()
            .map(|cb| win.request_animation_frame(cb.as_ref().unchecked_ref()))
            .transpose()?;
        pending.set(first);

        Ok(Self { pending, callback })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(id), Ok(win)) = (self.pending.take(), window()) {
            let _ = win.cancel_animation_frame(id);
        }
        // Break the closure's reference to itself.
        self.callback.borrow_mut().take();
    }
}

// -----------------------------------------------------------------------------
// 5. JS Interop
// -----------------------------------------------------------------------------

/// Convert a serializable value into a plain JS object.
pub fn to_js_value<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, DomError> {
    let json = serde_json::to_string(value)?;
    Ok(js_sys::JSON::parse(&json)?)
}

