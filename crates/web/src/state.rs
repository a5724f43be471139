// =============================================================================
// Syntesa Web - Global Application State
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. Theme State
// 3. Theme Actions
// 4. Circular Reveal
// =============================================================================

use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Serialize;
use syntesa_common::motion::EASE_OUT;
use syntesa_common::theme::{RevealCircle, DARK_SCHEME_QUERY, STORAGE_KEY, TRANSITION_MS};
use syntesa_common::{Theme, ThemePreference};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::MediaQueryListEvent;

use crate::utils::{
    document, hold_until_cleanup, media_matches, prefers_reduced_motion, root_element,
    to_js_value, viewport_size, warn_dom, window, DomError, EventListener,
};

// -----------------------------------------------------------------------------
// 2. Theme State
// -----------------------------------------------------------------------------

/// Light/dark theme provided via Leptos context.
#[derive(Clone, Copy)]
pub struct ThemeState {
    /// Theme currently applied to the document.
    pub theme: RwSignal<Theme>,

    preference: StoredValue<ThemePreference>,
}

impl ThemeState {
    /// Read the stored choice and the OS scheme, and apply the result.
    pub fn new() -> Self {
        // Stored as the bare theme name so the pre-paint script can read it.
        let stored = LocalStorage::raw().get_item(STORAGE_KEY).ok().flatten();
        let preference =
            ThemePreference::from_storage(stored.as_deref(), media_matches(DARK_SCHEME_QUERY));
        let theme = preference.resolved();
        apply_to_document(theme);
        log::info!(
            "theme {} ({})",
            theme,
            if preference.is_explicit() { "stored" } else { "system" }
        );

        Self {
            theme: RwSignal::new(theme),
            preference: StoredValue::new(preference),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.theme.get().is_dark()
    }

    // -------------------------------------------------------------------------
    // 3. Theme Actions
    // -------------------------------------------------------------------------

    /// Follow OS color-scheme changes for as long as the calling owner lives.
    /// Changes are ignored once the visitor has picked a theme.
    pub fn watch_system(&self) {
        let query = window()
            .and_then(|w| w.match_media(DARK_SCHEME_QUERY).map_err(DomError::from))
            .and_then(|q| q.ok_or(DomError::Missing("matchMedia")));
        let query = match query {
            Ok(query) => query,
            Err(err) => {
                warn_dom("color scheme listener", &err);
                return;
            }
        };

        let state = *self;
        let listener = EventListener::new(&query, "change", move |event| {
            let dark = event
                .dyn_ref::<MediaQueryListEvent>()
                .map(MediaQueryListEvent::matches)
                .unwrap_or(false);
            state.system_changed(Theme::from_dark(dark));
        });
        match listener {
            Ok(listener) => hold_until_cleanup(listener),
            Err(err) => warn_dom("color scheme listener", &err),
        }
    }

    fn system_changed(&self, system: Theme) {
        let changed = self
            .preference
            .try_update_value(|pref| pref.system_changed(system))
            .flatten();
        if let Some(theme) = changed {
            log::info!("theme {} (system)", theme);
            self.apply(theme);
        }
    }

    /// Flip the theme and store the choice. `pointer` is where the click
    /// happened, used as the origin of the circular reveal.
    pub fn toggle(&self, pointer: Option<(f64, f64)>) {
        let current = self.theme.get_untracked();
        let next = self
            .preference
            .try_update_value(|pref| pref.toggle())
            .unwrap_or_else(|| current.toggled());
        if let Err(err) = LocalStorage::raw().set_item(STORAGE_KEY, next.as_str()) {
            warn_dom("persist theme", &DomError::from(err));
        }
        log::info!("theme {} (user)", next);

        if prefers_reduced_motion() {
            self.apply(next);
            return;
        }

        let state = *self;
        match start_view_transition(move || state.apply(next)) {
            Ok(Some(transition)) => {
                let (width, height) = viewport_size();
                spawn_local(animate_reveal(transition, RevealCircle::new(pointer, width, height)));
            }
            Ok(None) => {}
            Err(err) => {
                warn_dom("view transition", &err);
                self.apply(next);
            }
        }
    }

    fn apply(&self, theme: Theme) {
        apply_to_document(theme);
        self.theme.set(theme);
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

/// Toggle the `dark` class on `<html>`.
fn apply_to_document(theme: Theme) {
    let result = root_element().and_then(|root| {
        root.class_list()
            .toggle_with_force("dark", theme.is_dark())
            .map(|_| ())
            .map_err(DomError::from)
    });
    if let Err(err) = result {
        warn_dom("apply theme", &err);
    }
}

// -----------------------------------------------------------------------------
// 4. Circular Reveal
// -----------------------------------------------------------------------------

/// Run `update` inside `document.startViewTransition`. Returns `Ok(None)`
/// after running it directly when the API is missing.
fn start_view_transition(update: impl FnOnce() + 'static) -> Result<Option<JsValue>, DomError> {
    let document = document()?;
    let start = js_sys::Reflect::get(&document, &JsValue::from_str("startViewTransition"))?;
    let Some(start) = start.dyn_ref::<js_sys::Function>() else {
        update();
        return Ok(None);
    };
    let callback = Closure::once_into_js(update);
    Ok(Some(start.call1(&document, &callback)?))
}

#[derive(Serialize)]
struct RevealKeyframes {
    #[serde(rename = "clipPath")]
    clip_path: [String; 2],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RevealTiming {
    duration: f64,
    easing: String,
    pseudo_element: &'static str,
}

async fn animate_reveal(transition: JsValue, circle: RevealCircle) {
    if let Err(err) = try_animate_reveal(transition, circle).await {
        warn_dom("theme reveal", &err);
    }
}

async fn try_animate_reveal(transition: JsValue, circle: RevealCircle) -> Result<(), DomError> {
    let ready: js_sys::Promise = js_sys::Reflect::get(&transition, &JsValue::from_str("ready"))?
        .dyn_into()
        .map_err(DomError::from)?;
    JsFuture::from(ready).await?;

    let root = root_element()?;
    let keyframes = to_js_value(&RevealKeyframes {
        clip_path: circle.clip_paths(),
    })?;
    let timing = to_js_value(&RevealTiming {
        duration: TRANSITION_MS,
        easing: EASE_OUT.css(),
        pseudo_element: "::view-transition-new(root)",
    })?;
    let animate: js_sys::Function = js_sys::Reflect::get(&root, &JsValue::from_str("animate"))?
        .dyn_into()
        .map_err(DomError::from)?;
    animate.call2(&root, &keyframes, &timing)?;
    Ok(())
}
