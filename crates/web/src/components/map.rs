// =============================================================================
// Syntesa Web - Lab Location Map
// =============================================================================
// Table of Contents:
// 1. Leaflet Bindings
// 2. Options
// 3. Resources (script/link injection, teardown)
// 4. LabMap Component
// =============================================================================
// Leaflet is pulled from unpkg when the map mounts and removed again when it
// unmounts, so pages without a footer never pay for it.
// =============================================================================

use leptos::html::Div;
use leptos::prelude::*;
use serde::Serialize;
use syntesa_common::site::{MapLocation, LAB_LOCATION};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlLinkElement, HtmlScriptElement};

use crate::utils::{document, to_js_value, warn_dom, DomError};

const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const LEAFLET_JS_INTEGRITY: &str = "sha256-20nQCchB9co0qIjJZRGuk2/Z9VM+kNiyxNV1lvTlZBo=";
const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_CSS_INTEGRITY: &str = "sha256-p4NxAoJBhIIN+hmNHrzRCf9tD/miZyoHS5obTRR9BMY=";
const TILE_URL: &str = "https://tiles.stadiamaps.com/tiles/alidade_satellite/{z}/{x}/{y}{r}.png";

const MARKER_HTML: &str = r#"<div class="marker-pin"><div class="pin-content"></div><div class="pin-shadow"></div></div>"#;
const POPUP_HTML: &str = r#"<div class="custom-popup"><h3>Software Development Lab</h3><p>A10 Building, 3rd Floor</p><p>Universitas Negeri Surabaya</p></div>"#;

// -----------------------------------------------------------------------------
// 1. Leaflet Bindings
// -----------------------------------------------------------------------------

#[wasm_bindgen]
extern "C" {
    type LeafletMap;
    type Layer;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn leaflet_map(element: &HtmlElement, options: &JsValue) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = zoomIn)]
    fn zoom_in(this: &LeafletMap);

    #[wasm_bindgen(method, js_name = zoomOut)]
    fn zoom_out(this: &LeafletMap);

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: u8, options: &JsValue);

    #[wasm_bindgen(method)]
    fn remove(this: &LeafletMap);

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = divIcon)]
    fn div_icon(options: &JsValue) -> JsValue;

    #[wasm_bindgen(js_namespace = L)]
    fn marker(lat_lng: &JsValue, options: &JsValue) -> Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Layer, map: &LeafletMap) -> Layer;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Layer, content: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(method, js_name = getElement)]
    fn get_element(this: &Layer) -> Option<web_sys::Element>;
}

// -----------------------------------------------------------------------------
// 2. Options
// -----------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions {
    center: [f64; 2],
    zoom: u8,
    scroll_wheel_zoom: bool,
    dragging: bool,
    zoom_control: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileOptions {
    attribution: &'static str,
    max_zoom: u8,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IconOptions {
    class_name: &'static str,
    html: &'static str,
    icon_size: [u32; 2],
    icon_anchor: [u32; 2],
    popup_anchor: [i32; 2],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PopupOptions {
    close_button: bool,
    max_width: u32,
    class_name: &'static str,
}

#[derive(Serialize)]
struct PanOptions {
    animate: bool,
    duration: f64,
}

fn center(location: &MapLocation) -> [f64; 2] {
    [location.lat, location.lng]
}

/// Build the map inside `container` with tiles, marker and popup.
fn build_map(container: &HtmlElement, location: &MapLocation) -> Result<LeafletMap, DomError> {
    let map = leaflet_map(
        container,
        &to_js_value(&MapOptions {
            center: center(location),
            zoom: location.zoom,
            scroll_wheel_zoom: true,
            dragging: true,
            zoom_control: false,
        })?,
    )?;

    tile_layer(
        TILE_URL,
        &to_js_value(&TileOptions {
            attribution: "©OpenStreetMap, ©Stadia Maps",
            max_zoom: 19,
        })?,
    )
    .add_to(&map);

    let icon = div_icon(&to_js_value(&IconOptions {
        class_name: "custom-marker",
        html: MARKER_HTML,
        icon_size: [30, 30],
        icon_anchor: [15, 15],
        popup_anchor: [0, -20],
    })?);
    let marker_options = js_sys::Object::new();
    js_sys::Reflect::set(&marker_options, &JsValue::from_str("icon"), &icon)?;

    let pin = marker(&to_js_value(&center(location))?, &marker_options).add_to(&map);
    pin.bind_popup(
        POPUP_HTML,
        &to_js_value(&PopupOptions {
            close_button: false,
            max_width: 300,
            class_name: "custom-popup-wrapper",
        })?,
    );
    if let Some(element) = pin.get_element() {
        element.class_list().add_1("marker-pulse")?;
    }

    Ok(map)
}

// -----------------------------------------------------------------------------
// 3. Resources
// -----------------------------------------------------------------------------

/// Injected `<script>`/`<link>` pair and the onload hook. Dropping removes
/// both elements from `<head>`.
struct LeafletAssets {
    script: HtmlScriptElement,
    link: HtmlLinkElement,
    _on_load: Closure<dyn FnMut()>,
}

impl LeafletAssets {
    fn inject(on_load: impl FnMut() + 'static) -> Result<Self, DomError> {
        let document = document()?;
        let head = document.head().ok_or(DomError::Missing("head"))?;

        let link: HtmlLinkElement = document.create_element("link")?.unchecked_into();
        link.set_rel("stylesheet");
        link.set_href(LEAFLET_CSS);
        link.set_integrity(LEAFLET_CSS_INTEGRITY);
        link.set_cross_origin(Some(""));

        let on_load = Closure::<dyn FnMut()>::new(on_load);
        let script: HtmlScriptElement = document.create_element("script")?.unchecked_into();
        script.set_src(LEAFLET_JS);
        script.set_integrity(LEAFLET_JS_INTEGRITY);
        script.set_cross_origin(Some(""));
        script.set_async(true);
        script.set_onload(Some(on_load.as_ref().unchecked_ref()));

        head.append_child(&link)?;
        head.append_child(&script)?;
        log::debug!("leaflet assets injected");

        Ok(Self {
            script,
            link,
            _on_load: on_load,
        })
    }
}

impl Drop for LeafletAssets {
    fn drop(&mut self) {
        self.script.set_onload(None);
        self.script.remove();
        self.link.remove();
        log::debug!("leaflet assets removed");
    }
}

// -----------------------------------------------------------------------------
// 4. LabMap Component
// -----------------------------------------------------------------------------

/// Satellite map of the lab with a pulsing marker and custom zoom and
/// recenter buttons.
#[component]
pub fn LabMap() -> impl IntoView {
    let container = NodeRef::<Div>::new();
    let map = StoredValue::new_local(None::<LeafletMap>);
    let assets = StoredValue::new_local(None::<LeafletAssets>);

    Effect::new(move |_| {
        if container.get().is_none() || assets.with_value(Option::is_some) {
            return;
        }
        let injected = LeafletAssets::inject(move || {
            if map.with_value(Option::is_some) {
                return;
            }
            let Some(element) = container.get_untracked() else {
                return;
            };
            match build_map(&element, &LAB_LOCATION) {
                Ok(built) => {
                    log::info!("map ready");
                    map.set_value(Some(built));
                }
                Err(err) => warn_dom("map init", &err),
            }
        });
        match injected {
            Ok(injected) => assets.set_value(Some(injected)),
            Err(err) => warn_dom("leaflet load", &err),
        }
    });

    on_cleanup(move || {
        map.try_update_value(|held| {
            if let Some(instance) = held.take() {
                instance.remove();
            }
        });
        assets.try_update_value(|held| {
            held.take();
        });
    });

    let with_map = move |action: fn(&LeafletMap)| {
        map.with_value(|instance| {
            if let Some(instance) = instance {
                action(instance);
            }
        });
    };

    let recenter = move |instance: &LeafletMap| {
        let target = to_js_value(&center(&LAB_LOCATION));
        let options = to_js_value(&PanOptions {
            animate: true,
            duration: 1.0,
        });
        match (target, options) {
            (Ok(target), Ok(options)) => instance.set_view(&target, LAB_LOCATION.zoom, &options),
            (Err(err), _) | (_, Err(err)) => warn_dom("map recenter", &err),
        }
    };

    view! {
        <div class="lab-map">
            <div node_ref=container class="lab-map-canvas"></div>
            <div class="custom-map-controls">
                <button type="button" class="control-button" title="Zoom in" on:click=move |_| with_map(LeafletMap::zoom_in)>
                    "+"
                </button>
                <button type="button" class="control-button" title="Zoom out" on:click=move |_| with_map(LeafletMap::zoom_out)>
                    "−"
                </button>
                <button type="button" class="control-button" title="Recenter map" on:click=move |_| with_map(recenter)>
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                        <circle cx="12" cy="12" r="10" />
                        <line x1="12" y1="8" x2="12" y2="16" />
                        <line x1="8" y1="12" x2="16" y2="12" />
                    </svg>
                </button>
            </div>
            <div class="lab-map-tint" aria-hidden="true"></div>
        </div>
    }
}
