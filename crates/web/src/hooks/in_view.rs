// =============================================================================
// Syntesa Web - Viewport Visibility Hook
// =============================================================================
// Wraps an IntersectionObserver around a node ref and feeds its entries
// through `InView`. With `once` the observer disconnects on first sight.
// =============================================================================

use leptos::html::ElementType;
use leptos::prelude::*;
use syntesa_common::motion::InView;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::utils::{warn_dom, DomError};

/// Observer settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InViewOptions {
    /// Fraction of the element that must be inside the viewport.
    pub threshold: f64,
    pub once: bool,
}

impl Default for InViewOptions {
    fn default() -> Self {
        Self {
            threshold: 0.15,
            once: true,
        }
    }
}

/// Observer plus the callback it calls into. Disconnects when dropped.
struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ViewportObserver {
    fn observe(
        element: &Element,
        options: InViewOptions,
        on_change: impl Fn(bool) + 'static,
    ) -> Result<Self, DomError> {
        let mut state = InView::new(options.once);
        let threshold = options.threshold.clamp(0.0, 1.0);

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    // The first callback reports the current state even when
                    // it sits below the threshold.
                    let intersecting =
                        entry.is_intersecting() && entry.intersection_ratio() + 1e-3 >= threshold;
                    let observation = state.observe(intersecting);
                    if observation.changed {
                        on_change(state.visible());
                    }
                    if observation.detach {
                        observer.disconnect();
                        break;
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Whether the element behind `target` is in the viewport.
///
/// When no observer can be created the element is treated as visible so
/// content never stays hidden.
pub fn use_in_view<E>(target: NodeRef<E>, options: InViewOptions) -> ReadSignal<bool>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    let (visible, set_visible) = signal(false);
    let observer = StoredValue::new_local(None::<ViewportObserver>);

    Effect::new(move |_| {
        let Some(node) = target.get() else {
            return;
        };
        if observer.with_value(Option::is_some) {
            return;
        }
        let element: Element = node.unchecked_into();
        match ViewportObserver::observe(&element, options, move |now| set_visible.set(now)) {
            Ok(created) => observer.set_value(Some(created)),
            Err(err) => {
                warn_dom("intersection observer", &err);
                set_visible.set(InView::settled().visible());
            }
        }
    });

    on_cleanup(move || {
        observer.try_update_value(|held| {
            held.take();
        });
    });

    visible
}
