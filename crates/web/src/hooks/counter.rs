// =============================================================================
// Syntesa Web - Animated Counter Hook
// =============================================================================

use leptos::html::ElementType;
use leptos::prelude::*;
use syntesa_common::motion::{CounterFrame, CounterSpec};
use wasm_bindgen::JsCast;

use super::in_view::{use_in_view, InViewOptions};
use crate::utils::{prefers_reduced_motion, warn_dom, FrameLoop};

/// Text of a number counting up once `target` is half in view.
///
/// Under reduced motion, or when animation frames are unavailable, the final
/// value is shown straight away.
pub fn use_animated_counter<E>(spec: CounterSpec, target: NodeRef<E>) -> ReadSignal<String>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    let reduced_motion = prefers_reduced_motion();
    let (text, set_text) = signal(spec.resting_text(reduced_motion));
    if reduced_motion {
        return text;
    }

    let in_view = use_in_view(
        target,
        InViewOptions {
            threshold: 0.5,
            once: true,
        },
    );
    let frames = StoredValue::new_local(None::<FrameLoop>);

    Effect::new(move |started: Option<bool>| {
        if started == Some(true) {
            return true;
        }
        if !in_view.get() {
            return false;
        }

        let spec = spec.clone();
        let final_text = spec.final_text();
        let mut origin: Option<f64> = None;
        let started = FrameLoop::start(move |timestamp| {
            let origin = *origin.get_or_insert(timestamp);
            match spec.frame(timestamp - origin, reduced_motion) {
                CounterFrame::Waiting => true,
                CounterFrame::Running(value) => {
                    set_text.set(value);
                    true
                }
                CounterFrame::Done(value) => {
                    set_text.set(value);
                    false
                }
            }
        });
        match started {
            Ok(frame_loop) => frames.set_value(Some(frame_loop)),
            Err(err) => {
                warn_dom("counter animation", &err);
                set_text.set(final_text);
            }
        }
        true
    });

    on_cleanup(move || {
        frames.try_update_value(|held| {
            held.take();
        });
    });

    text
}
