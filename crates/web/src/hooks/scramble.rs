// =============================================================================
// Syntesa Web - Text Scramble Hook
// =============================================================================

use std::cell::{Cell, RefCell};
use std::time::Duration;

use gloo_timers::callback::Timeout;
use leptos::html::ElementType;
use leptos::leptos_dom::helpers::{set_interval_with_handle, IntervalHandle};
use leptos::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use syntesa_common::motion::scramble::TICK_MS;
use syntesa_common::motion::Scramble;
use wasm_bindgen::JsCast;

use super::in_view::{use_in_view, InViewOptions};
use crate::utils::{prefers_reduced_motion, warn_dom, DomError};

/// Scrambled text resolving left to right into `text` once `target` is half
/// in view, after `delay_ms`.
pub fn use_text_scramble<E>(
    text: String,
    duration_ms: u32,
    delay_ms: u32,
    target: NodeRef<E>,
) -> ReadSignal<String>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    let (shown, set_shown) = signal(text.clone());
    let reduced_motion = prefers_reduced_motion();
    if !Scramble::new(&text, duration_ms).animates(reduced_motion) {
        return shown;
    }

    let in_view = use_in_view(
        target,
        InViewOptions {
            threshold: 0.5,
            once: true,
        },
    );
    let delay = StoredValue::new_local(None::<Timeout>);
    let ticker = StoredValue::new(None::<IntervalHandle>);

    let start_ticking = move |scramble: Scramble| {
        let step = Cell::new(0usize);
        let rng = RefCell::new(SmallRng::from_entropy());
        let ticking = scramble.clone();
        let started = set_interval_with_handle(
            move || {
                let current = step.get() + 1;
                step.set(current);
                set_shown.set(ticking.frame(current, reduced_motion, &mut *rng.borrow_mut()));
                if ticking.is_done(current) {
                    if let Some(handle) = ticker.try_update_value(Option::take).flatten() {
                        handle.clear();
                    }
                }
            },
            Duration::from_millis(u64::from(TICK_MS)),
        );
        match started {
            Ok(handle) => ticker.set_value(Some(handle)),
            Err(err) => {
                warn_dom("scramble timer", &DomError::from(err));
                set_shown.set(scramble.final_text());
            }
        }
    };

    Effect::new(move |started: Option<bool>| {
        if started == Some(true) {
            return true;
        }
        if !in_view.get() {
            return false;
        }

        let scramble = Scramble::new(&text, duration_ms);
        delay.set_value(Some(Timeout::new(delay_ms, move || start_ticking(scramble))));
        true
    });

    on_cleanup(move || {
        delay.try_update_value(|held| {
            held.take();
        });
        if let Some(handle) = ticker.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    });

    shown
}
