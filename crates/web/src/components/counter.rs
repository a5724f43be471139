// =============================================================================
// Syntesa Web - Animated Counter Component
// =============================================================================

use leptos::html::Span;
use leptos::prelude::*;
use syntesa_common::content::Stat;
use syntesa_common::motion::CounterSpec;

use crate::hooks::use_animated_counter;

/// A number that counts up from `start` to `end` when scrolled into view.
#[component]
pub fn AnimatedCounter(
    end: f64,
    #[prop(optional)] start: f64,
    #[prop(default = 1500.0)] duration_ms: f64,
    #[prop(optional)] delay_ms: f64,
    #[prop(optional, into)] suffix: String,
    #[prop(optional)] pad_digits: usize,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let node = NodeRef::<Span>::new();
    let spec = CounterSpec {
        start,
        end,
        duration_ms,
        delay_ms,
        suffix,
        pad_digits,
    };
    let text = use_animated_counter(spec, node);

    view! {
        <span node_ref=node class=format!("tabular-nums {}", class)>
            {text}
        </span>
    }
}

/// Counter for one of the statistics blocks. Years run from a nearby start
/// so they do not count up from zero.
#[component]
pub fn StatCounter(stat: Stat, #[prop(optional)] delay_ms: f64) -> impl IntoView {
    let start = if stat.is_year { (stat.value - 10) as f64 } else { 0.0 };
    view! {
        <AnimatedCounter
            end=stat.value as f64
            start=start
            delay_ms=delay_ms
            suffix=stat.suffix
            pad_digits=stat.pad_digits
            class="stat-value"
        />
    }
}
