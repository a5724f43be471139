// =============================================================================
// Syntesa Web - Marquee Components
// =============================================================================
// Table of Contents:
// 1. DragMarquee (auto-scrolling, pausable, draggable)
// 2. MarqueeDivider (decorative word band)
// =============================================================================

use leptos::html::Div;
use leptos::prelude::*;
use syntesa_common::motion::marquee::{
    divider_style, divider_text, parse_translate_x, DIVIDER_WORDS,
};
use syntesa_common::motion::{MarqueeDirection, MarqueeTrack};
use web_sys::{Element, PointerEvent};

use crate::hooks::{use_in_view, InViewOptions};
use crate::utils::{prefers_reduced_motion, window};

// -----------------------------------------------------------------------------
// 1. DragMarquee
// -----------------------------------------------------------------------------

/// Current `translateX` of a running CSS animation.
fn computed_translate_x(element: &Element) -> Option<f64> {
    let style = window().ok()?.get_computed_style(element).ok().flatten()?;
    let transform = style.get_property_value("transform").ok()?;
    parse_translate_x(&transform)
}

/// Horizontally looping strip. The children are rendered twice so the loop
/// is seamless. Hover and touch pause it; dragging moves it by hand and the
/// loop picks up from wherever it was dropped.
#[component]
pub fn DragMarquee(
    children: ChildrenFn,
    #[prop(default = 30.0)] duration_s: f64,
    #[prop(optional)] direction: MarqueeDirection,
    /// Pixels moved per pixel of pointer travel.
    #[prop(default = 1.0)]
    drag_factor: f64,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let viewport = NodeRef::<Div>::new();
    let track_ref = NodeRef::<Div>::new();
    let track = StoredValue::new(MarqueeTrack::new(duration_s, direction).with_drag_factor(drag_factor));
    let reduced = prefers_reduced_motion();

    // Some(x) while the position is held by hand.
    let manual = RwSignal::new(None::<f64>);
    let resume_delay = RwSignal::new(0.0_f64);
    let play_state = RwSignal::new("running");
    let in_view = use_in_view(
        viewport,
        InViewOptions {
            threshold: 0.05,
            once: false,
        },
    );

    let sync_pause = move || play_state.set(track.with_value(MarqueeTrack::play_state));
    // Keep the hand-held offset inside one loop; both copies look the same.
    let wrap = move |offset: f64| track.with_value(|t| -t.travelled(offset));

    let track_style = move || match manual.get() {
        Some(offset) => format!("animation: none; transform: translate3d({}px, 0, 0);", offset),
        None if reduced => String::from("animation: none;"),
        None => format!(
            "animation: marquee {}s linear -{}s infinite {}; animation-play-state: {};",
            duration_s,
            resume_delay.get(),
            direction.css(),
            if in_view.get() { play_state.get() } else { "paused" }
        ),
    };

    let on_pointer_down = move |ev: PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        let Some(el) = track_ref.get() else {
            return;
        };
        let offset = manual
            .get_untracked()
            .or_else(|| computed_translate_x(&el))
            .unwrap_or(0.0);
        let loop_width = f64::from(el.scroll_width()) / 2.0;
        track.update_value(|t| {
            t.set_loop_width(loop_width);
            t.begin_drag(f64::from(ev.client_x()), offset);
        });
        manual.set(Some(offset));
        sync_pause();
        if let Some(vp) = viewport.get() {
            let _ = vp.set_pointer_capture(ev.pointer_id());
        }
    };

    let on_pointer_move = move |ev: PointerEvent| {
        let moved = track
            .try_update_value(|t| t.drag_to(f64::from(ev.client_x())))
            .flatten();
        if let Some(offset) = moved {
            manual.set(Some(wrap(offset)));
        }
    };

    let end_drag = move || {
        let Some(delay) = track.try_update_value(|t| t.release()).flatten() else {
            return;
        };
        if !reduced {
            resume_delay.set(delay);
            manual.set(None);
        }
        sync_pause();
    };

    let set_hovered = move |hovered: bool| {
        track.update_value(|t| t.set_hovered(hovered));
        sync_pause();
    };
    let set_touched = move |touched: bool| {
        track.update_value(|t| t.set_touched(touched));
        sync_pause();
    };

    let first = children.clone();
    view! {
        <div
            node_ref=viewport
            class=format!("marquee {}", class)
            class:is-dragging=move || manual.get().is_some()
            on:mouseenter=move |_| set_hovered(true)
            on:mouseleave=move |_| set_hovered(false)
            on:touchstart=move |_| set_touched(true)
            on:touchend=move |_| set_touched(false)
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=move |_| end_drag()
            on:pointercancel=move |_| end_drag()
        >
            <div node_ref=track_ref class="marquee-track" style=track_style>
                <div class="marquee-group">{first()}</div>
                <div class="marquee-group" aria-hidden="true">{children()}</div>
            </div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. MarqueeDivider
// -----------------------------------------------------------------------------

/// Outlined, upper-cased words drifting across the page between sections.
/// Runs only while visible.
#[component]
pub fn MarqueeDivider(
    #[prop(optional)] words: Option<&'static [&'static str]>,
    #[prop(default = 25.0)] duration_s: f64,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let in_view = use_in_view(
        node,
        InViewOptions {
            threshold: 0.05,
            once: true,
        },
    );
    let text = divider_text(words.unwrap_or(DIVIDER_WORDS), 8);

    view! {
        <section class="marquee-divider" aria-hidden="true">
            <div class="section-frame">
                <div node_ref=node class="marquee-divider-band" class:is-visible=move || in_view.get()>
                    <div
                        class="marquee-divider-text text-stroke"
                        style=move || divider_style(duration_s, in_view.get())
                    >
                        {text}
                    </div>
                </div>
            </div>
        </section>
    }
}
