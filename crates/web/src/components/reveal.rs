// =============================================================================
// Syntesa Web - Reveal Components
// =============================================================================
// Table of Contents:
// 1. Reveal
// 2. LineReveal
// 3. StaggerList / StaggerItem
// 4. BorderDraw
// =============================================================================

use leptos::html::Div;
use leptos::prelude::*;
use syntesa_common::motion::reveal::{line_style, BorderDraw as BorderDrawStroke};
use syntesa_common::motion::{RevealDirection, RevealOptions};

use crate::hooks::{use_in_view, InViewOptions};
use crate::utils::prefers_reduced_motion;

// -----------------------------------------------------------------------------
// 1. Reveal
// -----------------------------------------------------------------------------

/// Fades and slides its children in when they scroll into view.
#[component]
pub fn Reveal(
    children: Children,
    #[prop(optional)] direction: RevealDirection,
    #[prop(optional)] delay: f64,
    #[prop(default = 0.6)] duration: f64,
    #[prop(default = 30.0)] distance: f64,
    #[prop(default = 0.15)] threshold: f64,
    #[prop(default = true)] once: bool,
    /// Wipe in with a clip-path instead of sliding.
    #[prop(optional)]
    clip: bool,
    /// Shrink-wrap the content instead of taking the full width.
    #[prop(optional)]
    fit: bool,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let options = RevealOptions {
        direction,
        delay,
        duration,
        distance,
        threshold,
        once,
        clip,
    };
    let reduced = prefers_reduced_motion();
    let visible = use_in_view(node, InViewOptions { threshold, once });

    let outer_style = format!(
        "width: {};{}",
        if fit { "fit-content" } else { "100%" },
        if clip { " overflow: hidden;" } else { "" }
    );

    view! {
        <div node_ref=node style=outer_style>
            <div class=class style=move || options.style(visible.get(), reduced)>
                {children()}
            </div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. LineReveal
// -----------------------------------------------------------------------------

/// A hairline rule that grows from the left edge.
#[component]
pub fn LineReveal(#[prop(optional)] delay: f64, #[prop(optional, into)] class: String) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let reduced = prefers_reduced_motion();
    let visible = use_in_view(
        node,
        InViewOptions {
            threshold: 0.5,
            once: true,
        },
    );

    view! {
        <div node_ref=node class=format!("line-reveal {}", class)>
            <div class="line-reveal-rule" style=move || line_style(visible.get(), reduced, delay)></div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 3. StaggerList / StaggerItem
// -----------------------------------------------------------------------------

#[derive(Clone, Copy)]
struct StaggerContext {
    visible: ReadSignal<bool>,
    stagger: f64,
}

/// Container whose `StaggerItem` children reveal one after another once the
/// container is in view.
#[component]
pub fn StaggerList(
    children: Children,
    #[prop(default = 0.1)] stagger: f64,
    #[prop(default = 0.1)] threshold: f64,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let visible = use_in_view(node, InViewOptions { threshold, once: true });
    provide_context(StaggerContext { visible, stagger });

    view! {
        <div node_ref=node class=class>
            {children()}
        </div>
    }
}

/// One entry of a `StaggerList`; `index` sets its place in the sequence.
#[component]
pub fn StaggerItem(
    children: Children,
    index: usize,
    #[prop(optional)] direction: RevealDirection,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let context = use_context::<StaggerContext>();
    let stagger = context.map(|c| c.stagger).unwrap_or(0.1);
    let options = RevealOptions {
        direction,
        ..RevealOptions::stagger_item(index, stagger)
    };
    let reduced = prefers_reduced_motion();
    // Outside a list there is nothing to wait for.
    let visible = move || context.map(|c| c.visible.get()).unwrap_or(true);

    view! {
        <div class=class style=move || options.style(visible(), reduced)>
            {children()}
        </div>
    }
}

// -----------------------------------------------------------------------------
// 4. BorderDraw
// -----------------------------------------------------------------------------

/// Draws a one-pixel outline around its children once they are in view.
#[component]
pub fn BorderDraw(
    children: Children,
    #[prop(default = 0.8)] duration: f64,
    #[prop(optional)] delay: f64,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let reduced = prefers_reduced_motion();
    let visible = use_in_view(
        node,
        InViewOptions {
            threshold: 0.5,
            once: true,
        },
    );
    let stroke = RwSignal::new(None::<BorderDrawStroke>);

    Effect::new(move |_| {
        if let Some(container) = node.get() {
            let measured = BorderDrawStroke::new(
                f64::from(container.offset_width()),
                f64::from(container.offset_height()),
            );
            if measured.perimeter > 0.0 {
                stroke.set(Some(measured));
            }
        }
    });

    view! {
        <div node_ref=node class="border-draw">
            {move || stroke.get().map(|outline| view! {
                <svg class="border-draw-outline" xmlns="http://www.w3.org/2000/svg" aria-hidden="true">
                    <rect
                        x="0.5"
                        y="0.5"
                        width="calc(100% - 1px)"
                        height="calc(100% - 1px)"
                        fill="none"
                        stroke-width="1"
                        style=move || outline.style(visible.get(), reduced, duration, delay)
                    />
                </svg>
            })}
            {children()}
        </div>
    }
}
