// =============================================================================
// Syntesa Web - Scramble Text Component
// =============================================================================

use leptos::html::Span;
use leptos::prelude::*;
use syntesa_common::motion::scramble::DEFAULT_DURATION_MS;

use crate::hooks::use_text_scramble;

/// Text that resolves out of random glyphs when scrolled into view.
///
/// Screen readers get the final text through `aria-label`.
#[component]
pub fn ScrambleText(
    #[prop(into)] text: String,
    #[prop(default = DEFAULT_DURATION_MS)] duration_ms: u32,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let node = NodeRef::<Span>::new();
    let shown = use_text_scramble(text.clone(), duration_ms, delay_ms, node);

    view! {
        <span node_ref=node class=class aria-label=text>
            <span aria-hidden="true">{shown}</span>
        </span>
    }
}
