// =============================================================================
// Syntesa Web - Section Header
// =============================================================================

use leptos::prelude::*;

use super::reveal::Reveal;
use super::scramble::ScrambleText;

/// Two-column header used by the numbered page sections: a scrambled label
/// and ordinal on the left, the section headline on the right.
#[component]
pub fn SectionHeader(
    /// Short label scrambled in on first view.
    label: &'static str,
    /// Ordinal printed in the corner, e.g. `"03"`.
    index: &'static str,
    /// `id` of the headline, referenced by the section's `aria-labelledby`.
    #[prop(optional)]
    heading_id: Option<&'static str>,
    headline: &'static str,
) -> impl IntoView {
    view! {
        <div class="section-header">
            <div class="section-header-label bg-hatching">
                <Reveal>
                    <ScrambleText text=label class="section-label" />
                </Reveal>
                <span class="section-index" aria-hidden="true">{index}</span>
            </div>
            <div class="section-header-headline">
                <Reveal delay=0.1>
                    <h2 id=heading_id class="section-headline">{headline}</h2>
                </Reveal>
            </div>
        </div>
    }
}

/// Decorative `+` marks on the section frame corners.
#[component]
pub fn CornerMarks() -> impl IntoView {
    view! {
        <span class="corner-mark corner-mark-left" aria-hidden="true">"+"</span>
        <span class="corner-mark corner-mark-right" aria-hidden="true">"+"</span>
    }
}
