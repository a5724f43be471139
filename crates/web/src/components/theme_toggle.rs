// =============================================================================
// Syntesa Web - Dark Mode Toggle
// =============================================================================

use leptos::prelude::*;

use crate::state::ThemeState;

/// Sun/moon button that flips the theme with a circular reveal from the
/// click position.
#[component]
pub fn DarkModeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeState>();

    let on_click = move |ev: web_sys::MouseEvent| {
        // Keyboard activation reports a zero-detail click at (0, 0).
        let pointer = (ev.detail() > 0).then(|| (f64::from(ev.client_x()), f64::from(ev.client_y())));
        theme.toggle(pointer);
    };

    view! {
        <button
            type="button"
            class="theme-toggle"
            class:dark=move || theme.is_dark()
            aria-label="Toggle dark mode"
            on:click=on_click
        >
            <span class="theme-toggle-icons" aria-hidden="true">
                <img src="/assets/icons/sun.svg" alt="" class="theme-icon theme-icon-sun" />
                <img src="/assets/icons/moon.svg" alt="" class="theme-icon theme-icon-moon" />
            </span>
            <span class="theme-toggle-tooltip" aria-hidden="true">"Toggle dark mode"</span>
        </button>
    }
}
