// =============================================================================
// Syntesa Web - Navigation
// =============================================================================
// Fixed header that slides away while scrolling down and returns on the way
// up, plus the full-screen mobile menu with numbered entries.
// =============================================================================

use gloo_timers::callback::Timeout;
use leptos::ev;
use leptos::html::{Button, Div};
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use syntesa_common::content::SOCIAL_LINKS;
use syntesa_common::motion::scroll::NavScroll;
use syntesa_common::{Page, SITE_META};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};

use super::theme_toggle::DarkModeToggle;
use crate::utils::{current_year, document, lock_body_scroll, scroll_y};

const FOCUSABLE_ELEMENTS: &str = "a[href], button:not([disabled]), [tabindex]:not([tabindex=\"-1\"])";

fn focus(element: Option<Element>) {
    if let Some(el) = element.and_then(|e| e.dyn_into::<HtmlElement>().ok()) {
        let _ = el.focus();
    }
}

/// Site header with desktop links, theme toggle and the mobile menu.
#[component]
pub fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;
    let hidden = RwSignal::new(false);
    let menu_open = RwSignal::new(false);
    let scroll = StoredValue::new(NavScroll::default());
    let menu_button = NodeRef::<Button>::new();
    let menu_ref = NodeRef::<Div>::new();

    // Auto-hide on scroll
    let scroll_handle = window_event_listener(ev::scroll, move |_| {
        let now_hidden = scroll
            .try_update_value(|s| s.update(scroll_y()))
            .unwrap_or(false);
        if now_hidden != hidden.get_untracked() {
            hidden.set(now_hidden);
        }
        if now_hidden && menu_open.get_untracked() {
            menu_open.set(false);
        }
    });

    // Escape closes the menu and hands focus back to the button
    let key_handle = window_event_listener(ev::keydown, move |ev: KeyboardEvent| {
        if ev.key() == "Escape" && menu_open.get_untracked() {
            menu_open.set(false);
            if let Some(button) = menu_button.get_untracked() {
                let _ = button.focus();
            }
        }
    });

    on_cleanup(move || {
        scroll_handle.remove();
        key_handle.remove();
        lock_body_scroll(false);
    });

    Effect::new(move |_| lock_body_scroll(menu_open.get()));

    // Focus the first entry once the menu has become visible
    Effect::new(move |_| {
        if !menu_open.get() {
            return;
        }
        Timeout::new(100, move || {
            let first = menu_ref
                .get_untracked()
                .and_then(|menu| menu.query_selector("a[href]").ok().flatten());
            focus(first);
        })
        .forget();
    });

    // Route changes close the menu
    Effect::new(move |previous: Option<String>| {
        let path = pathname.get();
        if previous.is_some_and(|p| p != path) {
            menu_open.set(false);
        }
        path
    });

    // Keep Tab cycling inside the open menu
    let on_menu_keydown = move |ev: KeyboardEvent| {
        if ev.key() != "Tab" {
            return;
        }
        let Some(menu) = menu_ref.get() else {
            return;
        };
        let Ok(nodes) = menu.query_selector_all(FOCUSABLE_ELEMENTS) else {
            return;
        };
        let len = nodes.length();
        if len == 0 {
            return;
        }
        let as_element = |index: u32| nodes.item(index).and_then(|n| n.dyn_into::<Element>().ok());
        let (first, last) = (as_element(0), as_element(len - 1));
        let active = document().ok().and_then(|d| d.active_element());

        if ev.shift_key() && active.is_some() && active == first {
            ev.prevent_default();
            focus(last);
        } else if !ev.shift_key() && active.is_some() && active == last {
            ev.prevent_default();
            focus(first);
        }
    };

    let discord = SOCIAL_LINKS.iter().find(|link| link.name == "Discord").copied();
    let is_active = move |page: Page| pathname.get() == page.path();

    view! {
        <header>
            <nav
                aria-label="Main"
                class="navbar"
                class:navbar-hidden=move || hidden.get() && !menu_open.get()
            >
                <div class="section-frame navbar-inner">
                    <a href="/" class="navbar-logo" on:click=move |_| menu_open.set(false)>
                        <img src="/assets/logo-light.svg" alt="Syntesa" class="logo-light" />
                        <img src="/assets/logo-dark.svg" alt="Syntesa" class="logo-dark" />
                    </a>

                    <div class="navbar-right">
                        <ul class="navbar-links desktop-only">
                            <li><a href=Page::Programs.path() class="navbar-link">{Page::Programs.label()}</a></li>
                            <li><a href=Page::About.path() class="navbar-link">{Page::About.label()}</a></li>
                        </ul>
                        <div class="navbar-divider desktop-only" aria-hidden="true"></div>

                        <div class="navbar-actions">
                            <DarkModeToggle />
                            {discord.map(|link| view! {
                                <a href=link.href target="_blank" rel="noopener noreferrer" class="navbar-join">
                                    <span>"Join"</span>
                                    <span aria-hidden="true">"→"</span>
                                </a>
                            })}
                            <button
                                node_ref=menu_button
                                type="button"
                                class="menu-button mobile-only"
                                class:is-open=move || menu_open.get()
                                aria-label=move || if menu_open.get() { "Close menu" } else { "Open menu" }
                                aria-expanded=move || menu_open.get().to_string()
                                aria-controls="mobile-menu"
                                on:click=move |_| menu_open.update(|open| *open = !*open)
                            >
                                <span class="menu-bar" aria-hidden="true"></span>
                                <span class="menu-bar" aria-hidden="true"></span>
                            </button>
                        </div>
                    </div>
                </div>
            </nav>
        </header>

        <div
            node_ref=menu_ref
            id="mobile-menu"
            role="dialog"
            aria-modal=move || menu_open.get().to_string()
            aria-label="Navigation menu"
            class="mobile-menu"
            class:is-open=move || menu_open.get()
            on:keydown=on_menu_keydown
        >
            <div class="mobile-menu-backdrop bg-dot-grid"></div>
            <div class="mobile-menu-body">
                <nav aria-label="Mobile" class="mobile-menu-nav">
                    <ul>
                        {Page::ALL
                            .into_iter()
                            .enumerate()
                            .map(|(i, page)| {
                                view! {
                                    <li class="mobile-menu-item">
                                        <a
                                            href=page.path()
                                            class="mobile-menu-link"
                                            class:is-active=move || is_active(page)
                                            style=format!("animation-delay: {}ms;", 150 + i * 80)
                                            on:click=move |_| menu_open.set(false)
                                        >
                                            <span class="mobile-menu-index">{page.nav_index()}</span>
                                            <span class="mobile-menu-label">{page.label()}</span>
                                            <Show when=move || is_active(page)>
                                                <span class="mobile-menu-arrow" aria-hidden="true">"→"</span>
                                            </Show>
                                        </a>
                                        <div class="mobile-menu-rule" aria-hidden="true"></div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>

                <div class="mobile-menu-footer">
                    <a href=format!("mailto:{}", SITE_META.email) class="mobile-menu-mail">
                        {SITE_META.email}
                    </a>
                    <ul class="mobile-menu-social">
                        {SOCIAL_LINKS
                            .iter()
                            .enumerate()
                            .map(|(i, link)| view! {
                                <li>
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        title=link.name
                                        style=format!("animation-delay: {}ms;", 500 + i * 60)
                                    >
                                        <img src=format!("/assets/icons/{}.svg", link.icon) alt="" aria-hidden="true" />
                                        <span class="sr-only">{link.name}</span>
                                    </a>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                    <div class="mobile-menu-meta">
                        <span>
                            <abbr title="Software Engineering">"SE"</abbr>" Lab "
                            <abbr title="Universitas Negeri Surabaya">"UNESA"</abbr>
                        </span>
                        <small>"© " {current_year()}</small>
                    </div>
                </div>
            </div>
        </div>
    }
}
