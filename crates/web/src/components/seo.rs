// =============================================================================
// Syntesa Web - Document Head
// =============================================================================
// Table of Contents:
// 1. SiteHead (tags shared by every page)
// 2. PageHead (per-page title, meta, canonical link, JSON-LD)
// =============================================================================

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Script, Title};
use serde_json::Value;
use syntesa_common::seo::{
    generate_links, generate_meta, generate_preconnect_links, generate_security_meta,
    generate_theme_color_meta, render_json_ld, LinkTag, MetaTag, PageSeo,
};

use crate::config::SiteConfig;
use crate::state::ThemeState;

fn meta_view(tag: MetaTag) -> AnyView {
    match tag {
        MetaTag::Name { name, content } => view! { <Meta name=name content=content /> }.into_any(),
        MetaTag::Property { property, content } => {
            view! { <Meta property=property content=content /> }.into_any()
        }
        MetaTag::HttpEquiv { http_equiv, content } => {
            view! { <Meta http_equiv=http_equiv content=content /> }.into_any()
        }
    }
}

fn link_view(link: LinkTag) -> AnyView {
    match link.crossorigin {
        Some(crossorigin) => {
            view! { <Link rel=link.rel href=link.href crossorigin=crossorigin /> }.into_any()
        }
        None => view! { <Link rel=link.rel href=link.href /> }.into_any(),
    }
}

// -----------------------------------------------------------------------------
// 1. SiteHead
// -----------------------------------------------------------------------------

/// Security meta, resource hints and a `theme-color` that follows the
/// active theme.
#[component]
pub fn SiteHead() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let theme = expect_context::<ThemeState>();
    let site = config.site;
    let theme_color = move || generate_theme_color_meta(&site, theme.theme.get()).content().to_string();

    view! {
        {generate_security_meta().into_iter().map(meta_view).collect_view()}
        {generate_preconnect_links().into_iter().map(link_view).collect_view()}
        <Meta name="theme-color" content=theme_color />
    }
}

// -----------------------------------------------------------------------------
// 2. PageHead
// -----------------------------------------------------------------------------

/// Title, description, Open Graph/Twitter tags, canonical link and JSON-LD
/// for one page.
#[component]
pub fn PageHead(seo: PageSeo, #[prop(optional)] schemas: Vec<Value>) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let meta = generate_meta(&config.site, &seo);
    let links = generate_links(&config.site, &seo.path);
    let json_ld = render_json_ld(&schemas);

    view! {
        <Title text=meta.title />
        {meta.tags.into_iter().map(meta_view).collect_view()}
        {links.into_iter().map(link_view).collect_view()}
        {json_ld.map(|body| view! { <Script type_="application/ld+json">{body}</Script> })}
    }
}
