// =============================================================================
// Syntesa Web - Home Page
// =============================================================================
// Table of Contents:
// 1. HomePage
// 2. Hero
// 3. Partners
// 4. Mission Statement (scroll-driven word fade)
// 5. Interest Groups (tilting rows)
// 6. Infrastructure
// 7. Internship Placements
// 8. Join Card (benefits, FAQ accordion)
// =============================================================================

use leptos::ev;
use leptos::html::{Div, Section};
use leptos::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use syntesa_common::content::{
    ordinal, shuffled, Accordion, GridBorders, InterestGroup, LabSpec, Partner, Senior, BENEFITS,
    FAQS, HERO_STATS, INTEREST_GROUPS, LAB_SPECS, MISSION_STATEMENT, PARTNERS, SENIORS,
    SOCIAL_LINKS,
};
use syntesa_common::motion::scroll::{rest_transform, section_progress, tilt_transform, word_opacity};
use syntesa_common::motion::MarqueeDirection;
use syntesa_common::seo::{
    faq_json_ld, merge_json_ld, organization_json_ld, website_json_ld, FaqItem, PageSeo,
};
use syntesa_common::Page;
use web_sys::MouseEvent;

use crate::components::{
    BorderDraw, CornerMarks, DragMarquee, MarqueeDivider, PageHead, ScrambleText,
    SectionHeader, StatCounter,
};
use crate::config::SiteConfig;
use crate::hooks::{use_in_view, InViewOptions};
use crate::utils::{prefers_reduced_motion, viewport_size};

// -----------------------------------------------------------------------------
// 1. HomePage
// -----------------------------------------------------------------------------

/// Landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let faq_items: Vec<FaqItem> = FAQS
        .iter()
        .map(|faq| FaqItem {
            question: faq.question.to_string(),
            answer: faq.answer.to_string(),
        })
        .collect();
    let schemas = merge_json_ld([
        Some(organization_json_ld(&config.site)),
        Some(website_json_ld(&config.site)),
        faq_json_ld(&faq_items),
    ]);
    let seo = PageSeo {
        path: Page::Home.path().to_string(),
        ..PageSeo::default()
    };

    view! {
        <PageHead seo=seo schemas=schemas />
        <div class="page page-home">
            <Hero />
            <Partners />
            <MarqueeDivider />
            <MissionStatement />
            <InterestGroups />
            <Infrastructure />
            <Seniors />
            <JoinCard />
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. Hero
// -----------------------------------------------------------------------------

#[component]
fn Hero() -> impl IntoView {
    let discord = SOCIAL_LINKS.iter().find(|link| link.name == "Discord").map(|link| link.href);

    view! {
        <section aria-labelledby="hero-heading" class="hero">
            <div class="hero-backdrop" aria-hidden="true">
                <div class="hero-orb hero-orb-1"></div>
                <div class="hero-orb hero-orb-2"></div>
                <div class="hero-orb hero-orb-3"></div>
                <div class="hero-grid"></div>
            </div>

            <div class="section-frame hero-content">
                <div class="hero-announcement animate-fade-in-up">
                    <p class="hero-badge">
                        <span class="hero-badge-dot" aria-hidden="true"></span>
                        <span>"Now accepting applications for 2025"</span>
                    </p>
                </div>

                <header class="hero-header">
                    <h1 id="hero-heading" class="hero-title">
                        <span class="hero-title-line" style="animation-delay: 200ms;">"Software Engineering"</span>
                        <br />
                        <span class="hero-title-line hero-title-accent" style="animation-delay: 400ms;">
                            "Laboratory"
                        </span>
                    </h1>
                    <p class="hero-subtitle" style="animation-delay: 600ms;">
                        "Where innovation meets excellence in software development, fostering the next generation of tech leaders"
                    </p>
                </header>

                <nav class="hero-actions" aria-label="Primary" style="animation-delay: 800ms;">
                    {discord.map(|href| view! {
                        <a href=href target="_blank" rel="noopener noreferrer" class="btn btn-primary">
                            "Apply Now"
                        </a>
                    })}
                    <a href=Page::Programs.path() class="btn btn-secondary">"Explore Programs →"</a>
                </nav>

                <dl class="hero-stats">
                    {HERO_STATS
                        .iter()
                        .enumerate()
                        .map(|(i, stat)| view! {
                            <div class="hero-stat" style=format!("animation-delay: {}ms;", 1000 + i * 100)>
                                <dt class="hero-stat-label">{stat.label}</dt>
                                <dd class="hero-stat-value">
                                    <StatCounter stat=*stat delay_ms={(i * 100) as f64} />
                                </dd>
                            </div>
                        })
                        .collect_view()}
                </dl>
            </div>
        </section>
    }
}

// -----------------------------------------------------------------------------
// 3. Partners
// -----------------------------------------------------------------------------

#[derive(Clone, Copy, PartialEq, Eq)]
enum TooltipSide {
    Top,
    Bottom,
}

#[component]
fn Partners() -> impl IntoView {
    let mut rng = SmallRng::from_entropy();
    let second_row = StoredValue::new(shuffled(PARTNERS, &mut rng));

    view! {
        <section aria-labelledby="partners-heading" class="partners">
            <header class="partners-header">
                <h2 id="partners-heading" class="partners-title">
                    "Empowering Innovation Through Partnership"
                </h2>
                <p class="partners-subtitle">
                    "Collaborating with leading technology companies to provide students with industry-standard tools and resources"
                </p>
            </header>

            <div class="partners-rows" role="region" aria-label="Industry partners">
                <div class="partners-fade partners-fade-left" aria-hidden="true"></div>
                <div class="partners-fade partners-fade-right" aria-hidden="true"></div>
                <DragMarquee duration_s=40.0>
                    <PartnerRow partners=PARTNERS.to_vec() side=TooltipSide::Top />
                </DragMarquee>
                <DragMarquee duration_s=40.0 direction=MarqueeDirection::Reverse>
                    <PartnerRow partners=second_row.get_value() side=TooltipSide::Bottom />
                </DragMarquee>
            </div>
        </section>
    }
}

#[component]
fn PartnerRow(partners: Vec<Partner>, side: TooltipSide) -> impl IntoView {
    let tooltip_class = match side {
        TooltipSide::Top => "partner-tooltip partner-tooltip-top",
        TooltipSide::Bottom => "partner-tooltip partner-tooltip-bottom",
    };

    view! {
        <ul class="partner-row">
            {partners
                .into_iter()
                .map(|partner| view! {
                    <li class="partner-item">
                        <article class="partner-card">
                            <img
                                src=format!("/assets/icons/{}.svg", partner.icon)
                                alt=partner.name
                                class="partner-icon"
                                draggable="false"
                            />
                            <div role="tooltip" class=tooltip_class>
                                <p class="partner-tooltip-name">{partner.name}</p>
                                <p class="partner-tooltip-description">{partner.description}</p>
                            </div>
                        </article>
                    </li>
                })
                .collect_view()}
        </ul>
    }
}

// -----------------------------------------------------------------------------
// 4. Mission Statement
// -----------------------------------------------------------------------------

/// Words brighten one after another as the section scrolls through the
/// viewport.
#[component]
fn MissionStatement() -> impl IntoView {
    let section = NodeRef::<Section>::new();
    let reduced = prefers_reduced_motion();
    let progress = RwSignal::new(0.0_f64);
    let words: Vec<&'static str> = MISSION_STATEMENT.split(' ').collect();
    let total = words.len();

    let measure = move || {
        let Some(el) = section.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let (_, viewport) = viewport_size();
        let next = section_progress(rect.top(), rect.height(), viewport, 0.35, 0.45);
        if (next - progress.get_untracked()).abs() > f64::EPSILON {
            progress.set(next);
        }
    };

    if !reduced {
        let handle = window_event_listener(ev::scroll, move |_| measure());
        on_cleanup(move || handle.remove());
        Effect::new(move |_| {
            if section.get().is_some() {
                measure();
            }
        });
    }

    view! {
        <section node_ref=section class="mission">
            <div class="section-frame">
                <div class="mission-label">
                    <ScrambleText text="Mission" class="section-label" />
                </div>
                <div class="mission-body bg-grid-lines">
                    <p class="mission-text">
                        {words
                            .into_iter()
                            .enumerate()
                            .map(|(i, word)| view! {
                                <span
                                    class="mission-word"
                                    style=move || format!("opacity: {};", word_opacity(i, total, progress.get(), reduced))
                                >
                                    {word}
                                </span>
                                " "
                            })
                            .collect_view()}
                    </p>
                </div>
            </div>
        </section>
    }
}

// -----------------------------------------------------------------------------
// 5. Interest Groups
// -----------------------------------------------------------------------------

#[component]
fn InterestGroups() -> impl IntoView {
    let rows = NodeRef::<Div>::new();
    let visible = use_in_view(rows, InViewOptions { threshold: 0.1, once: true });

    view! {
        <section id="interest-groups" class="section">
            <CornerMarks />
            <div class="section-frame">
                <SectionHeader
                    label="Divisions"
                    index="04"
                    headline="Specialized research groups focused on core pillars of modern computing."
                />
                <div node_ref=rows>
                    {INTEREST_GROUPS
                        .iter()
                        .enumerate()
                        .map(|(index, group)| view! { <GroupRow group=*group index=index visible=visible /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn GroupRow(group: InterestGroup, index: usize, visible: ReadSignal<bool>) -> impl IntoView {
    let row = NodeRef::<Div>::new();
    let reduced = prefers_reduced_motion();
    // Cached on enter so mousemove does not force a layout per event.
    let rect = StoredValue::new(None::<(f64, f64, f64, f64)>);
    let transform = RwSignal::new(rest_transform().to_string());

    let on_enter = move |_: MouseEvent| {
        if let Some(el) = row.get_untracked() {
            let r = el.get_bounding_client_rect();
            rect.set_value(Some((r.left(), r.top(), r.width(), r.height())));
        }
    };
    let on_move = move |ev: MouseEvent| {
        if reduced {
            return;
        }
        if let Some(r) = rect.get_value() {
            transform.set(tilt_transform((f64::from(ev.client_x()), f64::from(ev.client_y())), r));
        }
    };
    let on_leave = move |_: MouseEvent| {
        rect.set_value(None);
        transform.set(rest_transform().to_string());
    };

    let number = ordinal(index + 1);
    let delay = move |extra: usize| {
        if visible.get() {
            format!("{}ms", extra + index * 150)
        } else {
            String::from("0ms")
        }
    };

    view! {
        <div
            node_ref=row
            class="group-row"
            class:is-visible=move || visible.get()
            style=move || format!("perspective: 1000px; transition-delay: {};", delay(0))
        >
            <div
                class="group-row-inner"
                style=move || format!("transform-style: preserve-3d; transform: {};", transform.get())
                on:mouseenter=on_enter
                on:mousemove=on_move
                on:mouseleave=on_leave
            >
                <div class="group-row-index desktop-only">
                    <span>{number.clone()}</span>
                </div>
                <div class="group-row-body">
                    <h3 class="group-row-title">{group.name.as_str()}</h3>
                    <p class="group-row-description">{group.description}</p>
                    <ul class="group-row-details">
                        {group
                            .name
                            .details()
                            .iter()
                            .enumerate()
                            .map(|(i, detail)| view! {
                                <li
                                    class="group-row-detail"
                                    style=move || format!("transition-delay: {};", delay(300 + i * 60))
                                >
                                    <span class="group-row-bullet" aria-hidden="true"></span>
                                    {*detail}
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div class="group-row-aside">
                    <span class="mobile-only">{number}</span>
                    <span class="group-row-arrow" aria-hidden="true">"→"</span>
                </div>
            </div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 6. Infrastructure
// -----------------------------------------------------------------------------

fn spec_cell_class(borders: GridBorders) -> String {
    let mut class = String::from("spec-cell");
    if borders.right_sm {
        class.push_str(" border-r");
    }
    if borders.bottom_sm {
        class.push_str(" border-b");
    }
    class.push_str(if borders.right_lg { " lg-border-r" } else { " lg-border-r-0" });
    class.push_str(if borders.bottom_lg { " lg-border-b" } else { " lg-border-b-0" });
    class
}

#[component]
fn Infrastructure() -> impl IntoView {
    let grid = NodeRef::<leptos::html::Dl>::new();
    let visible = use_in_view(grid, InViewOptions { threshold: 0.15, once: true });
    let total = LAB_SPECS.len();

    view! {
        <section aria-labelledby="infrastructure-heading" class="section">
            <CornerMarks />
            <div class="section-frame">
                <SectionHeader
                    label="Infrastructure"
                    index="03"
                    heading_id="infrastructure-heading"
                    headline="Resources powering our research."
                />
                <dl node_ref=grid class="spec-grid">
                    {LAB_SPECS
                        .iter()
                        .enumerate()
                        .map(|(index, spec)| view! {
                            <SpecCell spec=*spec index=index total=total visible=visible />
                        })
                        .collect_view()}
                </dl>
            </div>
        </section>
    }
}

#[component]
fn SpecCell(spec: LabSpec, index: usize, total: usize, visible: ReadSignal<bool>) -> impl IntoView {
    let class = spec_cell_class(GridBorders::for_cell(index, total));

    view! {
        <div
            class=class
            class:is-visible=move || visible.get()
            style=move || format!(
                "transition-delay: {}ms;",
                if visible.get() { index * 60 } else { 0 }
            )
        >
            {spec.icon.map(|icon| view! {
                <img src=format!("/assets/icons/{}.svg", icon) alt="" aria-hidden="true" class="spec-icon" />
            })}
            <dt class="spec-label">{spec.label}</dt>
            <dd class="spec-value">
                {spec.value}
                {spec.detail.map(|detail| view! { <span class="spec-detail">{detail}</span> })}
            </dd>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 7. Internship Placements
// -----------------------------------------------------------------------------

#[component]
fn Seniors() -> impl IntoView {
    view! {
        <section aria-labelledby="placements-heading" class="section seniors">
            <div class="gradient-orb gradient-orb-green" aria-hidden="true"></div>
            <div class="section-frame">
                <SectionHeader
                    label="Internships"
                    index="05"
                    heading_id="placements-heading"
                    headline="Where our members have interned."
                />
                <DragMarquee duration_s=45.0 drag_factor=2.0 class="seniors-marquee">
                    {SENIORS.iter().map(|senior| view! { <SeniorCell senior=*senior /> }).collect_view()}
                </DragMarquee>
            </div>
        </section>
    }
}

#[component]
fn SeniorCell(senior: Senior) -> impl IntoView {
    view! {
        <article class="senior-cell">
            <figure class="senior-logo">
                <img src=senior.logo alt=senior.company loading="lazy" draggable="false" />
            </figure>
            <h3 class="senior-company">{senior.company}</h3>
            <p class="senior-name">{senior.name}</p>
            <p class="senior-role">{senior.role}</p>
            <div class="senior-meta">
                <span class="senior-program">{senior.study_program}</span>
                <time datetime=senior.batch class="senior-batch">{senior.batch}</time>
            </div>
        </article>
    }
}

// -----------------------------------------------------------------------------
// 8. Join Card
// -----------------------------------------------------------------------------

#[component]
fn JoinCard() -> impl IntoView {
    let faqs = RwSignal::new(Accordion::default());
    let benefits = NodeRef::<Div>::new();
    let benefits_visible = use_in_view(benefits, InViewOptions { threshold: 0.1, once: true });
    let questions = NodeRef::<Div>::new();
    let questions_visible = use_in_view(questions, InViewOptions { threshold: 0.1, once: true });
    let discord = SOCIAL_LINKS.iter().find(|link| link.name == "Discord").map(|link| link.href);

    let stagger = move |visible: ReadSignal<bool>, ms: usize| {
        format!("transition-delay: {}ms;", if visible.get() { ms } else { 0 })
    };

    view! {
        <section aria-labelledby="join-heading" class="section join">
            <div class="section-frame">
                <SectionHeader
                    label="Join Us"
                    index="06"
                    heading_id="join-heading"
                    headline="Begin your journey in software innovation."
                />

                <div class="join-grid">
                    <div node_ref=benefits class="join-benefits" class:is-visible=move || benefits_visible.get()>
                        <div class="join-intro">
                            <p class="join-lead">
                                "Join a community of passionate developers, researchers, and innovators. Our lab offers mentorship from industry experts and hands-on project experience."
                            </p>
                            <div class="join-benefit-list">
                                {BENEFITS
                                    .iter()
                                    .enumerate()
                                    .map(|(i, benefit)| view! {
                                        <div class="join-benefit" style=move || stagger(benefits_visible, (i + 1) * 80)>
                                            <span class="join-benefit-index">{ordinal(i + 1)}</span>
                                            <div>
                                                <h4 class="join-benefit-title">{benefit.title}</h4>
                                                <p class="join-benefit-description">{benefit.description}</p>
                                            </div>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <div class="join-status" style=move || stagger(benefits_visible, 420)>
                            <div>
                                <p class="join-status-text">
                                    "Applications for the "<span class="join-status-batch">"2026 batch"</span>" are now closed."
                                </p>
                                <p class="join-status-note">"Stay tuned for future openings"</p>
                            </div>
                            {discord.map(|href| view! {
                                <BorderDraw delay=0.3>
                                    <a href=href target="_blank" rel="noopener noreferrer" class="join-cta">
                                        "Join Discord"
                                        <span aria-hidden="true">"→"</span>
                                    </a>
                                </BorderDraw>
                            })}
                        </div>
                    </div>

                    <div node_ref=questions class="join-faq bg-dot-grid" class:is-visible=move || questions_visible.get()>
                        <h4 class="join-faq-title">"Frequently Asked Questions"</h4>
                        <div class="join-faq-list">
                            {FAQS
                                .iter()
                                .enumerate()
                                .map(|(i, faq)| {
                                    let panel_id = format!("faq-panel-{}", i);
                                    let controls = panel_id.clone();
                                    let expanded = move || faqs.get().is_open(i);
                                    view! {
                                        <div class="faq-item" style=move || stagger(questions_visible, (i + 1) * 100)>
                                            <button
                                                type="button"
                                                class="faq-question"
                                                aria-expanded=move || expanded().to_string()
                                                aria-controls=controls
                                                on:click=move |_| faqs.update(|accordion| accordion.toggle(i))
                                            >
                                                <span>{faq.question}</span>
                                                <span class="faq-icon" class:is-open=expanded aria-hidden="true">"+"</span>
                                            </button>
                                            <div
                                                id=panel_id
                                                role="region"
                                                class="faq-answer"
                                                class:is-open=expanded
                                                aria-hidden=move || (!expanded()).to_string()
                                            >
                                                <p>{faq.answer}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_cell_class_last_cell() {
        let class = spec_cell_class(GridBorders::for_cell(5, 6));
        assert!(!class.contains(" border-r"));
        assert!(!class.contains(" border-b"));
        assert!(class.contains("lg-border-r-0"));
        assert!(class.contains("lg-border-b-0"));
    }

    #[test]
    fn test_spec_cell_class_first_cell() {
        let class = spec_cell_class(GridBorders::for_cell(0, 6));
        assert!(class.contains(" border-r"));
        assert!(class.contains(" border-b"));
        assert!(class.contains(" lg-border-r "));
        assert!(class.ends_with(" lg-border-b"));
    }
}
