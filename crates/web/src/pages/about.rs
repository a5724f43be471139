// =============================================================================
// Syntesa Web - About Page
// =============================================================================
// Lab overview: intro and statistics, mission, principles, timeline and
// leadership, closing with a call to action.
// =============================================================================

use leptos::prelude::*;
use syntesa_common::content::{
    ordinal, ABOUT_HEADING_LINES, ABOUT_INTRO, ABOUT_STATS, LEADERSHIP_INTRO, MISSION,
    MISSION_DETAIL, PRINCIPLES, SOCIAL_LINKS, TEAM, TIMELINE,
};
use syntesa_common::motion::easing::EASE_OUT_SOFT;
use syntesa_common::motion::EASE_OUT;
use syntesa_common::seo::{breadcrumb_json_ld, merge_json_ld, PageSeo};
use syntesa_common::Page;

use crate::components::{CornerMarks, PageHead, Reveal, StaggerItem, StaggerList, StatCounter};
use crate::config::SiteConfig;
use crate::utils::prefers_reduced_motion;

/// Entrance animation for the hero pieces, which play on mount rather than
/// on scroll.
fn entrance_style(reduced: bool, duration: f64, delay: f64, easing: String) -> String {
    if reduced {
        return String::from("animation: none;");
    }
    format!(
        "animation-duration: {}s; animation-delay: {}s; animation-timing-function: {};",
        duration, delay, easing
    )
}

// -----------------------------------------------------------------------------
// Main Component
// -----------------------------------------------------------------------------

/// About page.
#[component]
pub fn AboutPage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let reduced = prefers_reduced_motion();
    let seo = PageSeo {
        title: Some("About - Syntesa, Software Engineering Lab UNESA".to_string()),
        description: Some(
            "Learn about the Software Engineering Lab at Universitas Negeri Surabaya. Our mission, principles, timeline, and leadership team advancing software construction."
                .to_string(),
        ),
        path: Page::About.path().to_string(),
        keywords: ["about", "mission", "team", "leadership", "timeline", "history"]
            .iter()
            .map(|k| k.to_string())
            .collect(),
        ..PageSeo::default()
    };
    let schemas = merge_json_ld([breadcrumb_json_ld(&config.site, &Page::About.breadcrumbs())]);
    let discord = SOCIAL_LINKS.iter().find(|link| link.name == "Discord").map(|link| link.href);

    view! {
        <PageHead seo=seo schemas=schemas />
        <div class="page page-about">
            // Hero
            <section aria-labelledby="about-hero-heading" class="section about-hero">
                <CornerMarks />
                <div class="section-frame">
                    <div class="about-hero-grid">
                        <div class="about-hero-heading">
                            <h1 id="about-hero-heading" class="about-title">
                                {ABOUT_HEADING_LINES
                                    .iter()
                                    .enumerate()
                                    .map(|(i, line)| view! {
                                        <span class="heading-line-mask">
                                            <span
                                                class="heading-line"
                                                style={entrance_style(reduced, 0.9, 0.15 + i as f64 * 0.12, EASE_OUT_SOFT.css())}
                                            >
                                                {*line}
                                            </span>
                                        </span>
                                    })
                                    .collect_view()}
                            </h1>
                        </div>
                        <div class="about-hero-intro bg-dot-grid">
                            <p class="about-intro fade-in-up" style=entrance_style(reduced, 0.6, 0.5, EASE_OUT.css())>
                                {ABOUT_INTRO}
                            </p>
                        </div>
                    </div>

                    <dl class="about-stats fade-in" style=entrance_style(reduced, 0.5, 0.6, EASE_OUT.css())>
                        {ABOUT_STATS
                            .iter()
                            .map(|stat| view! {
                                <div class="about-stat">
                                    <dt class="about-stat-label">{stat.label}</dt>
                                    <dd class="about-stat-value">
                                        {if stat.is_year {
                                            view! {
                                                <time datetime=stat.value.to_string()>
                                                    <StatCounter stat=*stat />
                                                </time>
                                            }
                                            .into_any()
                                        } else {
                                            view! { <StatCounter stat=*stat /> }.into_any()
                                        }}
                                    </dd>
                                </div>
                            })
                            .collect_view()}
                    </dl>
                </div>
            </section>

            // Mission
            <section aria-labelledby="about-mission-heading" class="section">
                <div class="section-frame">
                    <div class="section-header">
                        <div class="section-header-label bg-hatching">
                            <Reveal>
                                <h2 id="about-mission-heading" class="section-label">"Our Mission"</h2>
                            </Reveal>
                            <span class="section-index" aria-hidden="true">"01"</span>
                        </div>
                        <div class="section-header-headline">
                            <Reveal delay=0.1>
                                <p class="about-mission">{MISSION}</p>
                            </Reveal>
                            <Reveal delay=0.2>
                                <p class="about-mission-detail">{MISSION_DETAIL}</p>
                            </Reveal>
                        </div>
                    </div>
                </div>
            </section>

            // Principles
            <section aria-labelledby="about-principles-heading" class="section">
                <div class="section-frame">
                    <div class="section-banner bg-hatching">
                        <Reveal>
                            <h2 id="about-principles-heading" class="section-label">"Principles"</h2>
                        </Reveal>
                        <span class="section-index" aria-hidden="true">"02"</span>
                    </div>
                    <StaggerList stagger=0.08 class="principles-grid">
                        {PRINCIPLES
                            .iter()
                            .enumerate()
                            .map(|(i, principle)| view! {
                                <StaggerItem index=i>
                                    <div class="principle">
                                        <span class="principle-index" aria-hidden="true">{ordinal(i + 1)}</span>
                                        <h3 class="principle-title">{principle.title}</h3>
                                        <p class="principle-description">{principle.description}</p>
                                    </div>
                                </StaggerItem>
                            })
                            .collect_view()}
                    </StaggerList>
                </div>
            </section>

            // Timeline
            <section aria-labelledby="about-timeline-heading" class="section">
                <div class="section-frame">
                    <div class="section-banner bg-hatching">
                        <Reveal>
                            <h2 id="about-timeline-heading" class="section-label">"Timeline"</h2>
                        </Reveal>
                        <span class="section-index" aria-hidden="true">"03"</span>
                    </div>
                    <StaggerList stagger=0.06 class="timeline">
                        <ol class="timeline-list">
                            {TIMELINE
                                .iter()
                                .enumerate()
                                .map(|(i, event)| view! {
                                    <li>
                                        <StaggerItem index=i class="timeline-event">
                                            <div class="timeline-year">
                                                <time datetime=event.year>{event.year}</time>
                                            </div>
                                            <div class="timeline-title">
                                                <h3>{event.title}</h3>
                                            </div>
                                            <div class="timeline-description">
                                                <p>{event.description}</p>
                                            </div>
                                        </StaggerItem>
                                    </li>
                                })
                                .collect_view()}
                        </ol>
                    </StaggerList>
                </div>
            </section>

            // Leadership
            <section aria-labelledby="about-leadership-heading" class="section">
                <div class="section-frame">
                    <div class="section-header">
                        <div class="section-header-label bg-hatching">
                            <Reveal>
                                <h2 id="about-leadership-heading" class="section-label">"Leadership"</h2>
                            </Reveal>
                            <span class="section-index" aria-hidden="true">"04"</span>
                        </div>
                        <div class="section-header-headline">
                            <Reveal delay=0.1>
                                <p class="about-leadership-intro">{LEADERSHIP_INTRO}</p>
                            </Reveal>
                        </div>
                    </div>
                    <StaggerList stagger=0.08 class="team">
                        {TEAM
                            .iter()
                            .enumerate()
                            .map(|(i, member)| view! {
                                <StaggerItem index=i>
                                    <article class="team-member">
                                        <div class="team-member-index">
                                            <span aria-hidden="true">{ordinal(i + 1)}</span>
                                        </div>
                                        <div class="team-member-role"><p>{member.role}</p></div>
                                        <div class="team-member-name"><h3>{member.name}</h3></div>
                                        <div class="team-member-focus"><p>{member.focus}</p></div>
                                    </article>
                                </StaggerItem>
                            })
                            .collect_view()}
                    </StaggerList>
                </div>
            </section>

            // Call to action
            <section aria-labelledby="about-cta-heading" class="section">
                <div class="section-frame about-cta">
                    <Reveal>
                        <div>
                            <h2 id="about-cta-heading" class="about-cta-title">"Interested in our work?"</h2>
                            <p class="about-cta-text">
                                "Join the conversation on Discord or explore our open-source projects on GitHub."
                            </p>
                        </div>
                    </Reveal>
                    <Reveal delay=0.15 fit=true>
                        {discord.map(|href| view! {
                            <a href=href target="_blank" rel="noopener noreferrer" class="btn btn-primary">
                                "Join Discord"
                                <span aria-hidden="true">"→"</span>
                            </a>
                        })}
                    </Reveal>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entrance_style_reduced_motion() {
        assert_eq!(entrance_style(true, 0.9, 0.15, EASE_OUT.css()), "animation: none;");
    }

    #[test]
    fn test_entrance_style_timing() {
        let style = entrance_style(false, 0.6, 0.5, EASE_OUT.css());
        assert!(style.contains("animation-duration: 0.6s"));
        assert!(style.contains("animation-delay: 0.5s"));
        assert!(style.contains(&EASE_OUT.css()));
    }
}
