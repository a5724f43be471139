// =============================================================================
// Syntesa Web - Programs Page
// =============================================================================
// Interest-group programs with their curricula, followed by the lab's
// current projects and how far along each one is.
// =============================================================================

use leptos::html::Div;
use leptos::prelude::*;
use serde_json::Value;
use syntesa_common::content::{ordinal, InterestGroup, Project, INTEREST_GROUPS, PROJECTS};
use syntesa_common::seo::{
    breadcrumb_json_ld, course_json_ld, item_list_json_ld, merge_json_ld, CourseItem,
    ItemListEntry, PageSeo,
};
use syntesa_common::{Page, SiteMeta};

use crate::components::{PageHead, Reveal, SectionHeader, StaggerItem, StaggerList};
use crate::config::SiteConfig;
use crate::hooks::{use_in_view, InViewOptions};
use crate::utils::prefers_reduced_motion;

/// One course per interest group, its curriculum as the syllabus.
fn program_courses(groups: &[InterestGroup]) -> Vec<CourseItem> {
    groups
        .iter()
        .map(|group| CourseItem {
            name: group.name.to_string(),
            description: group.description.to_string(),
            topics: group.name.details().iter().map(|d| d.to_string()).collect(),
            ..CourseItem::default()
        })
        .collect()
}

fn project_entries(projects: &[Project]) -> Vec<ItemListEntry> {
    projects
        .iter()
        .map(|project| ItemListEntry {
            name: project.title.to_string(),
            url: None,
            description: Some(project.description.to_string()),
        })
        .collect()
}

/// Breadcrumbs, courses and the project list for the page head.
fn programs_schemas(site: &SiteMeta) -> Vec<Value> {
    let mut schemas = merge_json_ld([
        breadcrumb_json_ld(site, &Page::Programs.breadcrumbs()),
        item_list_json_ld(&project_entries(PROJECTS), "Lab Projects"),
    ]);
    if let Some(courses) = course_json_ld(site, &program_courses(INTEREST_GROUPS)) {
        schemas.extend(courses);
    }
    schemas
}

// -----------------------------------------------------------------------------
// Main Component
// -----------------------------------------------------------------------------

/// Programs page.
#[component]
pub fn ProgramsPage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let seo = PageSeo {
        title: Some("Programs - Syntesa, Software Engineering Lab UNESA".to_string()),
        description: Some(
            "Interest-group programs at the Software Engineering Lab UNESA: software development, cloud and infrastructure curricula, and the projects our members build."
                .to_string(),
        ),
        path: Page::Programs.path().to_string(),
        keywords: ["programs", "curriculum", "interest groups", "projects"]
            .iter()
            .map(|k| k.to_string())
            .collect(),
        ..PageSeo::default()
    };
    let schemas = programs_schemas(&config.site);

    view! {
        <PageHead seo=seo schemas=schemas />
        <div class="page page-programs">
            <section aria-labelledby="programs-heading" class="section programs-hero">
                <div class="section-frame">
                    <Reveal clip=true>
                        <h1 id="programs-heading" class="programs-title">"Programs"</h1>
                    </Reveal>
                    <Reveal delay=0.15>
                        <p class="programs-intro">
                            "Two interest groups, each with its own curriculum, mentors and projects. Members pick one and learn by building."
                        </p>
                    </Reveal>
                </div>
            </section>

            <section aria-labelledby="curricula-heading" class="section">
                <div class="section-frame">
                    <SectionHeader
                        label="Curricula"
                        index="01"
                        heading_id="curricula-heading"
                        headline="What each interest group covers."
                    />
                    <StaggerList stagger=0.1 class="program-grid">
                        {INTEREST_GROUPS
                            .iter()
                            .enumerate()
                            .map(|(i, group)| view! {
                                <StaggerItem index=i>
                                    <article class="program-card">
                                        <span class="program-index" aria-hidden="true">{ordinal(i + 1)}</span>
                                        <h3 class="program-title">{group.name.as_str()}</h3>
                                        <p class="program-description">{group.description}</p>
                                        <ol class="program-topics">
                                            {group
                                                .name
                                                .details()
                                                .iter()
                                                .map(|topic| view! { <li class="program-topic">{*topic}</li> })
                                                .collect_view()}
                                        </ol>
                                    </article>
                                </StaggerItem>
                            })
                            .collect_view()}
                    </StaggerList>
                </div>
            </section>

            <section aria-labelledby="projects-heading" class="section">
                <div class="section-frame">
                    <SectionHeader
                        label="Projects"
                        index="02"
                        heading_id="projects-heading"
                        headline="What we are building right now."
                    />
                    <ul class="project-list">
                        {PROJECTS
                            .iter()
                            .enumerate()
                            .map(|(i, project)| view! { <ProjectRow project=*project index=i /> })
                            .collect_view()}
                    </ul>
                </div>
            </section>
        </div>
    }
}

/// A project with its status badge and a progress bar that fills once the
/// row is in view.
#[component]
fn ProjectRow(project: Project, index: usize) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let visible = use_in_view(node, InViewOptions { threshold: 0.3, once: true });
    let reduced = prefers_reduced_motion();
    let percent = project.percent();

    let bar_style = move || {
        let width = if visible.get() || reduced { percent } else { 0 };
        format!(
            "width: {}%; transition-delay: {}ms;",
            width,
            if reduced { 0 } else { index * 120 }
        )
    };

    view! {
        <li class="project-row">
            <div node_ref=node class="project-row-inner">
                <div class="project-row-head">
                    <h3 class="project-title">{project.title}</h3>
                    <span class=format!("project-status {}", project.status.badge_class())>
                        {project.status.as_str()}
                    </span>
                </div>
                <p class="project-description">{project.description}</p>
                <div
                    class="project-progress"
                    role="progressbar"
                    aria-label=format!("{} progress", project.title)
                    aria-valuemin="0"
                    aria-valuemax="100"
                    aria-valuenow=percent.to_string()
                >
                    <div class="project-progress-bar" style=bar_style></div>
                </div>
                <span class="project-percent">{format!("{}%", percent)}</span>
            </div>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syntesa_common::SITE_META;

    #[test]
    fn test_program_courses_carry_curriculum() {
        let courses = program_courses(INTEREST_GROUPS);
        assert_eq!(courses.len(), INTEREST_GROUPS.len());
        assert_eq!(courses[0].name, "Software Development");
        assert_eq!(courses[0].topics.len(), 5);
        assert!(courses[0].provider.is_none());
    }

    #[test]
    fn test_programs_schemas() {
        let schemas = programs_schemas(&SITE_META);
        let types: Vec<&str> = schemas
            .iter()
            .filter_map(|s| s["@type"].as_str())
            .collect();
        assert_eq!(types[0], "BreadcrumbList");
        assert_eq!(types[1], "ItemList");
        assert_eq!(types.iter().filter(|t| **t == "Course").count(), INTEREST_GROUPS.len());
    }
}
