//! # SEO
//!
//! Head tags and schema.org JSON-LD for each page. Everything is returned as
//! plain data; the web crate renders it with `leptos_meta`.

use serde_json::{json, Value};

use crate::site::{Breadcrumb, SiteMeta};
use crate::theme::Theme;

// ============================================================================
// Head tags
// ============================================================================

/// One `<meta>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaTag {
    Name { name: String, content: String },
    Property { property: String, content: String },
    HttpEquiv { http_equiv: String, content: String },
}

impl MetaTag {
    fn name(name: &str, content: impl Into<String>) -> Self {
        Self::Name {
            name: name.to_string(),
            content: content.into(),
        }
    }

    fn property(property: &str, content: impl Into<String>) -> Self {
        Self::Property {
            property: property.to_string(),
            content: content.into(),
        }
    }

    /// Value of the `content` attribute.
    pub fn content(&self) -> &str {
        match self {
            Self::Name { content, .. }
            | Self::Property { content, .. }
            | Self::HttpEquiv { content, .. } => content,
        }
    }

    /// The `name`, `property` or `http-equiv` key.
    pub fn key(&self) -> &str {
        match self {
            Self::Name { name, .. } => name,
            Self::Property { property, .. } => property,
            Self::HttpEquiv { http_equiv, .. } => http_equiv,
        }
    }
}

/// One `<link>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTag {
    pub rel: &'static str,
    pub href: String,
    pub crossorigin: Option<&'static str>,
}

/// Per-page overrides; anything left `None` falls back to the site defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSeo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub path: String,
    pub og_image: Option<String>,
    pub keywords: Vec<String>,
    pub og_type: Option<String>,
}

/// Title plus the meta tags for a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub tags: Vec<MetaTag>,
}

impl PageMeta {
    pub fn find(&self, key: &str) -> Option<&str> {
        self.tags.iter().find(|t| t.key() == key).map(MetaTag::content)
    }
}

/// Title, description, keywords, Open Graph and Twitter tags for a page.
pub fn generate_meta(site: &SiteMeta, page: &PageSeo) -> PageMeta {
    let title = page.title.clone().unwrap_or_else(|| site.title.to_string());
    let description = page
        .description
        .clone()
        .unwrap_or_else(|| site.description.to_string());
    let url = site.url(&page.path);
    let image = page
        .og_image
        .clone()
        .unwrap_or_else(|| site.og_image.to_string());
    let og_type = page.og_type.clone().unwrap_or_else(|| "website".to_string());

    let keywords: Vec<&str> = site
        .keywords
        .iter()
        .copied()
        .chain(page.keywords.iter().map(String::as_str))
        .collect();

    let tags = vec![
        MetaTag::name("description", description.clone()),
        MetaTag::name("keywords", keywords.join(", ")),
        MetaTag::property("og:title", title.clone()),
        MetaTag::property("og:description", description.clone()),
        MetaTag::property("og:type", og_type),
        MetaTag::property("og:url", url),
        MetaTag::property("og:image", image.clone()),
        MetaTag::property("og:image:width", "1200"),
        MetaTag::property("og:image:height", "630"),
        MetaTag::property("og:image:alt", title.clone()),
        MetaTag::property("og:site_name", site.site_name),
        MetaTag::property("og:locale", site.locale),
        MetaTag::name("twitter:card", "summary_large_image"),
        MetaTag::name("twitter:site", site.twitter_handle),
        MetaTag::name("twitter:creator", site.twitter_handle),
        MetaTag::name("twitter:title", title.clone()),
        MetaTag::name("twitter:description", description),
        MetaTag::name("twitter:image", image),
        MetaTag::name("twitter:image:alt", title.clone()),
    ];

    PageMeta { title, tags }
}

/// Referrer policy and MIME-sniffing guard.
pub fn generate_security_meta() -> Vec<MetaTag> {
    vec![
        MetaTag::name("referrer", "strict-origin-when-cross-origin"),
        MetaTag::HttpEquiv {
            http_equiv: "X-Content-Type-Options".to_string(),
            content: "nosniff".to_string(),
        },
    ]
}

/// `theme-color` matching the active theme.
pub fn generate_theme_color_meta(site: &SiteMeta, theme: Theme) -> MetaTag {
    let color = if theme.is_dark() {
        site.theme_color.dark
    } else {
        site.theme_color.light
    };
    MetaTag::name("theme-color", color)
}

/// Canonical link for a page.
pub fn generate_links(site: &SiteMeta, path: &str) -> Vec<LinkTag> {
    vec![LinkTag {
        rel: "canonical",
        href: site.url(path),
        crossorigin: None,
    }]
}

/// Preconnect and DNS prefetch hints for third-party origins.
pub fn generate_preconnect_links() -> Vec<LinkTag> {
    vec![
        LinkTag {
            rel: "preconnect",
            href: "https://fonts.googleapis.com".to_string(),
            crossorigin: None,
        },
        LinkTag {
            rel: "preconnect",
            href: "https://fonts.gstatic.com".to_string(),
            crossorigin: Some("anonymous"),
        },
        LinkTag {
            rel: "dns-prefetch",
            href: "https://discord.gg".to_string(),
            crossorigin: None,
        },
        LinkTag {
            rel: "dns-prefetch",
            href: "https://github.com".to_string(),
            crossorigin: None,
        },
    ]
}

// ============================================================================
// JSON-LD
// ============================================================================

const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseItem {
    pub name: String,
    pub description: String,
    pub provider: Option<String>,
    pub duration: Option<String>,
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemListEntry {
    pub name: String,
    pub url: Option<String>,
    pub description: Option<String>,
}

pub fn organization_json_ld(site: &SiteMeta) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "EducationalOrganization",
        "name": site.site_name,
        "alternateName": site.alternate_name,
        "url": site.site_url,
        "logo": site.url("/favicon.ico"),
        "description": site.description,
        "email": site.email,
        "sameAs": [site.social.github, site.social.instagram, site.social.discord],
        "address": {
            "@type": "PostalAddress",
            "streetAddress": site.address.street,
            "addressLocality": site.address.locality,
            "addressRegion": site.address.region,
            "addressCountry": site.address.country,
        },
        "parentOrganization": {
            "@type": "CollegeOrUniversity",
            "name": site.parent.name,
            "alternateName": site.parent.alternate_name,
            "url": site.parent.url,
        },
    })
}

pub fn website_json_ld(site: &SiteMeta) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "WebSite",
        "name": site.site_name,
        "url": site.site_url,
    })
}

pub fn breadcrumb_json_ld(site: &SiteMeta, items: &[Breadcrumb]) -> Option<Value> {
    if items.is_empty() {
        return None;
    }
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": item.name,
                "item": site.url(item.path),
            })
        })
        .collect();
    Some(json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    }))
}

pub fn faq_json_ld(items: &[FaqItem]) -> Option<Value> {
    if items.is_empty() {
        return None;
    }
    let questions: Vec<Value> = items
        .iter()
        .map(|item| {
            json!({
                "@type": "Question",
                "name": item.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": item.answer,
                },
            })
        })
        .collect();
    Some(json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "FAQPage",
        "mainEntity": questions,
    }))
}

/// One `Course` object per course.
pub fn course_json_ld(site: &SiteMeta, courses: &[CourseItem]) -> Option<Vec<Value>> {
    if courses.is_empty() {
        return None;
    }
    let list = courses
        .iter()
        .map(|course| {
            let mut value = json!({
                "@context": SCHEMA_CONTEXT,
                "@type": "Course",
                "name": course.name,
                "description": course.description,
                "provider": {
                    "@type": "EducationalOrganization",
                    "name": course.provider.as_deref().unwrap_or(site.site_name),
                    "url": site.site_url,
                },
            });
            if let Some(duration) = &course.duration {
                value["timeRequired"] = json!(duration);
            }
            if !course.topics.is_empty() {
                let sections: Vec<Value> = course
                    .topics
                    .iter()
                    .enumerate()
                    .map(|(i, topic)| {
                        json!({
                            "@type": "Syllabus",
                            "position": i + 1,
                            "name": topic,
                        })
                    })
                    .collect();
                value["syllabusSections"] = Value::Array(sections);
            }
            value
        })
        .collect();
    Some(list)
}

pub fn item_list_json_ld(items: &[ItemListEntry], list_name: &str) -> Option<Value> {
    if items.is_empty() {
        return None;
    }
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let mut value = json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": item.name,
            });
            if let Some(url) = &item.url {
                value["url"] = json!(url);
            }
            if let Some(description) = &item.description {
                value["description"] = json!(description);
            }
            value
        })
        .collect();
    Some(json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "ItemList",
        "name": list_name,
        "itemListElement": elements,
    }))
}

/// Collects the schemas that are present into one array.
pub fn merge_json_ld<I>(schemas: I) -> Vec<Value>
where
    I: IntoIterator<Item = Option<Value>>,
{
    schemas.into_iter().flatten().collect()
}

/// Serialised `<script type="application/ld+json">` body, or `None` when
/// there is nothing to emit.
pub fn render_json_ld(schemas: &[Value]) -> Option<String> {
    if schemas.is_empty() {
        return None;
    }
    match serde_json::to_string(schemas) {
        Ok(body) => Some(body.replace("</", "<\\/")),
        Err(err) => {
            tracing::warn!("failed to serialise JSON-LD: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::{Page, SITE_META};

    #[test]
    fn test_default_meta() {
        let meta = generate_meta(&SITE_META, &PageSeo::default());
        assert_eq!(meta.title, SITE_META.title);
        assert_eq!(meta.find("og:url"), Some("https://syntesa.net"));
        assert_eq!(meta.find("og:type"), Some("website"));
        assert_eq!(meta.find("og:image:width"), Some("1200"));
        assert_eq!(meta.find("og:image:height"), Some("630"));
        assert_eq!(meta.find("twitter:card"), Some("summary_large_image"));
        assert_eq!(meta.find("twitter:site"), Some("@wearesyntesa"));
        assert_eq!(meta.find("og:image"), Some(SITE_META.og_image));
    }

    #[test]
    fn test_page_keywords_follow_site_keywords() {
        let page = PageSeo {
            title: Some("About - Syntesa, Software Engineering Lab UNESA".into()),
            path: "/about".into(),
            keywords: vec!["about".into(), "mission".into()],
            ..PageSeo::default()
        };
        let meta = generate_meta(&SITE_META, &page);
        let keywords = meta.find("keywords").unwrap();
        assert!(keywords.starts_with("software engineering, lab"));
        assert!(keywords.ends_with("Surabaya, about, mission"));
        assert_eq!(meta.find("og:url"), Some("https://syntesa.net/about"));
        assert_eq!(meta.find("twitter:image:alt"), page.title.as_deref());
    }

    #[test]
    fn test_links() {
        let links = generate_links(&SITE_META, "/programs");
        assert_eq!(links[0].rel, "canonical");
        assert_eq!(links[0].href, "https://syntesa.net/programs");

        let hints = generate_preconnect_links();
        assert_eq!(hints.len(), 4);
        assert_eq!(hints[1].crossorigin, Some("anonymous"));
    }

    #[test]
    fn test_security_meta() {
        let tags = generate_security_meta();
        assert_eq!(tags[0].content(), "strict-origin-when-cross-origin");
        assert_eq!(tags[1].key(), "X-Content-Type-Options");
    }

    #[test]
    fn test_theme_color_follows_theme() {
        let light = generate_theme_color_meta(&SITE_META, Theme::Light);
        let dark = generate_theme_color_meta(&SITE_META, Theme::Dark);
        assert_eq!(light.key(), "theme-color");
        assert_eq!(light.content(), SITE_META.theme_color.light);
        assert_eq!(dark.content(), SITE_META.theme_color.dark);
    }

    #[test]
    fn test_organization() {
        let org = organization_json_ld(&SITE_META);
        assert_eq!(org["@type"], "EducationalOrganization");
        assert_eq!(org["logo"], "https://syntesa.net/favicon.ico");
        assert_eq!(org["address"]["addressCountry"], "ID");
        assert_eq!(org["parentOrganization"]["url"], "https://unesa.ac.id");
        assert_eq!(org["sameAs"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn test_breadcrumbs() {
        let crumbs = breadcrumb_json_ld(&SITE_META, &Page::About.breadcrumbs()).unwrap();
        let items = crumbs["itemListElement"].as_array().unwrap();
        assert_eq!(items[0]["position"], 1);
        assert_eq!(items[0]["item"], "https://syntesa.net");
        assert_eq!(items[1]["item"], "https://syntesa.net/about");
        assert!(breadcrumb_json_ld(&SITE_META, &[]).is_none());
    }

    #[test]
    fn test_faq() {
        assert!(faq_json_ld(&[]).is_none());
        let faq = faq_json_ld(&[FaqItem {
            question: "Q?".into(),
            answer: "A.".into(),
        }])
        .unwrap();
        assert_eq!(faq["mainEntity"][0]["acceptedAnswer"]["text"], "A.");
    }

    #[test]
    fn test_courses() {
        assert!(course_json_ld(&SITE_META, &[]).is_none());
        let courses = course_json_ld(
            &SITE_META,
            &[
                CourseItem {
                    name: "Cloud".into(),
                    description: "Infra".into(),
                    topics: vec!["Linux".into(), "Networks".into()],
                    ..CourseItem::default()
                },
                CourseItem {
                    name: "Web".into(),
                    description: "Apps".into(),
                    provider: Some("Partner".into()),
                    duration: Some("P6M".into()),
                    ..CourseItem::default()
                },
            ],
        )
        .unwrap();
        assert_eq!(courses[0]["provider"]["name"], "Syntesa");
        assert_eq!(courses[0]["syllabusSections"][1]["position"], 2);
        assert!(courses[0].get("timeRequired").is_none());
        assert_eq!(courses[1]["provider"]["name"], "Partner");
        assert_eq!(courses[1]["timeRequired"], "P6M");
        assert!(courses[1].get("syllabusSections").is_none());
    }

    #[test]
    fn test_item_list_optional_fields() {
        let list = item_list_json_ld(
            &[ItemListEntry {
                name: "One".into(),
                ..ItemListEntry::default()
            }],
            "Things",
        )
        .unwrap();
        assert_eq!(list["name"], "Things");
        assert!(list["itemListElement"][0].get("url").is_none());
        assert!(item_list_json_ld(&[], "Empty").is_none());
    }

    #[test]
    fn test_merge_and_render() {
        let merged = merge_json_ld([Some(website_json_ld(&SITE_META)), None, faq_json_ld(&[])]);
        assert_eq!(merged.len(), 1);
        let body = render_json_ld(&merged).unwrap();
        assert!(body.starts_with('['));
        assert!(render_json_ld(&[]).is_none());
    }

    #[test]
    fn test_render_escapes_script_close() {
        let body = render_json_ld(&[json!({ "name": "</script>" })]).unwrap();
        assert!(!body.contains("</script>"));
    }
}
