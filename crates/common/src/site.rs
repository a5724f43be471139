//! # Site metadata and routes
//!
//! Canonical facts about the site (names, URLs, social handles, postal
//! address) and the small set of routes the router knows about.

// ============================================================================
// Site metadata
// ============================================================================

/// Light and dark `theme-color` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub light: &'static str,
    pub dark: &'static str,
}

/// Social profile URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialUrls {
    pub discord: &'static str,
    pub github: &'static str,
    pub instagram: &'static str,
    pub linkedin: &'static str,
}

/// Postal address of the lab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostalAddress {
    pub street: &'static str,
    pub locality: &'static str,
    pub region: &'static str,
    pub country: &'static str,
}

/// Parent institution of the lab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentOrganization {
    pub name: &'static str,
    pub alternate_name: &'static str,
    pub url: &'static str,
}

/// Everything the SEO layer needs to know about the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteMeta {
    pub title: &'static str,
    pub site_name: &'static str,
    pub alternate_name: &'static str,
    pub description: &'static str,
    pub site_url: &'static str,
    pub og_image: &'static str,
    pub locale: &'static str,
    pub twitter_handle: &'static str,
    pub email: &'static str,
    pub keywords: &'static [&'static str],
    pub theme_color: ThemeColors,
    pub social: SocialUrls,
    pub address: PostalAddress,
    pub parent: ParentOrganization,
}

impl SiteMeta {
    /// Same metadata with a different canonical origin (trailing `/` dropped).
    pub fn with_site_url(self, site_url: &'static str) -> Self {
        Self {
            site_url: site_url.trim_end_matches('/'),
            ..self
        }
    }

    /// Absolute URL for a site-relative path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.site_url, path)
    }
}

pub const SITE_META: SiteMeta = SiteMeta {
    title: "Syntesa - Software Engineering Lab, Universitas Negeri Surabaya",
    site_name: "Syntesa",
    alternate_name: "Software Engineering Lab UNESA",
    description: "Advanced software engineering education and research facility at Universitas Negeri Surabaya. Focused on software development, cloud infrastructure, and applied machine learning.",
    site_url: "https://syntesa.net",
    og_image: "https://syntesa.net/og-image.png",
    locale: "en_US",
    twitter_handle: "@wearesyntesa",
    email: "contact@syntesa.net",
    keywords: &[
        "software engineering",
        "lab",
        "UNESA",
        "Universitas Negeri Surabaya",
        "Syntesa",
        "software development",
        "cloud infrastructure",
        "machine learning",
        "research",
        "computer science",
        "Surabaya",
    ],
    theme_color: ThemeColors {
        light: "#ffffff",
        dark: "#0a0a0a",
    },
    social: SocialUrls {
        discord: "https://discord.gg/F7Wx88yZFy",
        github: "https://github.com/wearesyntesa",
        instagram: "https://instagram.com/wearesyntesa",
        linkedin: "https://linkedin.com/",
    },
    address: PostalAddress {
        street: "A10 Building, 3rd Floor, Room 3 & 4",
        locality: "Surabaya",
        region: "East Java",
        country: "ID",
    },
    parent: ParentOrganization {
        name: "Universitas Negeri Surabaya",
        alternate_name: "UNESA",
        url: "https://unesa.ac.id",
    },
};

/// Where the lab sits on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapLocation {
    pub lat: f64,
    pub lng: f64,
    pub zoom: u8,
    pub directions_url: &'static str,
}

pub const LAB_LOCATION: MapLocation = MapLocation {
    lat: -7.316280921819541,
    lng: 112.72537815940875,
    zoom: 17,
    directions_url: "https://maps.app.goo.gl/SPnszsaV74MFWKKA9",
};

// ============================================================================
// Routes
// ============================================================================

/// Routed pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Programs,
    About,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Programs, Page::About];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Programs => "/programs",
            Page::About => "/about",
        }
    }

    /// Label used in navigation and breadcrumbs.
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Programs => "Programs",
            Page::About => "About",
        }
    }

    /// Two-digit ordinal shown next to navigation entries.
    pub fn nav_index(self) -> &'static str {
        match self {
            Page::Home => "01",
            Page::Programs => "02",
            Page::About => "03",
        }
    }

    /// Breadcrumb trail from the home page to this page.
    ///
    /// Paths are site-relative; home uses the empty path so that the
    /// absolute URL is the bare origin.
    pub fn breadcrumbs(self) -> Vec<Breadcrumb> {
        let home = Breadcrumb {
            name: Page::Home.label(),
            path: "",
        };
        match self {
            Page::Home => vec![home],
            page => vec![
                home,
                Breadcrumb {
                    name: page.label(),
                    path: page.path(),
                },
            ],
        }
    }
}

/// One step of a breadcrumb trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breadcrumb {
    pub name: &'static str,
    pub path: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_and_indices_are_distinct() {
        for (i, a) in Page::ALL.iter().enumerate() {
            for b in &Page::ALL[i + 1..] {
                assert_ne!(a.path(), b.path());
                assert_ne!(a.nav_index(), b.nav_index());
            }
        }
    }

    #[test]
    fn test_breadcrumbs() {
        let crumbs = Page::About.breadcrumbs();
        assert_eq!(crumbs.len(), 2);
        assert_eq!(crumbs[0].path, "");
        assert_eq!(crumbs[1].name, "About");
        assert_eq!(crumbs[1].path, "/about");
        assert_eq!(Page::Home.breadcrumbs().len(), 1);
    }

    #[test]
    fn test_site_url_override() {
        let meta = SITE_META.with_site_url("http://localhost:8080/");
        assert_eq!(meta.url("/about"), "http://localhost:8080/about");
        assert_eq!(SITE_META.url(""), "https://syntesa.net");
    }
}
