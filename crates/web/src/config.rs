// =============================================================================
// Syntesa Web - Build Configuration
// =============================================================================
// Values baked in at compile time from the environment Trunk builds in:
//   SYNTESA_ENV       development | production (default production)
//   SYNTESA_SITE_URL  canonical origin used for SEO tags
// =============================================================================

use syntesa_common::{SiteMeta, SITE_META};

/// Deployment environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn parse(value: Option<&str>) -> Self {
        match value {
            Some("development") | Some("dev") => Environment::Development,
            _ => Environment::Production,
        }
    }
}

/// Site configuration provided via Leptos context.
#[derive(Clone, Copy, Debug)]
pub struct SiteConfig {
    pub environment: Environment,
    pub site: SiteMeta,
}

impl SiteConfig {
    /// Read configuration from the compile-time environment.
    pub fn from_env() -> Self {
        Self::from_values(option_env!("SYNTESA_ENV"), option_env!("SYNTESA_SITE_URL"))
    }

    fn from_values(environment: Option<&str>, site_url: Option<&'static str>) -> Self {
        let site = match site_url.filter(|url| !url.trim().is_empty()) {
            Some(url) => SITE_META.with_site_url(url),
            None => SITE_META,
        };
        Self {
            environment: Environment::parse(environment),
            site,
        }
    }

    /// Console log level for this build.
    pub fn log_level(&self) -> log::Level {
        match self.environment {
            Environment::Development => log::Level::Debug,
            Environment::Production => log::Level::Info,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_production() {
        let config = SiteConfig::from_values(None, None);
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.log_level(), log::Level::Info);
        assert_eq!(config.site.site_url, "https://syntesa.net");
    }

    #[test]
    fn test_development_overrides() {
        let config = SiteConfig::from_values(Some("development"), Some("http://localhost:8080/"));
        assert_eq!(config.log_level(), log::Level::Debug);
        assert_eq!(config.site.url("/about"), "http://localhost:8080/about");
    }

    #[test]
    fn test_blank_site_url_is_ignored() {
        let config = SiteConfig::from_values(None, Some("  "));
        assert_eq!(config.site.site_url, "https://syntesa.net");
    }
}
