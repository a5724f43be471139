//! # Syntesa Common
//!
//! Target-independent pieces of the Syntesa lab website: the static content
//! rendered by the pages, site metadata and routing, SEO tag and JSON-LD
//! generation, and the math behind the scroll and motion primitives.
//!
//! Nothing in this crate touches the DOM, so everything here is exercised by
//! plain `cargo test` on the host.

pub mod content;
pub mod error;
pub mod motion;
pub mod seo;
pub mod site;
pub mod theme;

pub use error::{ParseThemeError, SiteError};
pub use site::{Page, SiteMeta, SITE_META};
pub use theme::{Theme, ThemePreference};
