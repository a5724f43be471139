// =============================================================================
// Syntesa Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Layout Components (layout, navigation, footer, map)
// 2. Motion Components (reveal, counter, scramble, marquee, section header)
// 3. Head Components (SEO)
// =============================================================================

pub mod counter;
pub mod footer;
pub mod layout;
pub mod map;
pub mod marquee;
pub mod nav;
pub mod reveal;
pub mod scramble;
pub mod section;
pub mod seo;
pub mod theme_toggle;

pub use counter::{AnimatedCounter, StatCounter};
pub use footer::Footer;
pub use layout::Layout;
pub use map::LabMap;
pub use marquee::{DragMarquee, MarqueeDivider};
pub use nav::Navbar;
pub use reveal::{BorderDraw, LineReveal, Reveal, StaggerItem, StaggerList};
pub use scramble::ScrambleText;
pub use section::{CornerMarks, SectionHeader};
pub use seo::{PageHead, SiteHead};
pub use theme_toggle::DarkModeToggle;
