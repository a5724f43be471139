// =============================================================================
// Syntesa Web - Page Components
// =============================================================================
// Table of Contents:
// 1. Routed Pages (home, programs, about)
// 2. Fallback (not found)
// =============================================================================

pub mod about;
pub mod home;
pub mod not_found;
pub mod programs;

pub use about::AboutPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use programs::ProgramsPage;
