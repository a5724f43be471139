// =============================================================================
// Syntesa Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App Component
// 3. Router Configuration
// =============================================================================

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{Layout, SiteHead};
use crate::config::SiteConfig;
use crate::pages::{AboutPage, HomePage, NotFoundPage, ProgramsPage};
use crate::state::ThemeState;

// -----------------------------------------------------------------------------
// 2. App Component
// -----------------------------------------------------------------------------

/// Root application component with routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::from_env();
    log::debug!("site config: {:?}", config);
    provide_context(config);

    // Theme was already applied by the inline script in index.html; this
    // takes over from there.
    let theme = ThemeState::new();
    theme.watch_system();
    provide_context(theme);

    // -------------------------------------------------------------------------
    // 3. Router Configuration
    // -------------------------------------------------------------------------

    view! {
        <SiteHead />
        <Router>
            <Layout>
                <Routes fallback=NotFoundPage>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/programs") view=ProgramsPage />
                    <Route path=path!("/about") view=AboutPage />
                </Routes>
            </Layout>
        </Router>
    }
}
