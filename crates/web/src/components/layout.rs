// =============================================================================
// Syntesa Web - Layout
// =============================================================================

use leptos::prelude::*;

use super::footer::Footer;
use super::nav::Navbar;

/// Page shell: navbar, routed content and footer.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <a href="#main-content" class="skip-link">"Skip to content"</a>
            <Navbar />
            <main id="main-content" class="layout-content">
                {children()}
            </main>
            <Footer />
        </div>
    }
}
