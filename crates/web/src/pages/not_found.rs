// =============================================================================
// Syntesa Web - 404 Not Found Page
// =============================================================================

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_location;
use syntesa_common::{SiteError, SiteMeta};

use crate::config::SiteConfig;
use crate::utils::history_back;

fn error_title(site: &SiteMeta) -> String {
    format!("Error - {}", site.title)
}

/// Body of the `{status, error}` block printed under the message.
fn error_code_block(error: &SiteError) -> String {
    format!(
        "{} {{\n  status: \"{}\",\n  error: \"{}\"\n}}",
        error.status(),
        error.code(),
        error.message_key()
    )
}

/// Fallback for any path the router does not know.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let path = use_location().pathname.get_untracked();
    let error = SiteError::not_found(path);
    log::warn!("{}", error);

    view! {
        <Title text=error_title(&config.site) />
        <Meta name="robots" content="noindex" />
        <div class="page page-not-found">
            <div class="not-found-backdrop" aria-hidden="true">
                <div class="hero-orb hero-orb-1"></div>
                <div class="hero-orb hero-orb-2"></div>
                <div class="hero-grid"></div>
            </div>

            <div class="not-found-content">
                <div class="not-found-code-wrap">
                    <h1 class="not-found-code">{error.status()}</h1>
                    <div class="not-found-glow" aria-hidden="true"></div>
                </div>

                <div class="not-found-message">
                    <h2>{error.headline()}</h2>
                    <p>
                        "The page you're looking for doesn't exist or has been moved. Let's get you back on track."
                    </p>
                    <div class="not-found-actions">
                        <a href="/" class="btn btn-primary">"Return Home"</a>
                        <button type="button" class="btn btn-secondary" on:click=move |_| history_back()>
                            "Go Back"
                        </button>
                    </div>
                </div>

                <pre class="not-found-debug desktop-only">
                    <code>{error_code_block(&error)}</code>
                </pre>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syntesa_common::SITE_META;

    #[test]
    fn test_error_title() {
        assert_eq!(error_title(&SITE_META), format!("Error - {}", SITE_META.title));
    }

    #[test]
    fn test_error_code_block() {
        let block = error_code_block(&SiteError::not_found("/missing"));
        assert_eq!(
            block,
            "404 {\n  status: \"not_found\",\n  error: \"page_not_found\"\n}"
        );
    }
}
