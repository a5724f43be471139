// =============================================================================
// Syntesa Web - Footer Component
// =============================================================================

use leptos::prelude::*;
use syntesa_common::content::SOCIAL_LINKS;
use syntesa_common::site::LAB_LOCATION;
use syntesa_common::SITE_META;

use super::map::LabMap;
use crate::utils::current_year;

/// Site footer with branding, social links, contact details and the map.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="section-frame footer-inner">
                <div class="footer-grid">
                    // Branding and social
                    <div class="footer-brand">
                        <a href="/" class="footer-logo">"Syntesa"</a>
                        <p class="footer-tagline">
                            "Fostering innovation and excellence in software engineering education and research."
                        </p>
                        <ul class="footer-social">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| view! {
                                    <li>
                                        <a href=link.href target="_blank" rel="noopener noreferrer" class="footer-social-link">
                                            <span class="sr-only">{link.name}</span>
                                            <img src=format!("/assets/icons/{}.svg", link.icon) alt="" aria-hidden="true" />
                                            <span class="tooltip" aria-hidden="true">{link.name}</span>
                                        </a>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    // Contact
                    <div class="footer-contact">
                        <h3 class="footer-heading">
                            <span>"Contact Information"</span>
                            <span class="footer-heading-rule" aria-hidden="true"></span>
                        </h3>
                        <address class="footer-address">
                            <p class="footer-address-name">"Software Engineering Lab"</p>
                            <p>
                                {SITE_META.parent.name}<br />
                                {SITE_META.address.street}<br />
                                {SITE_META.address.locality}", Indonesia"
                            </p>
                            <a href=LAB_LOCATION.directions_url target="_blank" rel="noopener noreferrer" class="footer-directions">
                                <span>"Get Directions"</span>
                                <span aria-hidden="true">"→"</span>
                            </a>
                        </address>
                        <a href=format!("mailto:{}", SITE_META.email) class="footer-mail">{SITE_META.email}</a>
                    </div>
                </div>

                <div class="footer-map">
                    <LabMap />
                </div>

                <p class="footer-copyright">
                    "© " {current_year()} " Software Engineering Lab UNESA. All rights reserved."
                </p>
            </div>
        </footer>
    }
}
