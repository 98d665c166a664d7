//! Site footer: contact block, hours, navigation, client portal.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::practice::{
    COPYRIGHT, CREDENTIAL, EMAIL, FOOTER_ADDRESS, FOOTER_NAV, LEGAL_LINKS, PHONE, PORTAL_URL, PRACTICE_HOURS,
    PRACTITIONER_SHORT,
};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__grid">
                <div class="site-footer__column">
                    <h3 class="site-footer__name">{PRACTITIONER_SHORT}</h3>
                    <div class="site-footer__details">
                        <p>{CREDENTIAL}</p>
                        {FOOTER_ADDRESS.iter().map(|line| view! { <p>{*line}</p> }).collect_view()}
                        <br/>
                        <a class="site-footer__email" href=format!("mailto:{EMAIL}")>{EMAIL}</a>
                        <p>{PHONE}</p>
                    </div>
                </div>
                <div class="site-footer__column">
                    <h4 class="site-footer__heading">"Practice Hours"</h4>
                    <div class="site-footer__details">
                        {PRACTICE_HOURS.iter().map(|line| view! { <p>{*line}</p> }).collect_view()}
                    </div>
                </div>
                <div class="site-footer__column">
                    <h4 class="site-footer__heading">"Navigation"</h4>
                    <div class="site-footer__details site-footer__nav">
                        {FOOTER_NAV
                            .iter()
                            .map(|link| view! { <A href=link.href attr:class="site-footer__link">{link.label}</A> })
                            .collect_view()}
                    </div>
                </div>
                <div class="site-footer__column">
                    <h4 class="site-footer__heading">"Client Portal"</h4>
                    <p class="site-footer__details">"Existing clients can log in to manage appointments."</p>
                    <a class="site-footer__portal" href=PORTAL_URL target="_blank" rel="noopener noreferrer">
                        "Client Login"
                    </a>
                </div>
            </div>
            <div class="site-footer__legal">
                <div class="site-footer__legal-links">
                    {LEGAL_LINKS.iter().map(|label| view! { <a href="#">{*label}</a> }).collect_view()}
                </div>
                <p>{COPYRIGHT}</p>
            </div>
        </footer>
    }
}
