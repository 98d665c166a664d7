//! Contact page: introduction, privacy notice, booking portal, office + map.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::practice::{CONTACT_IMAGE, EMAIL, MAP_EMBED_URL, OFFICE_ADDRESS, OFFICE_HOURS, PHONE, PORTAL_URL};

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section class="contact-header">
            <div class="contact-header__copy">
                <Reveal>
                    <h1 class="contact-header__title">"Let's Connect"</h1>
                    <p class="contact-header__tagline">"Take the first step towards clarity."</p>
                    <p class="contact-header__eyebrow">"Get in touch for a free 15-minute phone consultation."</p>
                    <div class="contact-header__arch">
                        <img class="contact-header__image" src=CONTACT_IMAGE alt="Santa Monica Beach"/>
                    </div>
                </Reveal>
            </div>
            <div class="contact-header__notice">
                <Reveal delay_ms=200>
                    <div class="privacy-notice">
                        <p class="privacy-notice__label">"Important:"</p>
                        <p class="privacy-notice__text">
                            "To protect your privacy, please do not include sensitive health information in this form. We can discuss specific clinical concerns during our initial consultation call."
                        </p>
                    </div>
                </Reveal>
            </div>
        </section>

        <section class="booking">
            <Reveal>
                <h2 class="booking__title">"Book a session."</h2>
                <p class="booking__copy">
                    "Use the portal below to schedule your initial consultation or regular therapy session."
                </p>
                <div class="booking__widget">
                    <p class="booking__widget-label">"SIMPLEPRACTICE WIDGET"</p>
                    <a class="btn btn--primary" href=PORTAL_URL target="_blank" rel="noopener noreferrer">
                        "Go to Portal"
                    </a>
                </div>
            </Reveal>
        </section>

        <section class="office-map">
            <div class="office-map__details">
                <Reveal>
                    <h3 class="office-map__title">"My Office"</h3>
                    <div class="office-map__block">
                        <p class="office-map__city">"Santa Monica"</p>
                        {OFFICE_ADDRESS.iter().map(|line| view! { <p>{*line}</p> }).collect_view()}
                    </div>
                    <div class="office-map__block">
                        <h4 class="office-map__label">"Hours"</h4>
                        {OFFICE_HOURS.iter().map(|line| view! { <p>{*line}</p> }).collect_view()}
                    </div>
                    <div class="office-map__block">
                        <p>{PHONE}</p>
                        <p>{EMAIL}</p>
                    </div>
                </Reveal>
            </div>
            <div class="office-map__embed">
                <iframe
                    title="Office location map"
                    src=MAP_EMBED_URL
                    width="100%"
                    height="100%"
                    style="border:0"
                    allowfullscreen=""
                    referrerpolicy="no-referrer-when-downgrade"
                ></iframe>
            </div>
        </section>
    }
}
