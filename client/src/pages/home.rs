//! Home page: hero, practice introduction, focus areas, office, bio, FAQ,
//! professional background, and the closing call to action.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::accordion::AccordionGroup;
use crate::components::reveal::{Reveal, RevealMargin};
use crate::content::practice::{
    BACKGROUND, COFFEE_IMAGE, CREDENTIAL, DOCTOR_IMAGE, FAQ, FAQ_IMAGE, FOCUS_AREAS, OFFICE_FEATURES, OFFICE_IMAGES,
    STRUGGLES, SUPPORT_IMAGE,
};
use crate::state::accordion::AccordionState;
use crate::state::reveal::HOME_ROOT_MARGIN;

#[component]
pub fn HomePage() -> impl IntoView {
    provide_context(RevealMargin(HOME_ROOT_MARGIN));

    // Two independent groups: opening a FAQ row never touches the background rows.
    let faq = RwSignal::new(AccordionState::new(FAQ.len()));
    let background = RwSignal::new(AccordionState::new(BACKGROUND.len()));

    view! {
        <section class="hero">
            <div class="hero__media hero__media--enter-left">
                <div class="hero__arch">
                    <img class="hero__image" src=DOCTOR_IMAGE alt="Calm ocean view in Santa Monica"/>
                </div>
            </div>
            <div class="hero__copy hero__copy--enter-right">
                <h1 class="hero__title">
                    "Reconnect with " <br/>
                    <span class="hero__title-accent">"your true self."</span>
                </h1>
                <p class="hero__eyebrow">{CREDENTIAL} " | Santa Monica, CA"</p>
                <p class="hero__lead">
                    "Specialized therapy for high-achieving adults navigating anxiety, burnout, and the lingering effects of past experiences."
                </p>
                <A href="/contact" attr:class="btn btn--primary">"Begin Your Journey →"</A>
            </div>
        </section>

        <section class="split">
            <div class="split__copy">
                <Reveal>
                    <h2 class="section-title">"Functional on the outside, exhausted on the inside?"</h2>
                    <div class="rule"></div>
                    <p class="body-copy">
                        "Many of the people I work with are high-achieving, thoughtful, and self-aware. You might keep it together professionally, but internally feel stuck in overthinking, on edge, or always bracing for something to go wrong."
                    </p>
                    <p class="body-copy">
                        "I offer a space to slow down, process the impact of past experiences, and develop sustainable ways of living and working."
                    </p>
                    <A href="/contact" attr:class="text-link">"READ MORE ABOUT MY APPROACH"</A>
                </Reveal>
            </div>
            <div class="split__media">
                <Reveal delay_ms=200>
                    <img class="split__image" src=COFFEE_IMAGE alt="Mindfulness moment"/>
                </Reveal>
            </div>
        </section>

        <section class="focus">
            <Reveal>
                <h2 class="section-title section-title--center">"Areas of Focus"</h2>
            </Reveal>
            <Reveal>
                <p class="focus__intro">
                    "Integrating evidence-based methods like CBT, EMDR, and mindfulness to help you find balance."
                </p>
            </Reveal>
            <div class="focus__grid">
                {FOCUS_AREAS
                    .iter()
                    .zip((0_u32..).step_by(100))
                    .map(|(area, delay_ms)| {
                        view! {
                            <Reveal delay_ms>
                                <div class="focus-card">
                                    <div class="focus-card__circle">
                                        <img class="focus-card__image" src=area.image_url alt=area.title/>
                                    </div>
                                    <h3 class="focus-card__title">{area.title}</h3>
                                    <p class="focus-card__description">{area.description}</p>
                                </div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="office">
            <Reveal>
                <div class="office__inner">
                    <div class="office__copy">
                        <h2 class="section-title">"A Calm Space for Healing."</h2>
                        <div class="rule"></div>
                        <p class="body-copy">
                            "Environment matters. My Santa Monica office is designed to be a quiet, private refuge from the noise of the city."
                        </p>
                        <p class="body-copy">
                            "With natural light and a comfortable, uncluttered aesthetic, the space itself is intended to help you feel grounded the moment you walk through the door."
                        </p>
                        <ul class="office__features">
                            {OFFICE_FEATURES
                                .iter()
                                .map(|feature| view! { <li class="office__feature">{*feature}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                    <div class="office__gallery">
                        <img
                            class="office__image office__image--top"
                            src=OFFICE_IMAGES[0]
                            alt="Dr. Maya Reynolds Therapy Office Seating"
                        />
                        <img
                            class="office__image office__image--bottom"
                            src=OFFICE_IMAGES[1]
                            alt="Dr. Maya Reynolds Office Decor"
                        />
                    </div>
                </div>
            </Reveal>
        </section>

        <section class="support">
            <div class="support__media">
                <Reveal>
                    <img class="support__image" src=SUPPORT_IMAGE alt="Woman looking peaceful"/>
                </Reveal>
            </div>
            <div class="support__copy">
                <Reveal delay_ms=200>
                    <h2 class="section-title">"You don't have to carry it all alone."</h2>
                    <p class="body-copy">"If you are navigating any of these, there is a path forward:"</p>
                    <ul class="support__list">
                        {STRUGGLES.iter().map(|item| view! { <li class="support__item">{*item}</li> }).collect_view()}
                    </ul>
                    <p class="support__quote">
                        "\"Therapy works best when you feel respected, understood, and actively involved in the process.\""
                    </p>
                    <A href="/contact" attr:class="btn btn--outline">"Work With Me →"</A>
                </Reveal>
            </div>
        </section>

        <section class="bio">
            <div class="bio__copy">
                <Reveal>
                    <h2 class="section-title">"Hi, I'm Dr. Maya."</h2>
                    <h3 class="bio__credential">{CREDENTIAL}</h3>
                    <p class="body-copy">
                        "I’m a licensed clinical psychologist based in Santa Monica, offering therapy for adults who feel overwhelmed by anxiety, stress, or the lingering effects of past experiences."
                    </p>
                    <p class="body-copy">
                        "I take a warm, collaborative, and grounded approach. My goal isn't just symptom relief, but helping you develop insight, resilience, and a stronger relationship with yourself."
                    </p>
                    <A href="/contact" attr:class="btn btn--sage">"Let's Connect →"</A>
                </Reveal>
            </div>
            <div class="bio__media">
                <Reveal delay_ms=200>
                    <div class="bio__arch">
                        <img class="bio__image" src=DOCTOR_IMAGE alt="Dr. Maya Reynolds"/>
                        <div class="bio__badge">"PsyD"</div>
                    </div>
                </Reveal>
            </div>
        </section>

        <section class="faq">
            <div class="faq__intro">
                <Reveal>
                    <h2 class="section-title">"Common Questions"</h2>
                    <p class="body-copy">
                        "Therapy is an investment in your well-being. Here are some answers to help you decide if we are a good fit."
                    </p>
                    <img class="faq__image" src=FAQ_IMAGE alt="Calm texture"/>
                </Reveal>
            </div>
            <div class="faq__list">
                <Reveal delay_ms=200>
                    <AccordionGroup entries=FAQ state=faq/>
                </Reveal>
            </div>
        </section>

        <section class="background">
            <Reveal>
                <h2 class="section-title section-title--center">"Professional Background"</h2>
                <div class="background__card">
                    <AccordionGroup entries=BACKGROUND state=background/>
                </div>
            </Reveal>
        </section>

        <section class="cta">
            <Reveal>
                <h2 class="cta__title">"Reclaim your peace."</h2>
                <p class="cta__copy">
                    "Therapy can be a space to slow down, reconnect, and build a life that feels sustainable. I look forward to speaking with you."
                </p>
                <A href="/contact" attr:class="btn btn--light">"Schedule Consultation →"</A>
            </Reveal>
        </section>
    }
}
