//! Practice copy shared by the pages and the footer.

/// Question/answer (or label/detail) pair rendered by an accordion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccordionEntry {
    pub title: &'static str,
    pub answer: &'static str,
}

/// Specialty card on the home page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusArea {
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
}

/// Internal link shown in the footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const PRACTITIONER: &str = "Dr. Maya Reynolds, PsyD";
pub const PRACTITIONER_SHORT: &str = "Maya Reynolds, PsyD";
pub const CREDENTIAL: &str = "Licensed Clinical Psychologist";
pub const PHONE: &str = "(310) 555-0123";
pub const EMAIL: &str = "contact@drmayareynolds.com";

pub const FOOTER_ADDRESS: &[&str] = &["123th Street 45 W", "Santa Monica, CA 90401"];
pub const OFFICE_ADDRESS: &[&str] = &["123 4th Street", "Santa Monica, CA 90401"];

pub const PRACTICE_HOURS: &[&str] = &["Mon - Thu: 9am - 6pm", "Fri: 9am - 2pm", "Sat - Sun: Closed"];
pub const OFFICE_HOURS: &[&str] = &["Monday – Thursday", "9am – 6pm"];

pub const DOCTOR_IMAGE: &str = "https://lh3.googleusercontent.com/d/1koVGhvD8mkiRXRukqrklo0HbB48p9PIa";
pub const OFFICE_IMAGES: [&str; 2] = [
    "https://lh3.googleusercontent.com/d/1DwpoQD0VWsfGsl4J1CwtSb3Wxy5ePVJW",
    "https://lh3.googleusercontent.com/d/1EqlCJsSNzGI93VgaQULRIwoFP2xiFioy",
];
pub const COFFEE_IMAGE: &str =
    "https://images.unsplash.com/photo-1499916078039-922301b0eb9b?q=80&w=2000&auto=format&fit=crop";
pub const SUPPORT_IMAGE: &str =
    "https://images.unsplash.com/photo-1766808982424-86d5200fa152?q=80&w=687&auto=format&fit=crop";
pub const FAQ_IMAGE: &str =
    "https://images.unsplash.com/photo-1605256585681-455837661b18?q=80&w=2000&auto=format&fit=crop";
pub const BLOG_HEADER_IMAGE: &str =
    "https://images.unsplash.com/photo-1693122078320-5849c9343d31?q=80&w=685&auto=format&fit=crop";
pub const CONTACT_IMAGE: &str =
    "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?q=80&w=2073&auto=format&fit=crop";

/// Google Maps embed centred on the Santa Monica office.
pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3305.7332480437007!2d-118.4966750234716!3d34.01210851921!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x80c2a4d05e3f4327%3A0x6a048753f86e0691!2sSanta%20Monica%2C%20CA%2090401!5e0!3m2!1sen!2sus!4v1708100000000!5m2!1sen!2sus";

/// Scheduling portal the booking widget links out to.
pub const PORTAL_URL: &str = "https://www.simplepractice.com/";

pub const FAQ: &[AccordionEntry] = &[
    AccordionEntry {
        title: "Do you offer In-Person or Online sessions?",
        answer: "I offer both. My office is located in Santa Monica for in-person sessions. I also provide \
            secure telehealth video sessions for clients located anywhere in California.",
    },
    AccordionEntry {
        title: "What is your approach to trauma?",
        answer: "My approach is paced carefully, emphasizing safety and stabilization first. We don't rush \
            into the deep end. I use evidence-based modalities like EMDR and somatic techniques to help \
            regulate your nervous system.",
    },
    AccordionEntry {
        title: "Do you take insurance?",
        answer: "I am an out-of-network provider. This allows us to focus on your needs rather than \
            insurance limitations. I can provide a superbill for you to submit to your insurance for \
            potential reimbursement.",
    },
];

pub const BACKGROUND: &[AccordionEntry] = &[
    AccordionEntry {
        title: "Education & Training",
        answer: "Doctor of Psychology (PsyD) in Clinical Psychology. Extensive training in Trauma-Informed \
            Care, CBT, and Mindfulness-Based Stress Reduction.",
    },
    AccordionEntry {
        title: "Licensure",
        answer: "Licensed Clinical Psychologist in the state of California.",
    },
    AccordionEntry {
        title: "Memberships",
        answer: "American Psychological Association (APA), California Psychological Association.",
    },
];

pub const FOCUS_AREAS: &[FocusArea] = &[
    FocusArea {
        title: "Anxiety & Overwhelm",
        description: "For those who feel constantly 'on.' We work to soothe the nervous system and quiet \
            the cycle of worry and tension.",
        image_url: "https://images.unsplash.com/photo-1650850048713-5460c8f143ab?q=80&w=764&auto=format&fit=crop",
    },
    FocusArea {
        title: "Trauma & Healing",
        description: "Whether it's a single incident or complex patterns from childhood, we pace the work \
            carefully to rebuild safety and resilience.",
        image_url: "https://images.unsplash.com/photo-1518156677180-95a2893f3e9f?q=80&w=2000&auto=format&fit=crop",
    },
    FocusArea {
        title: "Burnout & Perfectionism",
        description: "Reconnect with yourself after years of pushing through stress. Ideal for \
            entrepreneurs and creatives feeling disconnected.",
        image_url: "https://images.unsplash.com/photo-1517048676732-d65bc937f952?q=80&w=2000&auto=format&fit=crop",
    },
];

pub const STRUGGLES: &[&str] = &[
    "A constant sense of internal pressure or perfectionism",
    "Difficulty relaxing or feeling safe in your body",
    "Impact of past trauma on current relationships",
    "Professional burnout and loss of creativity",
    "Anxiety that feels unmanageable despite your success",
];

pub const OFFICE_FEATURES: &[&str] =
    &["In-Person in Santa Monica", "Secure Telehealth Available", "Private & Confidential"];

pub const FOOTER_NAV: &[FooterLink] = &[
    FooterLink { label: "Home", href: "/" },
    FooterLink { label: "Book Consultation", href: "/contact" },
    FooterLink { label: "Blog & Resources", href: "/blog" },
];

pub const LEGAL_LINKS: &[&str] = &["Privacy Policy", "Good Faith Estimate", "Terms of Service"];

pub const COPYRIGHT: &str = "© 2026 Maya Reynolds, PsyD. All Rights Reserved.";
