//! Compiled-in insights articles.

use super::{Post, PostId};

/// `const`-friendly form of [`Post`].
#[derive(Clone, Copy, Debug)]
pub struct PostRecord {
    pub id: u32,
    pub date: &'static str,
    pub title: &'static str,
    pub image_url: &'static str,
    pub description: &'static str,
}

impl PostRecord {
    #[must_use]
    pub fn to_post(&self) -> Post {
        Post {
            id: PostId(self.id),
            date: self.date.to_owned(),
            title: self.title.to_owned(),
            image_url: self.image_url.to_owned(),
            description: self.description.to_owned(),
        }
    }
}

pub const POSTS: &[PostRecord] = &[
    PostRecord {
        id: 1,
        date: "May 12, 2026",
        title: "High-Functioning Anxiety: The Silent Struggle",
        image_url: "https://images.unsplash.com/photo-1740645581682-bc1e8e37b0f3?q=80&w=1170&auto=format&fit=crop",
        description: "From the outside, everything looks fine: the deadlines are met, the calendar is full, \
            the smile is in place. Underneath, there is a constant hum of worry and a body that never quite \
            relaxes. High-functioning anxiety often goes unnoticed because it is rewarded. In this piece we \
            look at the quiet signs, why achievement can become a coping strategy, and how therapy helps \
            you keep your drive without being driven by fear.",
    },
    PostRecord {
        id: 2,
        date: "April 03, 2026",
        title: "Why Professional Success Doesn't Cure Burnout",
        image_url: "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?q=80&w=2070&auto=format&fit=crop",
        description: "Promotions, recognition and a full client list can feel like proof that you are doing \
            well, yet exhaustion keeps growing. Burnout is not a reward problem; it is a depletion problem. \
            We explore why external milestones rarely refill the tank, how perfectionism keeps the cycle \
            going, and what sustainable rhythms of work and rest can look like.",
    },
    PostRecord {
        id: 3,
        date: "March 15, 2026",
        title: "Grounding Techniques for Panic Moments",
        image_url: "https://images.unsplash.com/photo-1470252649378-9c29740c9fa8?q=80&w=2070&auto=format&fit=crop",
        description: "When panic rises, the thinking brain goes offline and the body takes over. Grounding \
            techniques give your nervous system a way back to the present moment. Try the 5-4-3-2-1 senses \
            exercise, slow exhale breathing, or pressing your feet firmly into the floor. Practiced when \
            you are calm, these tools become easier to reach when you need them most.",
    },
    PostRecord {
        id: 4,
        date: "Feb 20, 2026",
        title: "Healing from Past Trauma in Adulthood",
        image_url: "https://images.unsplash.com/photo-1518531933037-91b2f5f229cc?q=80&w=1854&auto=format&fit=crop",
        description: "Past experiences can shape how safe we feel in relationships, at work and in our own \
            bodies long after the events themselves. Healing is not about reliving everything at once. It \
            begins with stabilization and safety, then moves at a pace your system can tolerate. Here is \
            what trauma-informed therapy looks like in practice.",
    },
];
