//! Static content for the four site pages.
//!
//! Every page goes through the same layout; only the entry returned by
//! [`Page::content`] differs.

pub const SITE_NAME: &str = "Meditate for India";
pub const JOIN_CTA_LABEL: &str = "Join Meditate for India";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    AboutUs,
    JoinEvent,
    Faq,
}

pub struct Section {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
}

pub struct PageContent {
    pub title: &'static str,
    pub description: &'static str,
    pub heading: &'static str,
    pub lead_lines: &'static [&'static str],
    /// Renders the hero image above the heading.
    pub hero_image: Option<&'static str>,
    pub sections: &'static [Section],
    pub show_join_cta: bool,
}

/// One entry in the header and mobile menu.
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::AboutUs, Page::JoinEvent, Page::Faq];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::AboutUs => "/about-us",
            Page::JoinEvent => "/join-event",
            Page::Faq => "/faq",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::AboutUs => "About Us",
            Page::JoinEvent => "Join the Event",
            Page::Faq => "FAQ",
        }
    }

    pub fn content(self) -> &'static PageContent {
        match self {
            Page::Home => &HOME,
            Page::AboutUs => &ABOUT_US,
            Page::JoinEvent => &JOIN_EVENT,
            Page::Faq => &FAQ,
        }
    }

    pub fn nav_links(self) -> Vec<NavLink> {
        Page::ALL
            .iter()
            .map(|&p| NavLink {
                href: p.path(),
                label: p.nav_label(),
                active: p == self,
            })
            .collect()
    }
}

const DESCRIPTION: &str = "Meditate for India: a global 24-hour immersion in meditation, \
pranayama and chanting on 21st June 2025. Join online from anywhere in the world.";

static HOME: PageContent = PageContent {
    title: "Meditate for India",
    description: DESCRIPTION,
    heading: SITE_NAME,
    lead_lines: &[
        "A Global 24-Hour Immersion in",
        "Meditation, Pranayama and Chanting",
        "21st June 2025",
    ],
    hero_image: Some("/static/img/meditation.png"),
    sections: &[
        Section {
            heading: "One day, one intention",
            paragraphs: &[
                "For twenty-four hours practitioners across every time zone sit together, \
                 so that somewhere in the world someone is always meditating for India.",
            ],
        },
        Section {
            heading: "Three practices",
            paragraphs: &[
                "Guided meditation, pranayama breathing sessions and group chanting run \
                 in rotation through the day. Drop in for one session or stay for all of them.",
            ],
        },
    ],
    show_join_cta: true,
};

static ABOUT_US: PageContent = PageContent {
    title: "About Us | Meditate for India",
    description: DESCRIPTION,
    heading: "About Us",
    lead_lines: &["Volunteers, teachers and practitioners from across India and beyond."],
    hero_image: None,
    sections: &[
        Section {
            heading: "Who we are",
            paragraphs: &[
                "Meditate for India is organised by a community of volunteers who teach and \
                 practise yoga, meditation and pranayama.",
            ],
        },
        Section {
            heading: "Why 24 hours",
            paragraphs: &[
                "A continuous day of practice lets everyone take part at a time that suits \
                 them, wherever they live.",
            ],
        },
    ],
    show_join_cta: true,
};

static JOIN_EVENT: PageContent = PageContent {
    title: "Join the Event | Meditate for India",
    description: DESCRIPTION,
    heading: "Join the Event",
    lead_lines: &["Register once and join any session online on 21st June 2025."],
    hero_image: None,
    sections: &[
        Section {
            heading: "Join online",
            paragraphs: &[
                "Register with your name, email and phone number. The session links are \
                 sent to the email address you register with.",
            ],
        },
        Section {
            heading: "What you need",
            paragraphs: &[
                "A quiet place to sit, a stable internet connection and a mat or cushion.",
            ],
        },
    ],
    show_join_cta: true,
};

static FAQ: PageContent = PageContent {
    title: "FAQ | Meditate for India",
    description: DESCRIPTION,
    heading: "Frequently Asked Questions",
    lead_lines: &[],
    hero_image: None,
    sections: &[
        Section {
            heading: "Is the event free?",
            paragraphs: &["Yes. Registration and all sessions are free of charge."],
        },
        Section {
            heading: "Do I need prior experience?",
            paragraphs: &["No. Every session is guided and suitable for beginners."],
        },
        Section {
            heading: "Can I register twice?",
            paragraphs: &[
                "Each email address can be registered once. Use the same address to \
                 receive all session links.",
            ],
        },
    ],
    show_join_cta: false,
};
