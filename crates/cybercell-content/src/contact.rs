use cybercell_types::{Gradient, Hue, Icon, InfoCard, InfoLine, Route};

use crate::page::{Headline, Hero, Page, Section, SectionBody};

static CHANNELS: [InfoCard; 2] = [
    InfoCard {
        icon: Some(Icon::Mail),
        title: "Get in Touch",
        lines: &[
            InfoLine {
                text: "Email us at: team@pynevera.com",
                link: Some("mailto:team@pynevera.com"),
            },
            InfoLine {
                text: "For collaboration inquiries: collaborate@pynevera.com",
                link: Some("mailto:collaborate@pynevera.com"),
            },
        ],
    },
    InfoCard {
        icon: Some(Icon::Globe),
        title: "Find Us Online",
        lines: &[
            InfoLine {
                text: "Twitter: @pynevera",
                link: Some("https://twitter.com/pynevera"),
            },
            InfoLine {
                text: "GitHub: pynevera",
                link: Some("https://github.com/pynevera"),
            },
            InfoLine {
                text: "Discord Community",
                link: Some("https://discord.gg/pynevera"),
            },
        ],
    },
];

static ABOUT: [InfoCard; 2] = [
    InfoCard {
        icon: None,
        title: "Our Story",
        lines: &[InfoLine {
            text: "Pynevera started as a university project by a group of cybersecurity enthusiasts. Today, we're working to make cybersecurity knowledge accessible to everyone through our platform. We believe in the power of community-driven security awareness and open-source collaboration.",
            link: None,
        }],
    },
    InfoCard {
        icon: None,
        title: "Join Our Mission",
        lines: &[InfoLine {
            text: "We're always looking for passionate individuals who want to contribute to our mission of making the digital world safer. Whether you're a student, researcher, or enthusiast, there's a place for you in our community.",
            link: None,
        }],
    },
];

static UPDATES: [InfoCard; 1] = [InfoCard {
    icon: None,
    title: "Stay Updated",
    lines: &[
        InfoLine {
            text: "Join our Discord community to stay updated with our latest projects and discussions.",
            link: Some("https://discord.gg/pynevera"),
        },
        InfoLine {
            text: "Coming Soon: Newsletter signup for weekly cybersecurity insights!",
            link: None,
        },
    ],
}];

static SECTIONS: [Section; 3] = [
    Section {
        id: "contact-channels",
        anchor: Some("channels"),
        heading: None,
        blurb: None,
        body: SectionBody::InfoCards(&CHANNELS),
        actions: &[],
    },
    Section {
        id: "about",
        anchor: Some("about"),
        heading: Some("About Pynevera"),
        blurb: None,
        body: SectionBody::InfoCards(&ABOUT),
        actions: &[],
    },
    Section {
        id: "updates",
        anchor: None,
        heading: None,
        blurb: None,
        body: SectionBody::InfoCards(&UPDATES),
        actions: &[],
    },
];

pub static PAGE: Page = Page {
    route: Route::Contact,
    hero: Hero {
        badge: None,
        headline: Headline {
            before: "Connect with",
            accent: "Pynevera",
            after: "",
        },
        tagline: "We're a passionate team of student developers and cybersecurity enthusiasts. Have questions, ideas, or want to collaborate? We'd love to hear from you!",
        image: None,
        gradient: Gradient::new(Hue::CyberBlue, Hue::CyberPurple),
        actions: &[],
        quick_access: &[],
    },
    sections: &SECTIONS,
};
