use cybercell_types::{
    BookEntry, CallToAction, Gradient, Hue, Icon, ImageAsset, Rating, ResourceCategory,
    ResourceEntry, Route, Target,
};

use crate::page::{Callout, Headline, Hero, Page, Section, SectionBody};

static LIBRARY: [ResourceCategory; 4] = [
    ResourceCategory {
        title: "Standards & Frameworks",
        icon: Icon::BookOpen,
        gradient: Gradient::new(Hue::CyberBlue, Hue::CyberPurple),
        resources: &[
            ResourceEntry {
                title: "NIST Cybersecurity Framework 2.0",
                description: "Comprehensive framework for managing cybersecurity risks",
                kind: "Framework",
                rating: Rating::new(5),
                last_updated: "2024",
                url: "https://nist.gov/cyberframework",
            },
            ResourceEntry {
                title: "ISO/IEC 27001:2022",
                description: "International standard for information security management systems",
                kind: "Standard",
                rating: Rating::new(5),
                last_updated: "2022",
                url: "https://iso.org/27001",
            },
            ResourceEntry {
                title: "CIS Controls v8",
                description: "Prioritized set of actions for cyber defense",
                kind: "Controls",
                rating: Rating::new(4),
                last_updated: "2021",
                url: "https://cisecurity.org/controls",
            },
        ],
    },
    ResourceCategory {
        title: "Threat Intelligence",
        icon: Icon::ExternalLink,
        gradient: Gradient::new(Hue::Red, Hue::Orange),
        resources: &[
            ResourceEntry {
                title: "MITRE ATT&CK Framework",
                description: "Knowledge base of adversary tactics and techniques",
                kind: "Knowledge Base",
                rating: Rating::new(5),
                last_updated: "2024",
                url: "https://attack.mitre.org",
            },
            ResourceEntry {
                title: "CISA Cybersecurity Advisories",
                description: "Government-issued security alerts and advisories",
                kind: "Alerts",
                rating: Rating::new(5),
                last_updated: "Daily",
                url: "https://cisa.gov/cybersecurity-advisories",
            },
            ResourceEntry {
                title: "OWASP Top 10",
                description: "Most critical web application security risks",
                kind: "Guide",
                rating: Rating::new(5),
                last_updated: "2021",
                url: "https://owasp.org/top10",
            },
        ],
    },
    ResourceCategory {
        title: "Training & Certification",
        icon: Icon::Users,
        gradient: Gradient::new(Hue::CyberGreen, Hue::CyberBlue),
        resources: &[
            ResourceEntry {
                title: "SANS Training Programs",
                description: "Professional cybersecurity training and certification",
                kind: "Training",
                rating: Rating::new(5),
                last_updated: "2024",
                url: "https://sans.org",
            },
            ResourceEntry {
                title: "Cybrary Free Courses",
                description: "Free cybersecurity training and career development",
                kind: "Courses",
                rating: Rating::new(4),
                last_updated: "2024",
                url: "https://cybrary.it",
            },
            ResourceEntry {
                title: "EC-Council Certifications",
                description: "Ethical hacking and security professional certifications",
                kind: "Certification",
                rating: Rating::new(4),
                last_updated: "2024",
                url: "https://eccouncil.org",
            },
        ],
    },
    ResourceCategory {
        title: "Tools & Resources",
        icon: Icon::Download,
        gradient: Gradient::new(Hue::Purple, Hue::Pink),
        resources: &[
            ResourceEntry {
                title: "Nmap Network Scanner",
                description: "Free and open source network discovery and security auditing",
                kind: "Tool",
                rating: Rating::new(5),
                last_updated: "2024",
                url: "https://nmap.org",
            },
            ResourceEntry {
                title: "Wireshark Protocol Analyzer",
                description: "World's foremost network protocol analyzer",
                kind: "Tool",
                rating: Rating::new(5),
                last_updated: "2024",
                url: "https://wireshark.org",
            },
            ResourceEntry {
                title: "YARA Pattern Matching",
                description: "Tool for malware identification and classification",
                kind: "Tool",
                rating: Rating::new(4),
                last_updated: "2024",
                url: "https://virustotal.github.io/yara",
            },
        ],
    },
];

static BOOKS: [BookEntry; 4] = [
    BookEntry {
        title: "The Art of Deception",
        author: "Kevin Mitnick",
        description: "Social engineering techniques and human-based attacks",
        category: "Social Engineering",
    },
    BookEntry {
        title: "Practical Malware Analysis",
        author: "Michael Sikorski",
        description: "Hands-on guide to malware analysis and reverse engineering",
        category: "Malware Analysis",
    },
    BookEntry {
        title: "Blue Team Handbook",
        author: "Don Murdoch",
        description: "Incident response edition for security professionals",
        category: "Incident Response",
    },
    BookEntry {
        title: "Hacking: The Art of Exploitation",
        author: "Jon Erickson",
        description: "Programming fundamentals for ethical hackers",
        category: "Ethical Hacking",
    },
];

static CONTRIBUTE_ACTIONS: [CallToAction; 2] = [
    CallToAction {
        label: "Submit Resource",
        target: Target::None,
        primary: true,
    },
    CallToAction {
        label: "Request Addition",
        target: Target::None,
        primary: false,
    },
];

static SECTIONS: [Section; 3] = [
    Section {
        id: "resource-library",
        anchor: Some("frameworks"),
        heading: Some("Resource Library"),
        blurb: Some(
            "Comprehensive collection of cybersecurity resources organized by category for easy access.",
        ),
        body: SectionBody::Library(&LIBRARY),
        actions: &[],
    },
    Section {
        id: "essential-reading",
        anchor: Some("reading"),
        heading: Some("Essential Reading"),
        blurb: Some(
            "Must-read books that every cybersecurity professional should have in their library.",
        ),
        body: SectionBody::Books(&BOOKS),
        actions: &[],
    },
    Section {
        id: "contribute",
        anchor: None,
        heading: None,
        blurb: None,
        body: SectionBody::Callout(Callout {
            icon: Icon::BookOpen,
            heading: "Contribute to Our Resource Library",
            text: "Help expand our collection by suggesting valuable resources, tools, or publications that benefit the cybersecurity community.",
            urgent: false,
        }),
        actions: &CONTRIBUTE_ACTIONS,
    },
];

pub static PAGE: Page = Page {
    route: Route::References,
    hero: Hero {
        badge: Some("References & Resources"),
        headline: Headline {
            before: "",
            accent: "Essential",
            after: "Security Resources",
        },
        tagline: "Curated collection of frameworks, standards, tools, and educational resources for cybersecurity professionals and organizations.",
        image: Some(ImageAsset::References),
        gradient: Gradient::new(Hue::CyberPurple, Hue::CyberPink),
        actions: &[],
        quick_access: &[],
    },
    sections: &SECTIONS,
};
