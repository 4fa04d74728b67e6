use cybercell_types::{AwarenessTopic, Gradient, Hue, Icon, ImageAsset, Principle, Route};

use crate::page::{Headline, Hero, Page, Section, SectionBody};

static PRINCIPLES: [Principle; 3] = [
    Principle {
        icon: Icon::CheckCircle,
        title: "Zero Trust",
        description: "Never trust, always verify - implementing comprehensive security validation for every access request.",
    },
    Principle {
        icon: Icon::Target,
        title: "Defense in Depth",
        description: "Layered security approach with multiple defensive measures to protect against various attack vectors.",
    },
    Principle {
        icon: Icon::Brain,
        title: "Continuous Learning",
        description: "Staying updated with the latest threats, vulnerabilities, and security best practices.",
    },
];

static TOPICS: [AwarenessTopic; 4] = [
    AwarenessTopic {
        icon: Icon::Brain,
        title: "Security Mindset",
        description: "Developing a proactive approach to identifying and mitigating cyber risks in daily operations.",
        points: &[
            "Think before you click",
            "Verify before you trust",
            "Question unusual requests",
        ],
        link: Some("https://www.cisa.gov/cyber-essentials"),
        source: "CISA Cyber Essentials",
    },
    AwarenessTopic {
        icon: Icon::Users,
        title: "Human Factor",
        description: "Understanding how social engineering exploits human psychology and building defense mechanisms.",
        points: &[
            "Phishing awareness",
            "Social engineering tactics",
            "Incident reporting",
        ],
        link: Some("https://www.nist.gov/itl/applied-cybersecurity/nice"),
        source: "NIST Cybersecurity Workforce Framework",
    },
    AwarenessTopic {
        icon: Icon::Lock,
        title: "Data Protection",
        description: "Implementing best practices for safeguarding sensitive information and maintaining privacy.",
        points: &[
            "Encryption standards",
            "Access controls",
            "Data classification",
        ],
        link: Some("https://www.enisa.europa.eu/topics/data-protection"),
        source: "ENISA Data Protection",
    },
    AwarenessTopic {
        icon: Icon::AlertTriangle,
        title: "Threat Recognition",
        description: "Identifying common attack vectors and understanding the indicators of compromise.",
        points: &[
            "Malware signatures",
            "Suspicious activities",
            "Network anomalies",
        ],
        link: Some("https://www.mitre.org/attack"),
        source: "MITRE ATT&CK Framework",
    },
];

static SECTIONS: [Section; 2] = [
    Section {
        id: "core-principles",
        anchor: Some("basics"),
        heading: Some("Core Security Principles"),
        blurb: Some(
            "Fundamental concepts that form the foundation of effective cybersecurity awareness and practice.",
        ),
        body: SectionBody::Principles(&PRINCIPLES),
        actions: &[],
    },
    Section {
        id: "awareness-areas",
        anchor: Some("topics"),
        heading: Some("Key Awareness Areas"),
        blurb: Some(
            "Essential knowledge domains every security-conscious individual should master.",
        ),
        body: SectionBody::Topics(&TOPICS),
        actions: &[],
    },
];

pub static PAGE: Page = Page {
    route: Route::CyberAwareness,
    hero: Hero {
        badge: Some("Cyber Awareness"),
        headline: Headline {
            before: "Building a",
            accent: "Security-First",
            after: "Culture",
        },
        tagline: "Empowering individuals and organizations with the knowledge and skills needed to recognize, prevent, and respond to cyber threats effectively.",
        image: Some(ImageAsset::CyberAwareness),
        gradient: Gradient::new(Hue::CyberBlue, Hue::CyberPurple),
        actions: &[],
        quick_access: &[],
    },
    sections: &SECTIONS,
};
