use cybercell_types::{
    Complexity, FrameworkEntry, Gradient, Hue, Icon, ImageAsset, Route, StrategyEntry,
};

use crate::page::{Headline, Hero, Page, Section, SectionBody};

static STRATEGIES: [StrategyEntry; 6] = [
    StrategyEntry {
        icon: Icon::Shield,
        title: "Defense in Depth",
        category: "Architecture",
        description: "Implement multiple layers of security controls to create a comprehensive defense strategy.",
        techniques: &[
            "Network segmentation",
            "Endpoint protection",
            "Application firewalls",
            "Access controls",
        ],
        effectiveness: "95%",
        complexity: Complexity::High,
    },
    StrategyEntry {
        icon: Icon::Eye,
        title: "Continuous Monitoring",
        category: "Detection",
        description: "Real-time surveillance and analysis of security events across all systems and networks.",
        techniques: &[
            "SIEM implementation",
            "Behavioral analytics",
            "Threat hunting",
            "Log correlation",
        ],
        effectiveness: "90%",
        complexity: Complexity::Medium,
    },
    StrategyEntry {
        icon: Icon::Lock,
        title: "Zero Trust Architecture",
        category: "Access Control",
        description: "Never trust, always verify approach to network security and access management.",
        techniques: &[
            "Identity verification",
            "Micro-segmentation",
            "Least privilege access",
            "Continuous authentication",
        ],
        effectiveness: "93%",
        complexity: Complexity::High,
    },
    StrategyEntry {
        icon: Icon::Users,
        title: "Security Awareness Training",
        category: "Human Factor",
        description: "Educate employees to become the first line of defense against cyber threats.",
        techniques: &[
            "Phishing simulations",
            "Security workshops",
            "Incident reporting",
            "Regular assessments",
        ],
        effectiveness: "85%",
        complexity: Complexity::Low,
    },
    StrategyEntry {
        icon: Icon::Zap,
        title: "Incident Response",
        category: "Recovery",
        description: "Rapid detection, containment, and recovery from security incidents.",
        techniques: &[
            "Response playbooks",
            "Forensic analysis",
            "Communication plans",
            "Lessons learned",
        ],
        effectiveness: "88%",
        complexity: Complexity::Medium,
    },
    StrategyEntry {
        icon: Icon::FileText,
        title: "Data Encryption",
        category: "Protection",
        description: "Protect sensitive data through encryption at rest, in transit, and in use.",
        techniques: &[
            "AES-256 encryption",
            "Key management",
            "Database encryption",
            "Secure communications",
        ],
        effectiveness: "92%",
        complexity: Complexity::Medium,
    },
];

static FRAMEWORKS: [FrameworkEntry; 3] = [
    FrameworkEntry {
        name: "NIST Cybersecurity Framework",
        description: "Comprehensive framework for managing cybersecurity risks",
        pillars: &["Identify", "Protect", "Detect", "Respond", "Recover"],
    },
    FrameworkEntry {
        name: "ISO 27001",
        description: "International standard for information security management",
        pillars: &["Risk Assessment", "Controls", "Monitoring", "Improvement"],
    },
    FrameworkEntry {
        name: "MITRE ATT&CK",
        description: "Knowledge base of adversary tactics and techniques",
        pillars: &["Tactics", "Techniques", "Procedures", "Mitigations"],
    },
];

static SECTIONS: [Section; 2] = [
    Section {
        id: "core-strategies",
        anchor: Some("strategies"),
        heading: Some("Core Mitigation Strategies"),
        blurb: Some(
            "Proven security strategies designed to prevent, detect, and respond to cyber threats effectively.",
        ),
        body: SectionBody::Strategies(&STRATEGIES),
        actions: &[],
    },
    Section {
        id: "industry-frameworks",
        anchor: Some("frameworks"),
        heading: Some("Industry Frameworks"),
        blurb: Some(
            "Established frameworks and standards that guide effective cybersecurity implementation.",
        ),
        body: SectionBody::Frameworks(&FRAMEWORKS),
        actions: &[],
    },
];

pub static PAGE: Page = Page {
    route: Route::Mitigation,
    hero: Hero {
        badge: Some("Mitigation Strategies"),
        headline: Headline {
            before: "",
            accent: "Advanced",
            after: "Defense Strategies",
        },
        tagline: "Comprehensive mitigation strategies and best practices to protect your organization against evolving cyber threats and minimize security risks.",
        image: Some(ImageAsset::Mitigation),
        gradient: Gradient::new(Hue::CyberGreen, Hue::CyberBlue),
        actions: &[],
        quick_access: &[],
    },
    sections: &SECTIONS,
};
