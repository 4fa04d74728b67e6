use cybercell_types::{
    CallToAction, Gradient, Hue, Icon, ImageAsset, Route, Severity, Target, ThreatEntry,
    TimelineEvent,
};

use crate::page::{Callout, Headline, Hero, Page, Section, SectionBody};

static THREATS: [ThreatEntry; 6] = [
    ThreatEntry {
        icon: Icon::Bot,
        title: "AI-Powered Attacks",
        severity: Severity::Critical,
        description: "Advanced machine learning algorithms being used to automate and enhance cyber attacks, making them more sophisticated and harder to detect.",
        impact: "Automated phishing, deepfake fraud, intelligent malware",
        trend: "↗️ 340% increase",
        gradient: Gradient::new(Hue::Red, Hue::Orange),
    },
    ThreatEntry {
        icon: Icon::Zap,
        title: "Zero-Day Exploits",
        severity: Severity::High,
        description: "Previously unknown vulnerabilities being weaponized faster than ever, with exploit kits becoming more accessible.",
        impact: "System compromise, data breaches, privilege escalation",
        trend: "↗️ 85% increase",
        gradient: Gradient::new(Hue::Orange, Hue::Yellow),
    },
    ThreatEntry {
        icon: Icon::Globe,
        title: "Supply Chain Attacks",
        severity: Severity::Critical,
        description: "Targeting third-party vendors and software dependencies to gain access to multiple organizations simultaneously.",
        impact: "Widespread compromise, trusted software corruption",
        trend: "↗️ 200% increase",
        gradient: Gradient::new(Hue::Red, Hue::Red),
    },
    ThreatEntry {
        icon: Icon::Wifi,
        title: "IoT Botnets",
        severity: Severity::Medium,
        description: "Compromised Internet of Things devices being leveraged for large-scale DDoS attacks and cryptocurrency mining.",
        impact: "Network disruption, resource theft, privacy violation",
        trend: "↗️ 120% increase",
        gradient: Gradient::new(Hue::Yellow, Hue::Green),
    },
    ThreatEntry {
        icon: Icon::Cpu,
        title: "Ransomware-as-a-Service",
        severity: Severity::Critical,
        description: "Sophisticated ransomware operations being offered as subscription services, lowering the barrier for cybercriminals.",
        impact: "Business disruption, data encryption, financial loss",
        trend: "↗️ 180% increase",
        gradient: Gradient::new(Hue::Purple, Hue::Pink),
    },
    ThreatEntry {
        icon: Icon::AlertTriangle,
        title: "Cloud Misconfigurations",
        severity: Severity::High,
        description: "Improperly configured cloud services exposing sensitive data and creating entry points for attackers.",
        impact: "Data exposure, unauthorized access, compliance violations",
        trend: "↗️ 150% increase",
        gradient: Gradient::new(Hue::Blue, Hue::Cyan),
    },
];

static TIMELINE: [TimelineEvent; 5] = [
    TimelineEvent {
        month: "Dec 2024",
        event: "AI-powered phishing campaigns surge",
        impact: "340% increase in detection difficulty",
    },
    TimelineEvent {
        month: "Nov 2024",
        event: "Supply chain attacks target CI/CD pipelines",
        impact: "Major cloud providers affected",
    },
    TimelineEvent {
        month: "Oct 2024",
        event: "Ransomware groups adopt RaaS model",
        impact: "Lower barrier to entry for attackers",
    },
    TimelineEvent {
        month: "Sep 2024",
        event: "Zero-day exploits in popular frameworks",
        impact: "Millions of applications vulnerable",
    },
    TimelineEvent {
        month: "Aug 2024",
        event: "IoT botnet reaches 2M+ devices",
        impact: "Record-breaking DDoS attacks launched",
    },
];

static ALERT_ACTIONS: [CallToAction; 2] = [
    CallToAction {
        label: "View Security Alerts",
        target: Target::None,
        primary: true,
    },
    CallToAction {
        label: "Contact Security Team",
        target: Target::None,
        primary: false,
    },
];

static SECTIONS: [Section; 3] = [
    Section {
        id: "threat-dashboard",
        anchor: Some("analysis"),
        heading: Some("Threat Intelligence Dashboard"),
        blurb: Some(
            "Real-time analysis of the most significant cyber threats currently impacting organizations globally.",
        ),
        body: SectionBody::Threats(&THREATS),
        actions: &[],
    },
    Section {
        id: "attack-timeline",
        anchor: Some("timeline"),
        heading: Some("Attack Evolution Timeline"),
        blurb: Some(
            "Understanding how cyber threats have evolved and adapted over recent months.",
        ),
        body: SectionBody::Timeline(&TIMELINE),
        actions: &[],
    },
    Section {
        id: "critical-alert",
        anchor: None,
        heading: None,
        blurb: None,
        body: SectionBody::Callout(Callout {
            icon: Icon::AlertTriangle,
            heading: "Critical Alert: Stay Vigilant",
            text: "Current threat levels are elevated. Implement additional security measures and ensure your incident response plans are updated and tested.",
            urgent: true,
        }),
        actions: &ALERT_ACTIONS,
    },
];

pub static PAGE: Page = Page {
    route: Route::RecentThreats,
    hero: Hero {
        badge: Some("Recent Threats"),
        headline: Headline {
            before: "",
            accent: "Emerging",
            after: "Cyber Threats",
        },
        tagline: "Stay informed about the latest cybersecurity threats, attack vectors, and emerging risks that pose significant challenges to organizations worldwide.",
        image: Some(ImageAsset::CyberThreats),
        gradient: Gradient::new(Hue::Red, Hue::Orange),
        actions: &[],
        quick_access: &[],
    },
    sections: &SECTIONS,
};
