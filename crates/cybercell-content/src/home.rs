use cybercell_types::{
    ArticleSummary, CallToAction, Category, Gradient, Hue, Icon, ImageAsset, QuickAccess, Route,
    Stat, Target, TrendingTopic,
};

use crate::page::{Headline, Hero, Page, Section, SectionBody};

pub static ARTICLES: [ArticleSummary; 4] = [
    ArticleSummary {
        title: "Building Cyber Awareness in the Digital Age",
        excerpt: "Understanding the fundamentals of cybersecurity and developing a security-first mindset in our increasingly connected world.",
        category: Category::Awareness,
        read_time: "8 min",
        image: ImageAsset::CyberAwareness,
        gradient: Some(Gradient::new(Hue::CyberBlue, Hue::CyberPurple)),
        featured: true,
    },
    ArticleSummary {
        title: "Latest Cyber Threats: 2024 Landscape",
        excerpt: "Comprehensive analysis of emerging threats including AI-powered attacks and zero-day exploits.",
        category: Category::Threats,
        read_time: "12 min",
        image: ImageAsset::CyberThreats,
        gradient: Some(Gradient::new(Hue::Red, Hue::CyberOrange)),
        featured: false,
    },
    ArticleSummary {
        title: "Effective Mitigation Strategies",
        excerpt: "Proven defense mechanisms and best practices for protecting your digital infrastructure.",
        category: Category::Mitigation,
        read_time: "10 min",
        image: ImageAsset::Mitigation,
        gradient: Some(Gradient::new(Hue::CyberGreen, Hue::CyberBlue)),
        featured: false,
    },
    ArticleSummary {
        title: "Essential Security References",
        excerpt: "Curated collection of frameworks, standards, and resources for cybersecurity professionals.",
        category: Category::References,
        read_time: "6 min",
        image: ImageAsset::References,
        gradient: Some(Gradient::new(Hue::CyberPurple, Hue::CyberPink)),
        featured: false,
    },
];

static STATS: [Stat; 4] = [
    Stat {
        icon: Icon::Shield,
        number: "2.5M+",
        label: "Threats Blocked",
    },
    Stat {
        icon: Icon::Eye,
        number: "150+",
        label: "Articles Published",
    },
    Stat {
        icon: Icon::Zap,
        number: "99.9%",
        label: "Uptime",
    },
    Stat {
        icon: Icon::BookOpen,
        number: "50k+",
        label: "Readers",
    },
];

static TRENDING: [TrendingTopic; 3] = [
    TrendingTopic {
        icon: Icon::Shield,
        title: "AI in Cybersecurity",
        blurb: "Machine learning applications in threat detection and response",
        gradient: Gradient::new(Hue::CyberBlue, Hue::CyberPurple),
        target: Target::anchored(Route::CyberAwareness, "ai-security"),
    },
    TrendingTopic {
        icon: Icon::Zap,
        title: "Zero-Day Exploits",
        blurb: "Analysis of recently discovered vulnerabilities",
        gradient: Gradient::new(Hue::Red, Hue::CyberOrange),
        target: Target::anchored(Route::RecentThreats, "zero-day"),
    },
    TrendingTopic {
        icon: Icon::Eye,
        title: "Cloud Security",
        blurb: "Best practices for securing cloud infrastructure",
        gradient: Gradient::new(Hue::CyberGreen, Hue::CyberBlue),
        target: Target::anchored(Route::Mitigation, "cloud-security"),
    },
];

static QUICK_ACCESS: [QuickAccess; 4] = [
    QuickAccess {
        icon: Icon::Shield,
        title: "Security Basics",
        blurb: "Essential cybersecurity fundamentals",
        target: Target::anchored(Route::CyberAwareness, "basics"),
    },
    QuickAccess {
        icon: Icon::Eye,
        title: "Threat Analysis",
        blurb: "Current threat landscape",
        target: Target::anchored(Route::RecentThreats, "analysis"),
    },
    QuickAccess {
        icon: Icon::Zap,
        title: "Defense Strategies",
        blurb: "Protection techniques",
        target: Target::anchored(Route::Mitigation, "strategies"),
    },
    QuickAccess {
        icon: Icon::BookOpen,
        title: "Resources",
        blurb: "Tools and references",
        target: Target::anchored(Route::References, "frameworks"),
    },
];

static HERO_ACTIONS: [CallToAction; 2] = [
    CallToAction {
        label: "Explore Articles",
        target: Target::route(Route::CyberAwareness),
        primary: true,
    },
    CallToAction {
        label: "Latest Threats",
        target: Target::route(Route::RecentThreats),
        primary: false,
    },
];

static GRID_ACTIONS: [CallToAction; 1] = [CallToAction {
    label: "View All Resources",
    target: Target::route(Route::References),
    primary: false,
}];

static SECTIONS: [Section; 3] = [
    Section {
        id: "impact-metrics",
        anchor: None,
        heading: Some("Impact Metrics"),
        blurb: None,
        body: SectionBody::Stats(&STATS),
        actions: &[],
    },
    Section {
        id: "trending-topics",
        anchor: None,
        heading: Some("Trending Topics"),
        blurb: None,
        body: SectionBody::Trending(&TRENDING),
        actions: &[],
    },
    Section {
        id: "latest-intelligence",
        anchor: Some("latest"),
        heading: Some("Latest Intelligence"),
        blurb: Some(
            "Stay ahead of emerging threats with our expert analysis and comprehensive security insights.",
        ),
        body: SectionBody::Articles(&ARTICLES),
        actions: &GRID_ACTIONS,
    },
];

pub static PAGE: Page = Page {
    route: Route::Home,
    hero: Hero {
        badge: None,
        headline: Headline {
            before: "",
            accent: "Cyber",
            after: "Security Intelligence",
        },
        tagline: "Navigate the evolving cybersecurity landscape with cutting-edge insights, threat intelligence, and expert-curated defense strategies.",
        image: Some(ImageAsset::HeroCyber),
        gradient: Gradient::new(Hue::CyberPurple, Hue::CyberBlue),
        actions: &HERO_ACTIONS,
        quick_access: &QUICK_ACCESS,
    },
    sections: &SECTIONS,
};
