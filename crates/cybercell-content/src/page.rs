use cybercell_types::{
    ArticleSummary, AwarenessTopic, BookEntry, CallToAction, FrameworkEntry, Gradient, Icon,
    ImageAsset, InfoCard, Principle, QuickAccess, ResourceCategory, Route, Stat, StrategyEntry,
    ThreatEntry, TimelineEvent, TrendingTopic,
};
use serde::Serialize;

/// One routed page: a hero followed by sections, top to bottom.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Page {
    pub route: Route,
    pub hero: Hero,
    pub sections: &'static [Section],
}

impl Page {
    /// Section carrying the given anchor, if any.
    pub fn anchored_section(&self, anchor: &str) -> Option<(usize, &Section)> {
        self.sections
            .iter()
            .enumerate()
            .find(|(_, s)| s.anchor == Some(anchor))
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }
}

/// Headline with an accented middle part, e.g. "Building a *Security-First* Culture".
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Headline {
    pub before: &'static str,
    pub accent: &'static str,
    pub after: &'static str,
}

impl Headline {
    pub fn text(&self) -> String {
        [self.before, self.accent, self.after]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Hero {
    pub badge: Option<&'static str>,
    pub headline: Headline,
    pub tagline: &'static str,
    pub image: Option<ImageAsset>,
    pub gradient: Gradient,
    pub actions: &'static [CallToAction],
    pub quick_access: &'static [QuickAccess],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Section {
    /// Stable key, unique within the page
    pub id: &'static str,
    /// Fragment target for `#anchor` navigation
    pub anchor: Option<&'static str>,
    pub heading: Option<&'static str>,
    pub blurb: Option<&'static str>,
    pub body: SectionBody,
    /// Buttons shown under the body
    pub actions: &'static [CallToAction],
}

/// Emphasized panel with an icon, used for alerts and contribution prompts.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Callout {
    pub icon: Icon,
    pub heading: &'static str,
    pub text: &'static str,
    pub urgent: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum SectionBody {
    Stats(&'static [Stat]),
    Trending(&'static [TrendingTopic]),
    Articles(&'static [ArticleSummary]),
    Principles(&'static [Principle]),
    Topics(&'static [AwarenessTopic]),
    Threats(&'static [ThreatEntry]),
    Timeline(&'static [TimelineEvent]),
    Strategies(&'static [StrategyEntry]),
    Frameworks(&'static [FrameworkEntry]),
    Library(&'static [ResourceCategory]),
    Books(&'static [BookEntry]),
    InfoCards(&'static [InfoCard]),
    Callout(Callout),
}

impl SectionBody {
    /// Number of cards the body renders. A resource library counts every
    /// resource across its categories.
    pub fn card_count(&self) -> usize {
        match self {
            SectionBody::Stats(items) => items.len(),
            SectionBody::Trending(items) => items.len(),
            SectionBody::Articles(items) => items.len(),
            SectionBody::Principles(items) => items.len(),
            SectionBody::Topics(items) => items.len(),
            SectionBody::Threats(items) => items.len(),
            SectionBody::Timeline(items) => items.len(),
            SectionBody::Strategies(items) => items.len(),
            SectionBody::Frameworks(items) => items.len(),
            SectionBody::Library(groups) => groups.iter().map(|g| g.resources.len()).sum(),
            SectionBody::Books(items) => items.len(),
            SectionBody::InfoCards(items) => items.len(),
            SectionBody::Callout(_) => 1,
        }
    }

    /// Card titles in display order.
    pub fn titles(&self) -> Vec<&'static str> {
        match self {
            SectionBody::Stats(items) => items.iter().map(|s| s.label).collect(),
            SectionBody::Trending(items) => items.iter().map(|t| t.title).collect(),
            SectionBody::Articles(items) => items.iter().map(|a| a.title).collect(),
            SectionBody::Principles(items) => items.iter().map(|p| p.title).collect(),
            SectionBody::Topics(items) => items.iter().map(|t| t.title).collect(),
            SectionBody::Threats(items) => items.iter().map(|t| t.title).collect(),
            SectionBody::Timeline(items) => items.iter().map(|t| t.event).collect(),
            SectionBody::Strategies(items) => items.iter().map(|s| s.title).collect(),
            SectionBody::Frameworks(items) => items.iter().map(|f| f.name).collect(),
            SectionBody::Library(groups) => groups
                .iter()
                .flat_map(|g| g.resources.iter().map(|r| r.title))
                .collect(),
            SectionBody::Books(items) => items.iter().map(|b| b.title).collect(),
            SectionBody::InfoCards(items) => items.iter().map(|c| c.title).collect(),
            SectionBody::Callout(callout) => vec![callout.heading],
        }
    }
}
