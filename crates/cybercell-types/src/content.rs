use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::display::{BadgeTone, Gradient, Icon, ImageAsset};
use crate::error::Error;
use crate::route::Target;

// ==========================================
// Labels
// ==========================================

/// Article category shown on magazine cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Awareness,
    Threats,
    Mitigation,
    References,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Awareness,
        Category::Threats,
        Category::Mitigation,
        Category::References,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Awareness => "Awareness",
            Category::Threats => "Threats",
            Category::Mitigation => "Mitigation",
            Category::References => "References",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownCategory(wanted.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Critical,
    High,
    Medium,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
        }
    }

    pub fn tone(self) -> BadgeTone {
        match self {
            Severity::Critical => BadgeTone::Red,
            Severity::High => BadgeTone::Orange,
            Severity::Medium => BadgeTone::Yellow,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Complexity {
    High,
    Medium,
    Low,
}

impl Complexity {
    pub fn label(self) -> &'static str {
        match self {
            Complexity::High => "High",
            Complexity::Medium => "Medium",
            Complexity::Low => "Low",
        }
    }

    pub fn tone(self) -> BadgeTone {
        match self {
            Complexity::High => BadgeTone::Red,
            Complexity::Medium => BadgeTone::Yellow,
            Complexity::Low => BadgeTone::Green,
        }
    }
}

/// Star rating out of five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MAX: u8 = 5;

    /// Values above five are clamped.
    pub const fn new(stars: u8) -> Self {
        if stars > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(stars)
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Filled flags for each of the five star slots.
    pub fn stars(self) -> [bool; 5] {
        std::array::from_fn(|i| (i as u8) < self.0)
    }
}

// ==========================================
// Records
// ==========================================

/// Magazine card content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArticleSummary {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: Category,
    pub read_time: &'static str,
    pub image: ImageAsset,
    pub gradient: Option<Gradient>,
    pub featured: bool,
}

impl ArticleSummary {
    pub fn gradient_or_default(&self) -> Gradient {
        self.gradient.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThreatEntry {
    pub icon: Icon,
    pub title: &'static str,
    pub severity: Severity,
    pub description: &'static str,
    pub impact: &'static str,
    pub trend: &'static str,
    pub gradient: Gradient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrategyEntry {
    pub icon: Icon,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub techniques: &'static [&'static str],
    pub effectiveness: &'static str,
    pub complexity: Complexity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameworkEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub pillars: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub kind: &'static str,
    pub rating: Rating,
    pub last_updated: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceCategory {
    pub title: &'static str,
    pub icon: Icon,
    pub gradient: Gradient,
    pub resources: &'static [ResourceEntry],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineEvent {
    pub month: &'static str,
    pub event: &'static str,
    pub impact: &'static str,
}

impl TimelineEvent {
    /// First word of the month label, shown inside the timeline marker.
    pub fn short_month(&self) -> &'static str {
        self.month.split_whitespace().next().unwrap_or(self.month)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AwarenessTopic {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub points: &'static [&'static str],
    pub link: Option<&'static str>,
    pub source: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Principle {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookEntry {
    pub title: &'static str,
    pub author: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub icon: Icon,
    pub number: &'static str,
    pub label: &'static str,
}

/// Linked teaser on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendingTopic {
    pub icon: Icon,
    pub title: &'static str,
    pub blurb: &'static str,
    pub gradient: Gradient,
    pub target: Target,
}

/// Shortcut tile under the home hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickAccess {
    pub icon: Icon,
    pub title: &'static str,
    pub blurb: &'static str,
    pub target: Target,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub label: &'static str,
    pub target: Target,
    pub primary: bool,
}

/// A line on an info card; `link` turns it into an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InfoLine {
    pub text: &'static str,
    pub link: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InfoCard {
    pub icon: Option<Icon>,
    pub title: &'static str,
    pub lines: &'static [InfoLine],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_label() {
        assert_eq!("Threats".parse::<Category>().unwrap(), Category::Threats);
        assert_eq!(" references ".parse::<Category>().unwrap(), Category::References);
        assert_eq!(
            "Vulnerabilities".parse::<Category>(),
            Err(Error::UnknownCategory("Vulnerabilities".to_string()))
        );
    }

    #[test]
    fn test_rating_clamps_and_fills() {
        assert_eq!(Rating::new(9).value(), 5);
        assert_eq!(Rating::new(4).stars(), [true, true, true, true, false]);
        assert_eq!(Rating::new(0).stars(), [false; 5]);
    }

    #[test]
    fn test_badge_tones() {
        assert_eq!(Severity::Critical.tone(), BadgeTone::Red);
        assert_eq!(Severity::Medium.tone(), BadgeTone::Yellow);
        assert_eq!(Complexity::Low.tone(), BadgeTone::Green);
        assert_eq!(Complexity::High.tone(), BadgeTone::Red);
    }

    #[test]
    fn test_timeline_short_month() {
        let event = TimelineEvent {
            month: "Dec 2024",
            event: "AI-powered phishing campaigns surge",
            impact: "340% increase in detection difficulty",
        };
        assert_eq!(event.short_month(), "Dec");
    }

    #[test]
    fn test_article_default_gradient() {
        let article = ArticleSummary {
            title: "t",
            excerpt: "e",
            category: Category::Awareness,
            read_time: "1 min",
            image: ImageAsset::CyberAwareness,
            gradient: None,
            featured: false,
        };
        assert_eq!(article.gradient_or_default(), Gradient::DEFAULT);
    }

    #[test]
    fn test_article_serializes_category_label() {
        let article = ArticleSummary {
            title: "t",
            excerpt: "e",
            category: Category::Mitigation,
            read_time: "10 min",
            image: ImageAsset::Mitigation,
            gradient: None,
            featured: true,
        };
        let json = serde_json::to_value(article).unwrap();
        assert_eq!(json["category"], "Mitigation");
        assert_eq!(json["image"], "mitigation");
    }
}
